use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Deserialize;

use crate::{core::day::Day, prelude::*};

/// Share of colleagues absent on a day, always within `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Self = Self(0.0);

    /// Share of `n_absent` out of `n_total` colleagues.
    ///
    /// Panics on an impossible head count, which fails the build when used in a constant.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn from_head_count(n_absent: u8, n_total: u8) -> Self {
        assert!(n_total != 0 && n_absent <= n_total, "impossible head count");
        Self(n_absent as f64 / n_total as f64)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Share of colleagues still at work.
    #[must_use]
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

impl Display for Probability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ProbabilityError {
    #[display("empty input")]
    Empty,

    #[display("`{input}` is neither a decimal nor an `a/b` fraction")]
    Malformed { input: String },

    #[display("the fraction denominator is zero")]
    ZeroDenominator,

    #[display("{value} is outside of [0, 1]")]
    OutOfRange { value: f64 },
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProbabilityError::OutOfRange { value })
        }
    }
}

/// Accepts either a decimal (`0.48`) or a fraction (`25/52`).
impl FromStr for Probability {
    type Err = ProbabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ProbabilityError::Empty);
        }
        let malformed = || ProbabilityError::Malformed { input: input.to_string() };
        let value = if let Some((numerator, denominator)) = input.split_once('/') {
            let numerator: f64 = numerator.trim().parse().map_err(|_| malformed())?;
            let denominator: f64 = denominator.trim().parse().map_err(|_| malformed())?;
            if denominator == 0.0 {
                return Err(ProbabilityError::ZeroDenominator);
            }
            numerator / denominator
        } else {
            input.parse().map_err(|_| malformed())?
        };
        Self::try_from(value)
    }
}

/// Absence rate per day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbsenceRates(BTreeMap<Day, Probability>);

impl AbsenceRates {
    pub fn insert(&mut self, day: Day, probability: Probability) {
        self.0.insert(day, probability);
    }

    /// Absence rate on the day.
    ///
    /// An unmapped day means the caller did not resolve the complete map before scoring.
    pub fn get(&self, day: Day) -> Result<Probability> {
        self.0.get(&day).copied().with_context(|| format!("no absence rate is known for {day}"))
    }

    /// Check that every one of the days has an absence rate.
    pub fn ensure_covers(&self, days: impl IntoIterator<Item = Day>) -> Result {
        for day in days {
            self.get(day)?;
        }
        Ok(())
    }
}

impl FromIterator<(Day, Probability)> for AbsenceRates {
    fn from_iter<T: IntoIterator<Item = (Day, Probability)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Day, Probability)> for AbsenceRates {
    fn extend<T: IntoIterator<Item = (Day, Probability)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
