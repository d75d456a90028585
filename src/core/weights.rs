use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Strictly positive, finite cost multiplier.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const ONE: Self = Self(1.0);

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum WeightError {
    #[display("`{input}` is not a number")]
    Malformed { input: String },

    #[display("weight must be a positive number, got {value}")]
    NonPositive { value: f64 },
}

impl TryFrom<f64> for Weight {
    type Error = WeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(WeightError::NonPositive { value })
        }
    }
}

impl FromStr for Weight {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let value: f64 =
            input.parse().map_err(|_| WeightError::Malformed { input: input.to_string() })?;
        Self::try_from(value)
    }
}

/// How much the person cares about each of the costs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights {
    /// Sensitivity to long stretches of work.
    pub alpha: Weight,

    /// Sensitivity to being disturbed while on leave.
    pub beta: Weight,
}

impl Default for Weights {
    fn default() -> Self {
        Self { alpha: Weight::ONE, beta: Weight::ONE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("2.5".parse::<Weight>().unwrap().get(), 2.5);
        assert_eq!("0".parse::<Weight>(), Err(WeightError::NonPositive { value: 0.0 }));
        assert_eq!("-1".parse::<Weight>(), Err(WeightError::NonPositive { value: -1.0 }));
        assert_eq!("much".parse::<Weight>(), Err(WeightError::Malformed { input: "much".into() }));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!("inf".parse::<Weight>().is_err());
        assert!("NaN".parse::<Weight>().is_err());
    }
}
