use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
    core::{
        day::Day,
        probability::{AbsenceRates, Probability},
    },
    prelude::*,
};

/// Surveyed colleague absence.
const SURVEYED_ABSENCE: [(Day, Probability); 6] = [
    (Day(12), Probability::from_head_count(6, 31)),
    (Day(13), Probability::from_head_count(18, 31)),
    (Day(14), Probability::from_head_count(26, 31)),
    (Day(24), Probability::from_head_count(18, 31)),
    (Day(25), Probability::from_head_count(14, 31)),
    (Day(26), Probability::from_head_count(1, 31)),
];

/// Default inputs offered to the user.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Default absence rate per day, either a number or an `a/b` string.
    #[serde_as(as = "BTreeMap<DisplayFromStr, PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    absence: BTreeMap<Day, Probability>,
}

impl Default for Config {
    fn default() -> Self {
        Self { absence: SURVEYED_ABSENCE.into_iter().collect() }
    }
}

impl Config {
    /// Read the config, falling back to the surveyed defaults when there is no such file.
    #[instrument(name = "reading the config…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            let config = toml::from_slice(&fs::read(path)?)
                .with_context(|| format!("failed to parse `{}`", path.display()))?;
            Ok(config)
        } else {
            debug!("no config file, using the surveyed defaults");
            Ok(Self::default())
        }
    }

    pub fn default_absence(&self, day: Day) -> Option<Probability> {
        self.absence.get(&day).copied()
    }

    pub fn absence_rates(&self) -> AbsenceRates {
        self.absence.iter().map(|(day, probability)| (*day, *probability)).collect()
    }
}
