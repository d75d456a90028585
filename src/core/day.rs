use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Month the holiday block falls into, used only for rendering.
const MONTH: u8 = 2;

/// Day of month within the planning window.
///
/// Both sides of the holiday share one numbering, so days compare as plain integers.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(pub u8);

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{MONTH:02}-{:02}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DayError {
    #[display("`{input}` is not a day number")]
    Malformed { input: String },

    #[display("day {day} is outside of 1–31")]
    OutOfRange { day: u8 },
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let day: u8 =
            input.parse().map_err(|_| DayError::Malformed { input: input.to_string() })?;
        if (1..=31).contains(&day) { Ok(Self(day)) } else { Err(DayError::OutOfRange { day }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Day(9).to_string(), "02-09");
        assert_eq!(Day(24).to_string(), "02-24");
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 12 ".parse::<Day>(), Ok(Day(12)));
        assert_eq!("0".parse::<Day>(), Err(DayError::OutOfRange { day: 0 }));
        assert_eq!("twelve".parse::<Day>(), Err(DayError::Malformed { input: "twelve".into() }));
    }
}
