use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    config::Config,
    core::{
        plan::candidate_days,
        probability::{AbsenceRates, Probability},
        weights::{Weight, Weights},
    },
    prelude::*,
};

/// Line-based questionnaire which keeps asking until it gets a valid answer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask for the absence rate on every candidate day.
    ///
    /// An empty answer takes the configured default, or zero when the day has none.
    #[instrument(skip_all)]
    pub fn ask_absence_rates(&mut self, config: &Config) -> Result<AbsenceRates> {
        let mut absence_rates = AbsenceRates::default();
        for day in candidate_days() {
            let default = config.default_absence(day).unwrap_or(Probability::ZERO);
            let probability = self.ask(
                &format!("Absence rate on {day}, decimal or a/b [{default}]: "),
                "for example: 0.48 or 25/52",
                default,
            )?;
            debug!(%day, %probability, "absence rate");
            absence_rates.insert(day, probability);
        }
        Ok(absence_rates)
    }

    #[instrument(skip_all)]
    pub fn ask_weights(&mut self, defaults: Weights) -> Result<Weights> {
        let alpha: Weight = self.ask(
            &format!("Alpha, sensitivity to long work stretches [{}]: ", defaults.alpha),
            "for example: 1 or 2.5",
            defaults.alpha,
        )?;
        let beta: Weight = self.ask(
            &format!("Beta, sensitivity to being disturbed on leave [{}]: ", defaults.beta),
            "for example: 1 or 2.5",
            defaults.beta,
        )?;
        Ok(Weights { alpha, beta })
    }

    fn ask<T>(&mut self, prompt: &str, hint: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("input ended before all the answers were given");
            }
            let input = line.trim();
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse() {
                Ok(value) => return Ok(value),
                Err(error) => writeln!(self.writer, "{error}, try again ({hint})")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::day::Day;

    fn prompter(input: &str) -> Prompter<Cursor<&str>, Vec<u8>> {
        Prompter::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn test_ask_absence_rates() {
        let mut prompter = prompter("0.5\n25/50\n\n\n1\n0\n");
        let absence_rates = prompter.ask_absence_rates(&Config::default()).unwrap();
        assert_abs_diff_eq!(absence_rates.get(Day(12)).unwrap().get(), 0.5);
        assert_abs_diff_eq!(absence_rates.get(Day(13)).unwrap().get(), 0.5);
        assert_abs_diff_eq!(absence_rates.get(Day(14)).unwrap().get(), 26.0 / 31.0);
        assert_abs_diff_eq!(absence_rates.get(Day(24)).unwrap().get(), 18.0 / 31.0);
        assert_abs_diff_eq!(absence_rates.get(Day(25)).unwrap().get(), 1.0);
        assert_abs_diff_eq!(absence_rates.get(Day(26)).unwrap().get(), 0.0);
    }

    #[test]
    fn test_day_without_default_is_zero() {
        let config: Config = toml::from_str("").unwrap();
        let mut prompter = prompter("\n\n\n\n\n\n");
        let absence_rates = prompter.ask_absence_rates(&config).unwrap();
        for day in candidate_days() {
            assert_abs_diff_eq!(absence_rates.get(day).unwrap().get(), 0.0);
        }
    }

    #[test]
    fn test_invalid_input_is_asked_again() {
        let mut prompter = prompter("oops\n1/0\n1.5\n0.25\n");
        let probability: Probability =
            prompter.ask("Rate: ", "for example: 0.48", Probability::ZERO).unwrap();
        assert_abs_diff_eq!(probability.get(), 0.25);

        let output = String::from_utf8(prompter.writer).unwrap();
        assert_eq!(output.matches("Rate: ").count(), 4);
        assert!(output.contains("`oops` is neither a decimal nor an `a/b` fraction"));
        assert!(output.contains("the fraction denominator is zero"));
        assert!(output.contains("1.5 is outside of [0, 1]"));
    }

    #[test]
    fn test_ask_weights() {
        let mut prompter = prompter("-1\n2.5\n\n");
        let weights = prompter.ask_weights(Weights::default()).unwrap();
        assert_abs_diff_eq!(weights.alpha.get(), 2.5);
        assert_abs_diff_eq!(weights.beta.get(), 1.0);

        let output = String::from_utf8(prompter.writer).unwrap();
        assert!(output.contains("weight must be a positive number, got -1"));
    }

    #[test]
    fn test_end_of_input() {
        let mut prompter = prompter("0.5\n");
        assert!(prompter.ask_absence_rates(&Config::default()).is_err());
    }
}
