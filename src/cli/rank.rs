use clap::Parser;

use crate::{
    cli::{ConfigArgs, WeightArgs, recommend},
    core::{day::Day, plan::candidate_days, probability::Probability},
    prelude::*,
};

#[derive(Parser)]
pub struct RankArgs {
    #[clap(flatten)]
    config: ConfigArgs,

    #[clap(flatten)]
    weights: WeightArgs,

    /// Absence rate overriding the configured one, for example: `12=6/31` or `25=0.45`.
    #[clap(
        long = "absence",
        env = "ABSENCE",
        value_delimiter = ',',
        value_parser = parse_absence
    )]
    absence: Vec<(Day, Probability)>,
}

impl RankArgs {
    #[instrument(skip_all, fields(n_overrides = self.absence.len()))]
    pub fn run(self) -> Result {
        let mut absence_rates = self.config.read()?.absence_rates();
        absence_rates.extend(self.absence);
        absence_rates
            .ensure_covers(candidate_days())
            .context("pass `--absence DAY=RATE` for every candidate day")?;
        recommend(&absence_rates, self.weights.into())
    }
}

fn parse_absence(text: &str) -> Result<(Day, Probability)> {
    let (day, probability) =
        text.split_once('=').with_context(|| format!("`{text}` is not `DAY=RATE`"))?;
    Ok((day.parse()?, probability.parse()?))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_absence() {
        let (day, probability) = parse_absence("12=6/31").unwrap();
        assert_eq!(day, Day(12));
        assert_abs_diff_eq!(probability.get(), 6.0 / 31.0);
    }

    #[test]
    fn test_parse_absence_errors() {
        assert!(parse_absence("12").is_err());
        assert!(parse_absence("32=0.5").is_err());
        assert!(parse_absence("12=2").is_err());
    }

    #[test]
    fn test_args() {
        let args = RankArgs::try_parse_from([
            "rank",
            "--alpha",
            "2",
            "--absence",
            "12=0.5,13=1/4",
            "--absence",
            "26=0",
        ])
        .unwrap();
        assert_abs_diff_eq!(args.weights.alpha.get(), 2.0);
        assert_abs_diff_eq!(args.weights.beta.get(), 1.0);
        assert_eq!(args.absence.len(), 3);
        assert_eq!(args.absence[1].0, Day(13));
        assert_abs_diff_eq!(args.absence[1].1.get(), 0.25);
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        assert!(RankArgs::try_parse_from(["rank", "--beta", "0"]).is_err());
    }
}
