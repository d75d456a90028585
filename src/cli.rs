mod plan;
mod prompt;
mod rank;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{plan::PlanArgs, rank::RankArgs},
    config::Config,
    core::{
        plan::generate_plans,
        probability::AbsenceRates,
        scorer::Scorer,
        weights::{Weight, Weights},
    },
    prelude::*,
    tables::build_ranking_table,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask for the colleague absence rates and the weights, then recommend the leave days.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Rank the leave plans without asking anything.
    #[clap(name = "rank")]
    Rank(Box<RankArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Plan(args) => args.run(),
            Self::Rank(args) => args.run(),
        }
    }
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// TOML file with the default absence rates, the surveyed rates are used when it is missing.
    #[clap(
        long = "config",
        env = "LEAVE_PLANNER_CONFIG",
        default_value = "leave-planner.toml"
    )]
    pub path: PathBuf,
}

impl ConfigArgs {
    pub fn read(&self) -> Result<Config> {
        Config::read_from(&self.path)
    }
}

#[derive(Copy, Clone, Parser)]
pub struct WeightArgs {
    /// Sensitivity to long stretches of work (α).
    #[clap(long, env = "ALPHA", default_value = "1")]
    pub alpha: Weight,

    /// Sensitivity to being disturbed while on leave (β).
    #[clap(long, env = "BETA", default_value = "1")]
    pub beta: Weight,
}

impl From<WeightArgs> for Weights {
    fn from(args: WeightArgs) -> Self {
        Self { alpha: args.alpha, beta: args.beta }
    }
}

/// Rank every legal plan and print the ranking together with the recommendation.
#[instrument(skip_all)]
fn recommend(absence_rates: &AbsenceRates, weights: Weights) -> Result {
    let ranking = Scorer::builder()
        .absence_rates(absence_rates)
        .weights(weights)
        .build()
        .rank(&generate_plans())?;
    let best = ranking.first().context("there are no plans to recommend")?;
    info!(plan = %best.plan, score = best.score, "recommended");

    println!("{}", build_ranking_table(&ranking));
    println!("Recommended leave: {}", best.plan);
    println!("Score (higher is better): {:.6}", best.score);
    Ok(())
}
