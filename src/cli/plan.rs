use std::io;

use clap::Parser;

use crate::{
    cli::{ConfigArgs, WeightArgs, prompt::Prompter, recommend},
    prelude::*,
};

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    config: ConfigArgs,

    #[clap(flatten)]
    weights: WeightArgs,
}

impl PlanArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let config = self.config.read()?;
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        let absence_rates = prompter.ask_absence_rates(&config)?;
        let weights = prompter.ask_weights(self.weights.into())?;
        recommend(&absence_rates, weights)
    }
}
