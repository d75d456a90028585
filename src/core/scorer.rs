use std::cmp::Reverse;

use bon::Builder;
use ordered_float::OrderedFloat;

use crate::{
    core::{
        calendar::workday_blocks,
        cost::{disturbance, fatigue},
        plan::Plan,
        probability::AbsenceRates,
        weights::Weights,
    },
    prelude::*,
};

/// Plan together with everything that went into its score.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub plan: Plan,

    /// Lengths of the remaining workday stretches.
    pub workday_blocks: Vec<usize>,

    pub fatigue: f64,
    pub disturbance: f64,

    /// Weighted sum of fatigue and disturbance.
    pub total_cost: f64,

    /// Inverted total cost, higher is better.
    pub score: f64,
}

#[derive(Builder)]
pub struct Scorer<'a> {
    absence_rates: &'a AbsenceRates,
    weights: Weights,
}

impl Scorer<'_> {
    pub fn evaluate(&self, plan: &Plan) -> Result<Evaluation> {
        let workday_blocks = workday_blocks(plan);
        let fatigue = fatigue(&workday_blocks);
        let disturbance = disturbance(plan, self.absence_rates)?;
        let total_cost =
            self.weights.alpha.get() * fatigue + self.weights.beta.get() * disturbance;
        ensure!(
            total_cost > 0.0,
            "total cost of {plan} is not positive ({total_cost}), refusing to invert it",
        );
        let score = total_cost.recip();
        ensure!(score.is_finite(), "score of {plan} overflows (total cost is {total_cost})");
        Ok(Evaluation { plan: *plan, workday_blocks, fatigue, disturbance, total_cost, score })
    }

    /// Score of a single plan, the binary itself only ever needs the full ranking.
    #[cfg_attr(not(test), expect(dead_code))]
    pub fn score(&self, plan: &Plan) -> Result<f64> {
        Ok(self.evaluate(plan)?.score)
    }

    /// Evaluate the plans and order them from the best to the worst.
    ///
    /// Equally scored plans keep their original order.
    #[instrument(
        skip_all,
        fields(n_plans = plans.len(), alpha = %self.weights.alpha, beta = %self.weights.beta),
    )]
    pub fn rank(&self, plans: &[Plan]) -> Result<Vec<Evaluation>> {
        let mut evaluations = plans
            .iter()
            .map(|plan| -> Result<Evaluation> {
                let evaluation = self.evaluate(plan)?;
                trace!(
                    %plan,
                    blocks = ?evaluation.workday_blocks,
                    fatigue = evaluation.fatigue,
                    disturbance = evaluation.disturbance,
                    score = evaluation.score,
                    "evaluated",
                );
                Ok(evaluation)
            })
            .collect::<Result<Vec<_>>>()?;
        evaluations.sort_by_key(|evaluation| Reverse(OrderedFloat(evaluation.score)));
        if let Some(best) = evaluations.first() {
            debug!(plan = %best.plan, score = best.score, "ranked");
        }
        Ok(evaluations)
    }
}
