use crate::{
    core::{
        plan::Plan,
        probability::{AbsenceRates, Probability},
    },
    prelude::*,
};

/// Workdays in a row which do not tire yet.
const FATIGUE_THRESHOLD: usize = 5;

/// Fatigue multiplier for each extra workday in a row.
const FATIGUE_GROWTH: f64 = 1.3;

/// Fatigue of a single uninterrupted stretch of `n_workdays`.
#[must_use]
pub fn block_fatigue(n_workdays: usize) -> f64 {
    let n_extra_days = n_workdays.saturating_sub(FATIGUE_THRESHOLD);
    FATIGUE_GROWTH.powi(i32::try_from(n_extra_days).unwrap_or(i32::MAX))
}

/// Total fatigue over the workday stretches.
#[must_use]
pub fn fatigue(blocks: &[usize]) -> f64 {
    blocks.iter().copied().map(block_fatigue).sum()
}

/// Sum of the shares of colleagues who are still at work on the plan's leave days.
pub fn disturbance(plan: &Plan, absence_rates: &AbsenceRates) -> Result<f64> {
    plan.days().map(|day| absence_rates.get(day).map(Probability::complement)).sum()
}
