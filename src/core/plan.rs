use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::core::day::Day;

/// Number of annual leave days to place.
pub const N_LEAVE_DAYS: usize = 3;

/// Candidate leave days right before the holiday, in calendar order.
pub const PRE_HOLIDAY_CANDIDATES: [Day; N_LEAVE_DAYS] = [Day(12), Day(13), Day(14)];

/// Candidate leave days right after the holiday, in calendar order.
pub const POST_HOLIDAY_CANDIDATES: [Day; N_LEAVE_DAYS] = [Day(24), Day(25), Day(26)];

/// All the days that may be taken off.
pub fn candidate_days() -> impl Iterator<Item = Day> {
    PRE_HOLIDAY_CANDIDATES.into_iter().chain(POST_HOLIDAY_CANDIDATES)
}

/// Leave days placed back to back with the holiday.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Plan(pub [Day; N_LEAVE_DAYS]);

impl Plan {
    /// Take the last `n_pre_holiday` candidates before the holiday and fill up the rest
    /// from the first candidates after it.
    fn adjacent_to_holiday(n_pre_holiday: usize) -> Self {
        let pre_holiday = &PRE_HOLIDAY_CANDIDATES[N_LEAVE_DAYS - n_pre_holiday..];
        Self(std::array::from_fn(|i| {
            if i < n_pre_holiday {
                pre_holiday[i]
            } else {
                POST_HOLIDAY_CANDIDATES[i - n_pre_holiday]
            }
        }))
    }

    pub fn days(&self) -> impl Iterator<Item = Day> {
        self.0.into_iter()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

/// Every legal plan, from all days before the holiday to all days after it.
#[must_use]
pub fn generate_plans() -> [Plan; N_LEAVE_DAYS + 1] {
    std::array::from_fn(|i| Plan::adjacent_to_holiday(N_LEAVE_DAYS - i))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_generate_plans() {
        assert_eq!(
            generate_plans(),
            [
                Plan([Day(12), Day(13), Day(14)]),
                Plan([Day(13), Day(14), Day(24)]),
                Plan([Day(14), Day(24), Day(25)]),
                Plan([Day(24), Day(25), Day(26)]),
            ],
        );
    }

    #[test]
    fn test_plans_are_distinct_subsets_of_candidates() {
        let candidates: BTreeSet<Day> = candidate_days().collect();
        let plans = generate_plans();
        for plan in &plans {
            let days: BTreeSet<Day> = plan.days().collect();
            assert_eq!(days.len(), N_LEAVE_DAYS);
            assert!(days.is_subset(&candidates));
        }
        assert!(plans.iter().map(|plan| plan.0).all_unique());
    }

    #[test]
    fn test_display() {
        assert_eq!(Plan([Day(14), Day(24), Day(25)]).to_string(), "02-14, 02-24, 02-25");
    }
}
