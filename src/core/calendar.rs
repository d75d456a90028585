use std::{collections::BTreeSet, ops::RangeInclusive};

use itertools::Itertools;

use crate::core::{day::Day, plan::Plan};

/// Mandatory workdays before the holiday, the last one being a working Saturday.
pub const PRE_HOLIDAY_WORKDAYS: RangeInclusive<u8> = 9..=14;

/// Mandatory workdays after the holiday.
pub const POST_HOLIDAY_WORKDAYS: RangeInclusive<u8> = 24..=28;

/// Lengths of the uninterrupted workday stretches left after taking the plan's days off,
/// in calendar order.
#[must_use]
pub fn workday_blocks(plan: &Plan) -> Vec<usize> {
    let leave_days: BTreeSet<Day> = plan.days().collect();
    PRE_HOLIDAY_WORKDAYS
        .chain(POST_HOLIDAY_WORKDAYS)
        .map(Day)
        .filter(|day| !leave_days.contains(day))
        .sorted()
        .map(|day| (day, day))
        .coalesce(|(start, end), (next_start, next_end)| {
            if end.0 + 1 == next_start.0 {
                Ok((start, next_end))
            } else {
                Err(((start, end), (next_start, next_end)))
            }
        })
        .map(|(start, end)| usize::from(end.0 - start.0) + 1)
        .collect()
}
