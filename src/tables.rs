use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::scorer::Evaluation;

/// Render the plans, expecting them ordered from the best to the worst.
#[must_use]
pub fn build_ranking_table(ranking: &[Evaluation]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["#", "Leave", "Workdays", "Fatigue", "Disturbance", "Score"]);
    for (index, evaluation) in ranking.iter().enumerate() {
        let color = if index == 0 {
            Color::Green
        } else if index + 1 == ranking.len() {
            Color::Red
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(evaluation.plan).fg(color),
            Cell::new(evaluation.workday_blocks.iter().join(" + ")),
            Cell::new(format!("{:.3}", evaluation.fatigue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", evaluation.disturbance)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.6}", evaluation.score))
                .set_alignment(CellAlignment::Right)
                .fg(color),
        ]);
    }
    table
}
