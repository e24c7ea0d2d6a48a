use crate::stats;
use crate::table::{MatchupColumn, ObservationTable, TableSchema};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

pub const HIGHLIGHT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupAverage {
    pub archetype: String,
    pub header: String,
    pub mean: f64,
}

/// Column values over row order, for line-style views.
pub fn column_series(table: &ObservationTable, column: &MatchupColumn) -> Vec<Option<f64>> {
    table.column(column.index).to_vec()
}

pub fn predicted_series(
    table: &ObservationTable,
    schema: &TableSchema,
) -> Option<Vec<Option<f64>>> {
    schema.predicted.map(|idx| table.column(idx).to_vec())
}

/// Mean winrate per matchup column, best first. Columns without any value are left out.
pub fn matchup_averages(table: &ObservationTable, schema: &TableSchema) -> Vec<MatchupAverage> {
    let mut out: Vec<MatchupAverage> = schema
        .matchups
        .iter()
        .filter_map(|m| match stats::mean_skip_missing(table.column(m.index)) {
            Some(mean) => Some(MatchupAverage {
                archetype: m.display_name(),
                header: m.header.clone(),
                mean,
            }),
            None => {
                debug!("Column '{}' has no numeric values", m.header);
                None
            }
        })
        .collect();

    // Stable sort keeps header order among ties.
    out.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    out
}

pub fn top_n(sorted: &[MatchupAverage], n: usize) -> &[MatchupAverage] {
    &sorted[..n.min(sorted.len())]
}

/// Last `n` entries of a descending list, still in descending order.
pub fn bottom_n(sorted: &[MatchupAverage], n: usize) -> &[MatchupAverage] {
    &sorted[sorted.len().saturating_sub(n)..]
}
