use super::TraitScores;
use crate::config::ArchetypeTags;
use crate::stats;
use crate::table::{ObservationTable, TableSchema};
use serde::Serialize;
use tracing::debug;

/// Per-category values feeding the shared scoring routine.
///
/// Table scoring fills these with column means, the simulator with raw slider values.
#[derive(Debug, Clone, Default)]
pub struct CategoryValues {
    pub interaction: Vec<f64>,
    pub low_interaction: Vec<f64>,
    pub late_game: Vec<f64>,
    pub all: Vec<f64>,
    pub adaptability: Option<f64>,
}

/// Missing statistics collapse to 0 so every score stays finite.
pub fn score(values: &CategoryValues) -> TraitScores {
    TraitScores {
        resilience: stats::mean(&values.interaction).unwrap_or(0.0),
        explosiveness: stats::mean(&values.low_interaction).unwrap_or(0.0),
        versatility: stats::sample_std(&values.all).unwrap_or(0.0),
        adaptability: values.adaptability.unwrap_or(0.0),
        late_game: stats::mean(&values.late_game).unwrap_or(0.0),
    }
}

#[derive(Debug, Clone)]
pub struct TagMatcher {
    interaction: Vec<String>,
    low_interaction: Vec<String>,
    late_game: Vec<String>,
}

impl TagMatcher {
    pub fn new(tags: &ArchetypeTags) -> Self {
        let lower = |v: Vec<String>| -> Vec<String> {
            v.into_iter().map(|t| t.to_lowercase()).collect()
        };
        Self {
            interaction: lower(tags.interaction_heavy_tags()),
            low_interaction: lower(tags.low_interaction_tags()),
            late_game: lower(tags.late_game_tags()),
        }
    }

    /// Buckets named values by case-insensitive tag containment. A value may land in
    /// several buckets, and always lands in `all`.
    pub fn categorize<'a, I>(&self, entries: I, adaptability: Option<f64>) -> CategoryValues
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut out = CategoryValues {
            adaptability,
            ..Default::default()
        };
        for (name, value) in entries {
            let lower = name.to_lowercase();
            let hit = |tags: &[String]| tags.iter().any(|t| lower.contains(t.as_str()));
            if hit(&self.interaction) {
                out.interaction.push(value);
            }
            if hit(&self.low_interaction) {
                out.low_interaction.push(value);
            }
            if hit(&self.late_game) {
                out.late_game.push(value);
            }
            out.all.push(value);
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PartitionTraits {
    pub partition: String,
    pub scores: TraitScores,
}

pub fn compute_traits(
    table: &ObservationTable,
    schema: &TableSchema,
    tags: &ArchetypeTags,
    partition: &str,
) -> TraitScores {
    let rows = table.rows_in(partition);

    let column_means: Vec<(&str, f64)> = schema
        .matchups
        .iter()
        .filter_map(|m| {
            stats::mean_skip_missing(&table.column_subset(m.index, &rows))
                .map(|v| (m.header.as_str(), v))
        })
        .collect();

    let adaptability = schema
        .predicted
        .and_then(|idx| stats::std_skip_missing(&table.column_subset(idx, &rows)));

    let values = TagMatcher::new(tags).categorize(column_means, adaptability);
    let scores = score(&values);
    debug!(
        "Traits for '{}' over {} rows: {:?}",
        partition,
        rows.len(),
        scores
    );
    scores
}

pub fn compute_all(
    table: &ObservationTable,
    schema: &TableSchema,
    tags: &ArchetypeTags,
) -> Vec<PartitionTraits> {
    table
        .partition_labels()
        .into_iter()
        .map(|partition| {
            let scores = compute_traits(table, schema, tags, &partition);
            PartitionTraits { partition, scores }
        })
        .collect()
}
