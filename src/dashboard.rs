use crate::analysis::{self, MatchupAverage};
use crate::config::Config;
use crate::error::{DeckForgeError, DfResult};
use crate::sideboard::{suggest_sideboard, SuggestionTable};
use crate::table::{
    infer_schema, load_table, MatchupColumn, ObservationTable, TableSchema, TableWarning,
};
use crate::traits::{
    compute_all, compute_traits, dataset_adaptability, detect_weak_traits, simulate,
    MatchupInputs, PartitionTraits, TraitScores, WeakTraits,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Scores, weak traits and suggestions for one partition (or one simulation).
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub partition: String,
    pub threshold: f64,
    pub scores: TraitScores,
    pub weak: WeakTraits,
    pub suggestions: Vec<String>,
}

/// A loaded predictions table plus everything resolved at start-up.
pub struct Dashboard {
    pub table: ObservationTable,
    pub schema: TableSchema,
    pub config: Config,
    pub suggestions: SuggestionTable,
}

impl Dashboard {
    pub fn load<P: AsRef<Path>>(
        path: P,
        config: Config,
        suggestions: SuggestionTable,
    ) -> DfResult<Self> {
        config.validate()?;
        let table = load_table(path, &config.params)?;
        Self::from_table(table, config, suggestions)
    }

    /// Like `load`, but an unreadable file leaves an empty table instead of failing.
    pub fn load_or_empty<P: AsRef<Path>>(
        path: P,
        config: Config,
        suggestions: SuggestionTable,
    ) -> DfResult<Self> {
        config.validate()?;
        let path = path.as_ref();
        let table = match load_table(path, &config.params) {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    "⚠️  Could not read {} ({}); continuing without a dataset.",
                    path.display(),
                    e
                );
                ObservationTable::from_records(Vec::new(), Vec::new(), &config.params)
            }
        };
        Self::from_table(table, config, suggestions)
    }

    pub fn from_table(
        table: ObservationTable,
        config: Config,
        suggestions: SuggestionTable,
    ) -> DfResult<Self> {
        config.validate()?;
        let schema = infer_schema(&table, &config.params);
        info!(
            "📊 {} rows, {} matchup columns, {} partitions",
            table.n_rows(),
            schema.matchups.len(),
            table.partition_labels().len()
        );
        Ok(Self {
            table,
            schema,
            config,
            suggestions,
        })
    }

    pub fn warnings(&self) -> Vec<TableWarning> {
        self.schema.warnings(&self.config.params)
    }

    /// Logs every warning and returns them so callers can surface them too.
    pub fn report_warnings(&self) -> Vec<TableWarning> {
        let warnings = self.warnings();
        for w in &warnings {
            warn!("⚠️  {}", w);
        }
        warnings
    }

    pub fn has_matchups(&self) -> bool {
        !self.schema.matchups.is_empty()
    }

    pub fn partitions(&self) -> Vec<String> {
        self.table.partition_labels()
    }

    pub fn resolve_partition(&self, requested: Option<&str>) -> DfResult<String> {
        let labels = self.partitions();
        match requested {
            Some(p) if labels.iter().any(|l| l == p) => Ok(p.to_string()),
            Some(p) => Err(DeckForgeError::Validation(format!(
                "Unknown partition '{}'. Available: {}",
                p,
                labels.join(", ")
            ))),
            None => Ok(labels
                .into_iter()
                .next()
                .unwrap_or_else(|| self.config.params.default_partition.clone())),
        }
    }

    pub fn traits_for(&self, partition: &str) -> TraitScores {
        compute_traits(&self.table, &self.schema, &self.config.tags, partition)
    }

    pub fn all_traits(&self) -> Vec<PartitionTraits> {
        compute_all(&self.table, &self.schema, &self.config.tags)
    }

    pub fn diagnose(&self, partition: &str) -> Diagnosis {
        let scores = self.traits_for(partition);
        self.diagnosis_from(partition.to_string(), scores)
    }

    pub fn simulate(&self, inputs: &MatchupInputs) -> DfResult<Diagnosis> {
        let adaptability = dataset_adaptability(&self.table, &self.schema);
        let scores = simulate(inputs, adaptability)?;
        Ok(self.diagnosis_from("Simulated".to_string(), scores))
    }

    fn diagnosis_from(&self, partition: String, scores: TraitScores) -> Diagnosis {
        let threshold = self.config.params.weak_threshold;
        let weak = detect_weak_traits(&scores, threshold);
        let suggestions = suggest_sideboard(&weak, &self.suggestions);
        Diagnosis {
            partition,
            threshold,
            scores,
            weak,
            suggestions,
        }
    }

    pub fn matchup_averages(&self) -> Vec<MatchupAverage> {
        analysis::matchup_averages(&self.table, &self.schema)
    }

    pub fn find_matchup(&self, name: &str) -> DfResult<&MatchupColumn> {
        self.schema.find_matchup(name).ok_or_else(|| {
            let known: Vec<String> = self
                .schema
                .matchups
                .iter()
                .map(|m| m.display_name())
                .collect();
            DeckForgeError::Validation(format!(
                "Unknown opponent '{}'. Available: {}",
                name,
                known.join(", ")
            ))
        })
    }
}
