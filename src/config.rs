use crate::error::{DeckForgeError, DfResult};
use crate::sideboard::SuggestionTable;
use crate::traits::DEFAULT_WEAK_THRESHOLD;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "boros_energy_winrate_predictions.csv";
pub const DEFAULT_EXPORT_PATH: &str = "boros_sideboard.txt";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub params: TraitParams,
    #[command(flatten)]
    pub tags: ArchetypeTags,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitParams {
    /// Scores strictly below this value are flagged as weak
    #[arg(long = "threshold", default_value_t = DEFAULT_WEAK_THRESHOLD)]
    pub weak_threshold: f64,

    #[arg(long, default_value = "Winrate_vs_")]
    pub matchup_prefix: String,

    #[arg(long, default_value = "Predicted Winrate")]
    pub predicted_column: String,

    #[arg(long, default_value = "deck_version")]
    pub partition_column: String,

    #[arg(long, default_value = "Default")]
    pub default_partition: String,
}

impl Default for TraitParams {
    fn default() -> Self {
        Self {
            weak_threshold: DEFAULT_WEAK_THRESHOLD,
            matchup_prefix: "Winrate_vs_".to_string(),
            predicted_column: "Predicted Winrate".to_string(),
            partition_column: "deck_version".to_string(),
            default_partition: "Default".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeTags {
    #[arg(long, default_value = "Control,Midrange,Tempo")]
    pub interaction_heavy: String,
    #[arg(long, default_value = "Aggro,Combo,Ramp")]
    pub low_interaction: String,
    #[arg(long, default_value = "control")]
    pub late_game: String,
}

impl Default for ArchetypeTags {
    fn default() -> Self {
        Self {
            interaction_heavy: "Control,Midrange,Tempo".to_string(),
            low_interaction: "Aggro,Combo,Ramp".to_string(),
            late_game: "control".to_string(),
        }
    }
}

/// On-disk shape of `--config`. Every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub params: TraitParams,
    pub tags: ArchetypeTags,
    pub suggestions: Option<SuggestionTable>,
}

impl DashboardConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&content)?;
        Ok(cfg)
    }

    /// File entries layered over the built-in table; every trait must end up with 3 cards.
    pub fn suggestion_table(&self) -> DfResult<SuggestionTable> {
        let table = match &self.suggestions {
            Some(overrides) => SuggestionTable::with_overrides(overrides.clone()),
            None => SuggestionTable::default(),
        };
        table.validate()?;
        Ok(table)
    }
}

impl Config {
    pub fn validate(&self) -> DfResult<()> {
        if !self.params.weak_threshold.is_finite() {
            return Err(DeckForgeError::Config(format!(
                "threshold must be a finite number, got {}",
                self.params.weak_threshold
            )));
        }
        if self.params.matchup_prefix.is_empty() {
            return Err(DeckForgeError::Config(
                "matchup prefix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Takes file values as the base and re-applies anything typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(params, weak_threshold);
        update_if_present!(params, matchup_prefix);
        update_if_present!(params, predicted_column);
        update_if_present!(params, partition_column);
        update_if_present!(params, default_partition);

        update_if_present!(tags, interaction_heavy);
        update_if_present!(tags, low_interaction);
        update_if_present!(tags, late_game);
    }
}

impl ArchetypeTags {
    pub fn interaction_heavy_tags(&self) -> Vec<String> {
        parse_tag_list(&self.interaction_heavy)
    }

    pub fn low_interaction_tags(&self) -> Vec<String> {
        parse_tag_list(&self.low_interaction)
    }

    pub fn late_game_tags(&self) -> Vec<String> {
        parse_tag_list(&self.late_game)
    }
}

fn parse_tag_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_ignores_blanks() {
        assert_eq!(
            parse_tag_list(" Control, ,Tempo ,"),
            vec!["Control".to_string(), "Tempo".to_string()]
        );
    }

    #[test]
    fn test_validate_rejects_nan_threshold() {
        let mut cfg = Config::default();
        cfg.params.weak_threshold = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}
