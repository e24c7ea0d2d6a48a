use super::engine::{score, TagMatcher};
use super::TraitScores;
use crate::config::ArchetypeTags;
use crate::error::{DeckForgeError, DfResult};
use crate::stats;
use crate::table::{ObservationTable, TableSchema};
use clap::Args;
use serde::Serialize;

/// Hand-entered winrates, one per reference opponent archetype.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchupInputs {
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub control: f64,
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub midrange: f64,
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub tempo: f64,
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub aggro: f64,
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub combo: f64,
    #[arg(long, default_value_t = 0.5, value_parser = parse_winrate)]
    pub ramp: f64,
}

impl Default for MatchupInputs {
    fn default() -> Self {
        Self {
            control: 0.5,
            midrange: 0.5,
            tempo: 0.5,
            aggro: 0.5,
            combo: 0.5,
            ramp: 0.5,
        }
    }
}

impl MatchupInputs {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Control", self.control),
            ("Midrange", self.midrange),
            ("Tempo", self.tempo),
            ("Aggro", self.aggro),
            ("Combo", self.combo),
            ("Ramp", self.ramp),
        ]
    }

    pub fn validate(&self) -> DfResult<()> {
        for (name, v) in self.entries() {
            if !(0.0..=1.0).contains(&v) {
                return Err(DeckForgeError::Validation(format!(
                    "{} winrate must be within [0, 1], got {}",
                    name, v
                )));
            }
        }
        Ok(())
    }
}

fn parse_winrate(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{} is outside [0, 1]", v))
    }
}

/// Spread of the predicted-winrate column over the whole table.
pub fn dataset_adaptability(table: &ObservationTable, schema: &TableSchema) -> Option<f64> {
    schema
        .predicted
        .and_then(|idx| stats::std_skip_missing(table.column(idx)))
}

/// Scores the six inputs. They are always bucketed with the built-in tag lists, since
/// their names are the reference archetypes themselves; table tag overrides do not apply.
pub fn simulate(inputs: &MatchupInputs, adaptability: Option<f64>) -> DfResult<TraitScores> {
    inputs.validate()?;
    let values =
        TagMatcher::new(&ArchetypeTags::default()).categorize(inputs.entries(), adaptability);
    Ok(score(&values))
}
