use crate::error::{DeckForgeError, DfResult};
use crate::traits::{Trait, WeakTraits};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

pub const CARDS_PER_TRAIT: usize = 3;

/// Trait -> ordered card list. Built once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionTable(BTreeMap<Trait, Vec<String>>);

impl Default for SuggestionTable {
    fn default() -> Self {
        let entries: [(Trait, [&str; 3]); 5] = [
            (
                Trait::Resilience,
                [
                    "Veil of Summer",
                    "Loran of the Third Path",
                    "Reckoner Bankbuster",
                ],
            ),
            (
                Trait::Explosiveness,
                [
                    "Reinforced Ronin",
                    "Experimental Synthesizer",
                    "Monastery Swiftspear",
                ],
            ),
            (
                Trait::Versatility,
                [
                    "Fable of the Mirror-Breaker",
                    "Wedding Announcement",
                    "Restless Bivouac",
                ],
            ),
            (
                Trait::Adaptability,
                [
                    "Chandra, Hope's Beacon",
                    "The Wandering Emperor",
                    "Sunfall",
                ],
            ),
            (
                Trait::LateGame,
                ["Portal to Phyrexia", "Sanctuary Warden", "Farewell"],
            ),
        ];
        Self(
            entries
                .into_iter()
                .map(|(t, cards)| (t, cards.iter().map(|c| c.to_string()).collect()))
                .collect(),
        )
    }
}

impl SuggestionTable {
    pub fn cards_for(&self, t: Trait) -> &[String] {
        self.0.get(&t).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Built-in table with `overrides` replacing whole entries, trait by trait.
    pub fn with_overrides(overrides: SuggestionTable) -> Self {
        let mut table = Self::default();
        table.0.extend(overrides.0);
        table
    }

    pub fn validate(&self) -> DfResult<()> {
        for t in Trait::iter() {
            let n = self.cards_for(t).len();
            if n != CARDS_PER_TRAIT {
                return Err(DeckForgeError::Config(format!(
                    "'{}' needs exactly {} suggested cards, got {}",
                    t, CARDS_PER_TRAIT, n
                )));
            }
        }
        Ok(())
    }
}

/// Concatenates each weak trait's cards in canonical trait order. Duplicates are kept.
pub fn suggest_sideboard(weak: &WeakTraits, table: &SuggestionTable) -> Vec<String> {
    weak.iter()
        .flat_map(|t| table.cards_for(t).iter().cloned())
        .collect()
}

pub fn dedup_preserving_order(cards: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(cards.len());
    for c in cards {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

pub fn render_export(cards: &[String]) -> String {
    cards.join("\n")
}

pub fn export_list<P: AsRef<Path>>(cards: &[String], path: P) -> DfResult<()> {
    let path = path.as_ref();
    fs::write(path, render_export(cards))?;
    info!("💾 Wrote {} suggestions to {}", cards.len(), path.display());
    Ok(())
}
