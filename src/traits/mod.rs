pub mod engine;
pub mod simulator;
pub mod weak;

pub use self::engine::{
    compute_all, compute_traits, score, CategoryValues, PartitionTraits, TagMatcher,
};
pub use self::simulator::{dataset_adaptability, simulate, MatchupInputs};
pub use self::weak::{detect_weak_traits, WeakTraits};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_WEAK_THRESHOLD: f64 = 0.15;

/// The five deck-shape descriptors. Declaration order is the canonical report order.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Trait {
    Resilience,
    Explosiveness,
    Versatility,
    Adaptability,
    #[strum(serialize = "Late Game")]
    #[serde(rename = "Late Game")]
    LateGame,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct TraitScores {
    pub resilience: f64,
    pub explosiveness: f64,
    pub versatility: f64,
    pub adaptability: f64,
    pub late_game: f64,
}

impl TraitScores {
    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Resilience => self.resilience,
            Trait::Explosiveness => self.explosiveness,
            Trait::Versatility => self.versatility,
            Trait::Adaptability => self.adaptability,
            Trait::LateGame => self.late_game,
        }
    }

    /// (trait, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::iter().map(move |t| (t, self.get(t)))
    }
}
