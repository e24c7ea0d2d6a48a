use super::{Trait, TraitScores};
use serde::Serialize;

/// Traits scoring below the threshold, in canonical trait order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeakTraits(Vec<Trait>);

impl WeakTraits {
    pub fn iter(&self) -> impl Iterator<Item = Trait> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, t: Trait) -> bool {
        self.0.contains(&t)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strict comparison: a score equal to the threshold is not weak.
pub fn detect_weak_traits(scores: &TraitScores, threshold: f64) -> WeakTraits {
    WeakTraits(
        scores
            .iter()
            .filter(|(_, v)| *v < threshold)
            .map(|(t, _)| t)
            .collect(),
    )
}
