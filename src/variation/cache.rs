use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::variation::generator::HandwritingVariation;

/// Identity of one rendered character instance.
///
/// `run` names the text run the character belongs to (a solution step, an explanation line, a
/// label), so "A at index 0" in two different runs gets two independent variations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceKey {
    /// Text run identifier.
    pub run: u32,
    /// The character.
    pub ch: char,
    /// Position of the character inside its run.
    pub index: usize,
}

impl OccurrenceKey {
    /// Key for `ch` at `index` inside `run`.
    pub fn new(run: u32, ch: char, index: usize) -> Self {
        Self { run, ch, index }
    }
}

/// Session-owned store of per-occurrence variations.
///
/// Entries are created on first request and never rewritten, so repeated redraws of the same
/// occurrence stay visually stable. Each playback session owns its own cache.
#[derive(Clone, Debug)]
pub struct VariationCache {
    seed: Option<u64>,
    rng: StdRng,
    entries: HashMap<OccurrenceKey, HandwritingVariation>,
}

impl VariationCache {
    /// Cache drawing from OS entropy.
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
            entries: HashMap::new(),
        }
    }

    /// Cache with a deterministic random stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
            entries: HashMap::new(),
        }
    }

    /// Variation for `key`, generating and storing one on first request.
    pub fn get_or_generate(&mut self, key: OccurrenceKey) -> HandwritingVariation {
        if let Some(v) = self.entries.get(&key) {
            return *v;
        }
        let v = HandwritingVariation::generate_with(&mut self.rng);
        tracing::trace!(run = key.run, ch = %key.ch, index = key.index, "new occurrence variation");
        self.entries.insert(key, v);
        v
    }

    /// Previously generated variation for `key`, if any.
    pub fn get(&self, key: OccurrenceKey) -> Option<HandwritingVariation> {
        self.entries.get(&key).copied()
    }

    /// Number of cached occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached variation.
    ///
    /// A seeded cache restarts its random stream, so a reset session replays identically.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}

impl Default for VariationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variation/cache.rs"]
mod tests;
