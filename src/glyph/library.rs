use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::glyph::model::CharacterPattern;

const BUILTIN_GLYPHS_JSON: &str = include_str!("../../assets/glyphs.json");

static BUILTIN: LazyLock<GlyphLibrary> = LazyLock::new(|| {
    match GlyphLibrary::from_json(BUILTIN_GLYPHS_JSON) {
        Ok(lib) => {
            tracing::debug!(entries = lib.len(), "loaded built-in glyph library");
            lib
        }
        Err(e) => {
            // Every character then degrades to the unknown-character path.
            tracing::error!(error = %e, "built-in glyph library failed to decode");
            GlyphLibrary::default()
        }
    }
});

/// Read-only lookup table from a character to its stroke pattern.
#[derive(Clone, Debug, Default)]
pub struct GlyphLibrary {
    patterns: BTreeMap<char, CharacterPattern>,
}

impl GlyphLibrary {
    /// The process-wide built-in library (digits, math symbols, lowercase letters, `A`-`C`, space).
    ///
    /// Decoded once on first use and shared by every render.
    pub fn builtin() -> &'static GlyphLibrary {
        &BUILTIN
    }

    /// Decode a library from a JSON array of [`CharacterPattern`] values.
    pub fn from_json(json: &str) -> InkscribeResult<Self> {
        let patterns: Vec<CharacterPattern> = serde_json::from_str(json)
            .map_err(|e| InkscribeError::glyph(format!("invalid glyph json: {e}")))?;
        Self::from_patterns(patterns)
    }

    /// Build a library from patterns, rejecting duplicate characters and non-finite data.
    pub fn from_patterns(patterns: impl IntoIterator<Item = CharacterPattern>) -> InkscribeResult<Self> {
        let mut out = BTreeMap::new();
        for p in patterns {
            if !p.all_coords_finite() {
                return Err(InkscribeError::glyph(format!(
                    "pattern '{}' contains non-finite values",
                    p.ch
                )));
            }
            let ch = p.ch;
            if out.insert(ch, p).is_some() {
                return Err(InkscribeError::glyph(format!("duplicate pattern for '{ch}'")));
            }
        }
        Ok(Self { patterns: out })
    }

    /// Pattern for `ch`, or `None` when the character is unsupported.
    pub fn get(&self, ch: char) -> Option<&CharacterPattern> {
        self.patterns.get(&ch)
    }

    /// `true` when `ch` has a pattern.
    pub fn contains(&self, ch: char) -> bool {
        self.patterns.contains_key(&ch)
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` when the library holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Supported characters in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.patterns.keys().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/library.rs"]
mod tests;
