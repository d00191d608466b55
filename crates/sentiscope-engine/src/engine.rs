//! Polarity engine trait and common types

use sentiscope_core::Result;
use serde::{Deserialize, Serialize};

/// Sentence-level score returned by a polarity engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScore {
    /// Signed sentiment strength, -1 (most negative) to +1 (most positive)
    pub polarity: f64,

    /// 0 (objective/factual) to 1 (subjective/opinionated)
    pub subjectivity: f64,
}

impl PolarityScore {
    /// A fully neutral, fully objective score
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Create a score, clamping both components to their legal ranges
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Capability contract for sentiment scoring backends.
///
/// Any lexicon table, bound native library, or remote scoring call can sit
/// behind this trait; the analyzer never depends on a concrete engine.
/// All methods are synchronous: scoring is pure CPU work with no suspension
/// points, and implementations must hold no mutable state across calls.
pub trait PolarityEngine: Send + Sync {
    /// Score a full text, returning polarity in [-1, 1] and subjectivity
    /// in [0, 1]
    fn score(&self, text: &str) -> Result<PolarityScore>;

    /// Score a single token in isolation, returning its polarity.
    ///
    /// A word's isolated polarity can differ from its contribution to the
    /// sentence-level score, so callers must not derive one from the other.
    fn score_word(&self, word: &str) -> Result<f64>;

    /// Split text into word tokens
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Extract noun-phrase candidates from text
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>>;

    /// Get the engine name
    fn name(&self) -> &str;
}
