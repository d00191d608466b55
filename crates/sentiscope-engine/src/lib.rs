//! SentiScope Engine
//!
//! The polarity-scoring capability behind the analyzer.
//!
//! The [`PolarityEngine`] trait is the substitution seam: the default
//! [`LexiconEngine`] scores against a fixed lexicon table, but any backend
//! honoring the contract (polarity in [-1, 1], subjectivity in [0, 1],
//! word-level scoring, tokenization, noun phrases) can replace it without
//! touching the analyzer.

pub mod engine;
pub mod lexicon;
pub mod stopwords;

pub use engine::{PolarityEngine, PolarityScore};
pub use lexicon::LexiconEngine;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::{PolarityEngine, PolarityScore};
    pub use crate::lexicon::LexiconEngine;
}
