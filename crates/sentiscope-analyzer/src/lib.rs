//! SentiScope Analyzer
//!
//! The text-to-sentiment-profile pipeline:
//! preprocessing → sentence scoring → {classification, confidence,
//! word attribution → keyword extraction, emotion detection} → one
//! immutable [`SentimentProfile`](sentiscope_core::SentimentProfile).
//!
//! Everything here is synchronous and stateless across calls; wrap a
//! [`SentimentAnalyzer`] in an `Arc` to share it between threads.

pub mod analyzer;
pub mod emotions;
pub mod keywords;
pub mod preprocess;

pub use analyzer::{confidence, SentimentAnalyzer, MAX_TEXT_CHARS, MAX_TEXT_WORDS};
pub use emotions::EmotionDetector;
pub use keywords::extract_keywords;
pub use preprocess::preprocess;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::{confidence, SentimentAnalyzer};
    pub use crate::preprocess::preprocess;
    pub use sentiscope_core::prelude::*;
    pub use sentiscope_engine::prelude::*;
}
