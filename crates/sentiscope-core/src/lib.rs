//! SentiScope Core
//!
//! Core types and error handling shared across SentiScope components.
//!
//! This crate provides:
//! - The [`SentimentProfile`] record and its constituent types
//! - Error types and result handling
//! - The fixed classification thresholds and rounding helper

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    round_dp, BatchRecord, EmotionProfile, EmotionScores, KeywordSet, Sentiment,
    SentimentKeywords, SentimentProfile, TopEmotion, WordSentiment, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        BatchRecord, EmotionProfile, EmotionScores, KeywordSet, Sentiment, SentimentKeywords,
        SentimentProfile, TopEmotion, WordSentiment,
    };
}
