//! Core types for SentiScope
//!
//! These records are the output contract of the analyzer: a
//! [`SentimentProfile`] is assembled once per analysis call and never
//! mutated afterwards. Field names match the JSON the REST layer serves.

use serde::{Deserialize, Serialize};

/// Polarity at or above this is classified Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity at or below this is classified Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Round `value` to `dp` decimal places (half away from zero).
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Discrete sentiment label derived from polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a polarity score using the fixed thresholds.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// Emoji shown next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Negative => "😠",
        }
    }

    /// Hex color used by UI consumers
    pub fn color(&self) -> &'static str {
        match self {
            Self::Positive => "#10b981",
            Self::Neutral => "#f59e0b",
            Self::Negative => "#ef4444",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentiment contribution of a single token occurrence.
///
/// Repeated words are not deduplicated: each qualifying occurrence in the
/// text produces its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSentiment {
    /// Lowercased token text
    pub word: String,

    /// Isolated polarity of the token, rounded to 3 decimals
    pub polarity: f64,

    /// Sign-based classification of the isolated polarity
    pub sentiment: Sentiment,

    /// Absolute polarity, used for ranking influence
    pub impact: f64,
}

impl WordSentiment {
    /// Build an entry from a token and its isolated polarity.
    ///
    /// Polarity is rounded to 3 decimals before the impact is taken, so
    /// ordering stays deterministic across runs.
    pub fn new(word: impl Into<String>, polarity: f64) -> Self {
        let polarity = round_dp(polarity, 3);
        let sentiment = if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        Self {
            word: word.into(),
            polarity,
            sentiment,
            impact: polarity.abs(),
        }
    }
}

/// Top positive/negative words plus full partition counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentKeywords {
    /// Up to 5 highest-impact positive words
    pub positive: Vec<WordSentiment>,

    /// Up to 5 highest-impact negative words
    pub negative: Vec<WordSentiment>,

    /// Count of all positive entries, not capped at 5
    pub total_positive: usize,

    /// Count of all negative entries, not capped at 5
    pub total_negative: usize,
}

/// Normalized scores for the 8 fixed emotion categories.
///
/// Field order is the canonical iteration order used for argmax and
/// top-k tie-breaking; it must not be rearranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub disgust: f64,
    pub trust: f64,
    pub anticipation: f64,
}

impl EmotionScores {
    /// Emotion names in canonical order
    pub const NAMES: [&'static str; 8] = [
        "joy",
        "sadness",
        "anger",
        "fear",
        "surprise",
        "disgust",
        "trust",
        "anticipation",
    ];

    /// Build from an array in canonical order
    pub fn from_array(scores: [f64; 8]) -> Self {
        Self {
            joy: scores[0],
            sadness: scores[1],
            anger: scores[2],
            fear: scores[3],
            surprise: scores[4],
            disgust: scores[5],
            trust: scores[6],
            anticipation: scores[7],
        }
    }

    /// Scores as an array in canonical order
    pub fn to_array(self) -> [f64; 8] {
        [
            self.joy,
            self.sadness,
            self.anger,
            self.fear,
            self.surprise,
            self.disgust,
            self.trust,
            self.anticipation,
        ]
    }

    /// Iterate (name, score) pairs in canonical order
    pub fn iter(self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::NAMES.into_iter().zip(self.to_array())
    }
}

/// One entry in the top-emotions list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEmotion {
    /// Capitalized emotion name
    pub emotion: String,

    /// Normalized score (0-100)
    pub score: f64,
}

/// Emotion classification for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// All 8 normalized scores, always present even when all are zero
    pub emotion_scores: EmotionScores,

    /// Capitalized name of the max-scoring emotion
    pub primary_emotion: String,

    /// Score of the primary emotion
    pub confidence: f64,

    /// Up to 3 nonzero emotions, descending by score
    pub top_emotions: Vec<TopEmotion>,

    /// True iff confidence exceeds 20
    pub emotion_detected: bool,
}

/// Keyword extraction results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    /// Top 5 noun phrases by frequency
    pub noun_phrases: Vec<String>,

    /// Top 10 words longer than 3 characters by frequency
    pub frequent_words: Vec<String>,

    /// First 10 words from the impact-ordered word sentiments
    pub sentiment_keywords: Vec<String>,

    /// Size of the union of frequent and sentiment keywords
    pub total_keywords: usize,
}

/// Complete analysis result for one text.
///
/// Created fresh per `analyze` call; immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentProfile {
    /// Sentiment label (Positive/Neutral/Negative)
    pub label: Sentiment,

    /// Confidence score, 0-100, rounded to 2 decimals
    pub confidence: f64,

    /// Polarity score, -1..1, rounded to 3 decimals
    pub polarity: f64,

    /// Subjectivity score, 0..1, rounded to 3 decimals
    pub subjectivity: f64,

    /// Emoji for the label
    pub emoji: String,

    /// Hex color for the label
    pub color: String,

    /// Character count of the original input (not the cleaned text)
    pub text_length: usize,

    /// Whitespace word count of the original input
    pub word_count: usize,

    /// Per-token sentiment entries, sorted by descending impact
    pub word_sentiments: Vec<WordSentiment>,

    /// Top positive/negative word summary
    pub sentiment_keywords: SentimentKeywords,

    /// Emotion classification
    pub emotions: EmotionProfile,

    /// Frequency and phrase based keywords
    pub advanced_keywords: KeywordSet,
}

/// Per-item outcome of a batch analysis.
///
/// Invalid inputs become `Failed` records; engine failures never reach
/// this type because they abort the whole batch.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchRecord {
    /// Successful analysis
    Analyzed {
        original_text: String,
        #[serde(flatten)]
        profile: SentimentProfile,
    },

    /// Input rejected by validation
    Failed { original_text: String, error: String },
}

impl BatchRecord {
    /// The input text this record was produced from
    pub fn original_text(&self) -> &str {
        match self {
            Self::Analyzed { original_text, .. } | Self::Failed { original_text, .. } => {
                original_text
            }
        }
    }

    /// The profile, if analysis succeeded
    pub fn profile(&self) -> Option<&SentimentProfile> {
        match self {
            Self::Analyzed { profile, .. } => Some(profile),
            Self::Failed { .. } => None,
        }
    }

    /// The validation message, if analysis failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Analyzed { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// True when this record carries an error instead of a profile
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
