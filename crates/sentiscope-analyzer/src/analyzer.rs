//! Analysis orchestrator
//!
//! Runs the full text-to-profile pipeline: validation, preprocessing,
//! sentence scoring, word attribution, emotion detection, and keyword
//! extraction. Pure function of its input; no I/O, no retries, no
//! graceful degradation — a failure in any step aborts the whole call.

use crate::emotions::EmotionDetector;
use crate::keywords::extract_keywords;
use crate::preprocess::preprocess;
use sentiscope_core::{
    round_dp, BatchRecord, Error, Result, Sentiment, SentimentKeywords, SentimentProfile,
    WordSentiment,
};
use sentiscope_engine::{LexiconEngine, PolarityEngine};
use std::sync::Arc;
use tracing::debug;

/// Maximum accepted input length in characters
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Maximum accepted input length in whitespace-delimited words
pub const MAX_TEXT_WORDS: usize = 2_000;

/// Tokens at or below this length never enter word attribution
const MIN_ATTRIBUTED_LEN: usize = 2;

/// Entries kept per side in the sentiment keyword summary
const TOP_KEYWORDS_PER_SIDE: usize = 5;

/// Confidence score derived from polarity magnitude and subjectivity.
///
/// Subjective text is treated as carrying a more reliable sentiment
/// signal, so the polarity contribution is scaled by a factor in
/// [0.3, 1.0] before clamping to the 0-100 range.
pub fn confidence(polarity: f64, subjectivity: f64) -> f64 {
    let base = polarity.abs() * 100.0;
    let factor = 0.3 + subjectivity * 0.7;
    round_dp((base * factor).clamp(0.0, 100.0), 2)
}

/// Sentiment analyzer over a pluggable polarity engine.
///
/// Holds no mutable state across calls; a single instance can be shared
/// behind an `Arc` by concurrent callers without locking.
pub struct SentimentAnalyzer {
    engine: Arc<dyn PolarityEngine>,
    emotions: EmotionDetector,
}

impl SentimentAnalyzer {
    /// Create an analyzer over the given engine.
    pub fn new(engine: Arc<dyn PolarityEngine>) -> Result<Self> {
        Ok(Self {
            engine,
            emotions: EmotionDetector::new()?,
        })
    }

    /// Create an analyzer over the built-in lexicon engine.
    pub fn with_default_engine() -> Result<Self> {
        Self::new(Arc::new(LexiconEngine::new()))
    }

    /// The engine this analyzer scores with.
    pub fn engine(&self) -> &dyn PolarityEngine {
        self.engine.as_ref()
    }

    /// Analyze one text into a [`SentimentProfile`].
    ///
    /// Fails with [`Error::InvalidInput`] when the text is empty, exceeds
    /// the length or word caps, or preprocesses to nothing. Engine
    /// failures propagate unchanged.
    pub fn analyze(&self, text: &str) -> Result<SentimentProfile> {
        Self::validate(text)?;

        let cleaned = preprocess(text);
        if cleaned.is_empty() {
            return Err(Error::invalid_input(
                "Text contains no valid content after preprocessing",
            ));
        }

        let score = self.engine.score(&cleaned)?;
        let label = Sentiment::from_polarity(score.polarity);
        debug!(
            engine = self.engine.name(),
            polarity = score.polarity,
            label = label.label(),
            "scored text"
        );

        let word_sentiments = self.word_sentiments(&cleaned)?;
        let sentiment_keywords = Self::keyword_summary(&word_sentiments);
        // Emotions read the original text, not the cleaned one.
        let emotions = self
            .emotions
            .detect(text, score.polarity, score.subjectivity);
        let advanced_keywords = extract_keywords(self.engine.as_ref(), &cleaned, &word_sentiments)?;

        Ok(SentimentProfile {
            label,
            confidence: confidence(score.polarity, score.subjectivity),
            polarity: round_dp(score.polarity, 3),
            subjectivity: round_dp(score.subjectivity, 3),
            emoji: label.emoji().to_string(),
            color: label.color().to_string(),
            text_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            word_sentiments,
            sentiment_keywords,
            emotions,
            advanced_keywords,
        })
    }

    /// Analyze a sequence of texts, one record per item.
    ///
    /// Invalid inputs become per-item error records; the batch continues.
    /// Engine failures are not swallowed — they abort the whole batch.
    pub fn batch_analyze<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<BatchRecord>> {
        let mut records = Vec::with_capacity(texts.len());
        for text in texts {
            let text = text.as_ref();
            match self.analyze(text) {
                Ok(profile) => records.push(BatchRecord::Analyzed {
                    original_text: text.to_string(),
                    profile,
                }),
                Err(Error::InvalidInput(error)) => records.push(BatchRecord::Failed {
                    original_text: text.to_string(),
                    error,
                }),
                Err(other) => return Err(other),
            }
        }
        Ok(records)
    }

    /// Input validation, in fixed order: the first failing check picks
    /// the error message.
    fn validate(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input("Text input cannot be empty"));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(Error::invalid_input(
                "Text is too long. Maximum 10,000 characters allowed.",
            ));
        }
        if text.split_whitespace().count() > MAX_TEXT_WORDS {
            return Err(Error::invalid_input(
                "Text contains too many words. Maximum 2,000 words allowed.",
            ));
        }
        Ok(())
    }

    /// Score each token in isolation and rank the survivors by impact.
    ///
    /// Scoring one engine call per token is deliberate: a word's isolated
    /// polarity can differ from its contribution to the sentence score,
    /// so the sentence-level result cannot be decomposed instead.
    fn word_sentiments(&self, cleaned_text: &str) -> Result<Vec<WordSentiment>> {
        let tokens = self.engine.tokenize(cleaned_text)?;

        let mut entries = Vec::new();
        for token in tokens {
            if token.chars().count() <= MIN_ATTRIBUTED_LEN {
                continue;
            }
            let polarity = self.engine.score_word(&token)?;
            if polarity == 0.0 {
                continue;
            }
            entries.push(WordSentiment::new(token.to_lowercase(), polarity));
        }

        // Stable sort: ties keep original token order.
        entries.sort_by(|a, b| b.impact.total_cmp(&a.impact));
        Ok(entries)
    }

    /// Partition the impact-sorted entries and keep the strongest of each
    /// side; totals report the full partition sizes, not the caps.
    fn keyword_summary(entries: &[WordSentiment]) -> SentimentKeywords {
        let positive: Vec<WordSentiment> = entries
            .iter()
            .filter(|w| w.sentiment == Sentiment::Positive)
            .cloned()
            .collect();
        let negative: Vec<WordSentiment> = entries
            .iter()
            .filter(|w| w.sentiment == Sentiment::Negative)
            .cloned()
            .collect();

        SentimentKeywords {
            total_positive: positive.len(),
            total_negative: negative.len(),
            positive: positive.into_iter().take(TOP_KEYWORDS_PER_SIDE).collect(),
            negative: negative.into_iter().take(TOP_KEYWORDS_PER_SIDE).collect(),
        }
    }
}
