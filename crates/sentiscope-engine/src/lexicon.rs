//! Lexicon-based polarity engine (default backend)
//!
//! Scores text against a fixed table of (polarity, subjectivity) pairs with
//! negation and intensifier handling. Used when no external model is bound.

use crate::engine::{PolarityEngine, PolarityScore};
use crate::stopwords::STOPWORDS;
use sentiscope_core::Result;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Lexicon entry: polarity in [-1, 1], subjectivity in [0, 1]
#[derive(Debug, Clone, Copy)]
struct LexiconEntry {
    polarity: f64,
    subjectivity: f64,
}

/// Sentiment lexicon. One row per word: (word, polarity, subjectivity).
const LEXICON: &[(&str, f64, f64)] = &[
    // positive
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("marvelous", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 0.9),
    ("superb", 0.9, 0.95),
    ("incredible", 0.9, 0.9),
    ("beautiful", 0.85, 1.0),
    ("great", 0.8, 0.75),
    ("amazing", 0.8, 0.9),
    ("outstanding", 0.8, 0.9),
    ("fabulous", 0.8, 0.9),
    ("terrific", 0.8, 1.0),
    ("happy", 0.8, 1.0),
    ("joy", 0.8, 0.8),
    ("delightful", 0.8, 0.9),
    ("remarkable", 0.75, 0.75),
    ("successful", 0.75, 0.95),
    ("impressive", 0.75, 0.9),
    ("good", 0.7, 0.6),
    ("fantastic", 0.7, 0.9),
    ("lovely", 0.7, 0.9),
    ("pleasant", 0.7, 0.8),
    ("thrilled", 0.6, 0.9),
    ("nice", 0.6, 1.0),
    ("love", 0.5, 0.6),
    ("glad", 0.5, 1.0),
    ("satisfied", 0.5, 0.6),
    ("reliable", 0.5, 0.5),
    ("helpful", 0.5, 0.3),
    ("better", 0.5, 0.5),
    ("grateful", 0.45, 0.6),
    ("exciting", 0.45, 0.8),
    ("smooth", 0.4, 0.6),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("excited", 0.4, 0.75),
    ("friendly", 0.4, 0.6),
    ("fun", 0.3, 0.2),
    ("fresh", 0.3, 0.5),
    ("fast", 0.2, 0.4),
    ("easy", 0.4, 0.85),
    ("recommend", 0.3, 0.4),
    ("positive", 0.25, 0.55),
    ("solid", 0.2, 0.3),
    // negative
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("disgusting", -0.9, 1.0),
    ("dreadful", -0.9, 1.0),
    ("furious", -0.9, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.8, 0.9),
    ("pathetic", -0.8, 0.9),
    ("stupid", -0.8, 0.9),
    ("boring", -0.8, 1.0),
    ("disappointed", -0.75, 0.75),
    ("bad", -0.7, 0.67),
    ("ugly", -0.7, 1.0),
    ("miserable", -0.7, 0.9),
    ("painful", -0.7, 0.8),
    ("nasty", -0.6, 1.0),
    ("annoying", -0.6, 0.8),
    ("disappointing", -0.6, 0.7),
    ("dumb", -0.6, 0.8),
    ("scary", -0.6, 0.9),
    ("afraid", -0.6, 0.9),
    ("garbage", -0.6, 0.7),
    ("useless", -0.5, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("frustrating", -0.5, 0.75),
    ("frustrated", -0.5, 0.75),
    ("wrong", -0.5, 0.5),
    ("fail", -0.5, 0.5),
    ("failed", -0.5, 0.5),
    ("worse", -0.5, 0.6),
    ("trash", -0.5, 0.7),
    ("poor", -0.4, 0.6),
    ("broken", -0.4, 0.4),
    ("failure", -0.4, 0.6),
    ("cheap", -0.4, 0.7),
    ("mess", -0.4, 0.5),
    ("mediocre", -0.3, 0.6),
    ("slow", -0.3, 0.4),
    ("worried", -0.3, 0.6),
    ("weak", -0.3, 0.4),
];

/// Intensity multipliers applied to the next scored word
const BOOSTERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.4),
    ("highly", 1.4),
    ("very", 1.3),
    ("really", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
    ("barely", 0.5),
];

/// Words that flip and dampen the next scored word's polarity
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "none", "nothing", "nowhere", "don't", "doesn't",
    "didn't", "isn't", "wasn't", "aren't", "weren't", "won't", "can't", "cannot", "couldn't",
    "shouldn't", "wouldn't",
];

/// How many following tokens a negator affects
const NEGATION_WINDOW: usize = 2;

/// Polarity multiplier applied inside a negation window
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-backed [`PolarityEngine`].
///
/// Sentence polarity and subjectivity are the means of the matched word
/// assessments; a text with no lexicon hits scores (0.0, 0.0).
pub struct LexiconEngine {
    name: String,
    lexicon: HashMap<&'static str, LexiconEntry>,
    boosters: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
    stopwords: HashSet<&'static str>,
}

impl LexiconEngine {
    pub fn new() -> Self {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let lexicon = LEXICON
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (
                    word,
                    LexiconEntry {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();

        Self {
            name: name.into(),
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Split a segment into word tokens, preserving case. Apostrophes stay
    /// inside words ("don't") but are trimmed from the edges.
    fn word_tokens(segment: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in segment.chars() {
            if ch.is_alphanumeric() || ch == '\'' {
                current.push(ch);
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
            .into_iter()
            .map(|t| t.trim_matches('\'').to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn is_content_word(&self, token: &str) -> bool {
        token.chars().count() > 2
            && token.chars().next().is_some_and(|c| c.is_alphabetic())
            && !self.stopwords.contains(token.to_lowercase().as_str())
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityEngine for LexiconEngine {
    fn score(&self, text: &str) -> Result<PolarityScore> {
        let tokens = self.tokenize(text)?;

        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut booster = 1.0_f64;
        let mut negation_left = 0_usize;

        for token in &tokens {
            let word = token.to_lowercase();

            if self.negators.contains(word.as_str()) {
                negation_left = NEGATION_WINDOW;
                booster = 1.0;
                continue;
            }

            if let Some(&intensity) = self.boosters.get(word.as_str()) {
                booster *= intensity;
                continue;
            }

            if let Some(entry) = self.lexicon.get(word.as_str()) {
                let mut polarity = entry.polarity * booster;
                let subjectivity = (entry.subjectivity * booster).clamp(0.0, 1.0);
                if negation_left > 0 {
                    polarity *= NEGATION_FACTOR;
                }
                assessments.push((polarity.clamp(-1.0, 1.0), subjectivity));
            }

            booster = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }

        if assessments.is_empty() {
            return Ok(PolarityScore::NEUTRAL);
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / count;
        trace!(matches = assessments.len(), polarity, "lexicon score");
        Ok(PolarityScore::new(polarity, subjectivity))
    }

    fn score_word(&self, word: &str) -> Result<f64> {
        let normalized: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect::<String>()
            .trim_matches('\'')
            .to_lowercase();

        Ok(self
            .lexicon
            .get(normalized.as_str())
            .map(|entry| entry.polarity)
            .unwrap_or(0.0))
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(Self::word_tokens(text))
    }

    fn noun_phrases(&self, text: &str) -> Result<Vec<String>> {
        let mut phrases = Vec::new();

        // Phrases never cross sentence or clause boundaries.
        for segment in text.split(['.', '!', '?', ',', ';', ':']) {
            let tokens = Self::word_tokens(segment);
            let mut run: Vec<String> = Vec::new();

            for token in tokens {
                if self.is_content_word(&token) {
                    run.push(token.to_lowercase());
                } else if run.len() >= 2 {
                    phrases.push(run[..run.len().min(3)].join(" "));
                    run.clear();
                } else {
                    run.clear();
                }
            }
            if run.len() >= 2 {
                phrases.push(run[..run.len().min(3)].join(" "));
            }
        }

        Ok(phrases)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
