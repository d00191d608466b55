//! Emotion classification over 8 fixed keyword buckets
//!
//! Keyword hits are substring matches, not word-boundary matches ("madness"
//! counts for "mad"). This is intentional observable behavior; widening it
//! to word boundaries changes every downstream score.

use aho_corasick::AhoCorasick;
use sentiscope_core::{round_dp, EmotionProfile, EmotionScores, Error, Result, TopEmotion};

const JOY: &[&str] = &[
    "happy", "joy", "excited", "delighted", "cheerful", "glad", "pleased", "love", "wonderful",
    "amazing", "fantastic", "awesome", "thrilled", "elated", "smile", "laugh", "celebrate",
];

const SADNESS: &[&str] = &[
    "sad", "unhappy", "depressed", "miserable", "heartbroken", "disappointed", "sorrow", "grief",
    "crying", "tears", "lonely", "gloomy", "mourn",
];

const ANGER: &[&str] = &[
    "angry", "mad", "furious", "rage", "annoyed", "irritated", "outraged", "hate", "frustrated",
    "hostile", "resent",
];

const FEAR: &[&str] = &[
    "afraid", "scared", "terrified", "anxious", "worried", "nervous", "panic", "frightened",
    "dread", "horror", "alarmed",
];

const SURPRISE: &[&str] = &[
    "surprised", "amazed", "astonished", "shocked", "stunned", "unexpected", "sudden", "wow",
    "startled",
];

const DISGUST: &[&str] = &[
    "disgusted", "gross", "revolting", "nasty", "repulsive", "sickening", "vile", "awful",
    "horrible",
];

const TRUST: &[&str] = &[
    "trust", "reliable", "dependable", "honest", "faithful", "loyal", "confident", "secure",
    "safe", "believe",
];

const ANTICIPATION: &[&str] = &[
    "eager", "hopeful", "expect", "anticipate", "looking forward", "optimistic", "await",
    "excited",
];

/// Buckets in canonical order; indices match [`EmotionScores::NAMES`].
const BUCKETS: [&[&str]; 8] = [
    JOY,
    SADNESS,
    ANGER,
    FEAR,
    SURPRISE,
    DISGUST,
    TRUST,
    ANTICIPATION,
];

// Indices into the canonical emotion order
const IDX_JOY: usize = 0;
const IDX_SADNESS: usize = 1;
const IDX_ANGER: usize = 2;
const IDX_SURPRISE: usize = 4;
const IDX_DISGUST: usize = 5;
const IDX_TRUST: usize = 6;
const IDX_ANTICIPATION: usize = 7;

/// A normalized score above this marks the emotion as detected
const DETECTION_THRESHOLD: f64 = 20.0;

/// Keyword-bucket emotion detector.
///
/// Stateless after construction; safe to share across threads.
pub struct EmotionDetector {
    matchers: Vec<AhoCorasick>,
}

impl EmotionDetector {
    pub fn new() -> Result<Self> {
        let matchers = BUCKETS
            .iter()
            .map(|keywords| {
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(*keywords)
                    .map_err(|e| Error::config(format!("failed to build emotion matcher: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchers })
    }

    /// Classify emotions in `text` (the original, unpreprocessed input),
    /// adjusted by the overall polarity and subjectivity.
    pub fn detect(&self, text: &str, polarity: f64, subjectivity: f64) -> EmotionProfile {
        let lowered = text.to_lowercase();
        let mut raw = [0.0_f64; 8];

        // Each keyword counts once per bucket no matter how often it occurs.
        // Overlapping search keeps "happy" visible inside "unhappy".
        for (i, matcher) in self.matchers.iter().enumerate() {
            let mut seen = std::collections::HashSet::new();
            for m in matcher.find_overlapping_iter(&lowered) {
                seen.insert(m.pattern());
            }
            raw[i] = seen.len() as f64;
        }

        if polarity > 0.5 {
            raw[IDX_JOY] += polarity * 3.0;
            raw[IDX_TRUST] += polarity * 2.0;
        }
        if polarity < -0.5 {
            raw[IDX_SADNESS] += polarity.abs() * 2.0;
            raw[IDX_ANGER] += polarity.abs() * 2.0;
            raw[IDX_DISGUST] += polarity.abs() * 1.5;
        }
        if subjectivity > 0.7 {
            raw[IDX_SURPRISE] += subjectivity * 1.5;
            raw[IDX_ANTICIPATION] += subjectivity * 1.5;
        }

        // All-zero input stays all-zero: the divisor defaults to 1.
        let max = raw.iter().copied().fold(0.0_f64, f64::max);
        let denom = if max > 0.0 { max } else { 1.0 };
        let normalized = raw.map(|v| round_dp(v / denom * 100.0, 1));

        let mut primary = 0;
        for i in 1..normalized.len() {
            if normalized[i] > normalized[primary] {
                primary = i;
            }
        }
        let confidence = normalized[primary];

        // Stable sort keeps canonical order on ties.
        let mut order: Vec<usize> = (0..normalized.len()).collect();
        order.sort_by(|&a, &b| normalized[b].total_cmp(&normalized[a]));
        let top_emotions = order
            .into_iter()
            .filter(|&i| normalized[i] > 0.0)
            .take(3)
            .map(|i| TopEmotion {
                emotion: capitalize(EmotionScores::NAMES[i]),
                score: normalized[i],
            })
            .collect();

        EmotionProfile {
            emotion_scores: EmotionScores::from_array(normalized),
            primary_emotion: capitalize(EmotionScores::NAMES[primary]),
            confidence,
            top_emotions,
            emotion_detected: confidence > DETECTION_THRESHOLD,
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
