//! Frequency and phrase based keyword extraction

use sentiscope_core::{KeywordSet, Result, WordSentiment};
use sentiscope_engine::PolarityEngine;
use std::collections::{HashMap, HashSet};

/// Noun phrases kept after frequency ranking
const TOP_PHRASES: usize = 5;

/// Frequent words kept after frequency ranking
const TOP_WORDS: usize = 10;

/// Sentiment words carried over from the impact-ordered list
const TOP_SENTIMENT_WORDS: usize = 10;

/// Words at or below this length are too generic to rank
const MIN_WORD_LEN: usize = 3;

/// Build the advanced keyword set from the cleaned text and the already
/// impact-sorted word sentiments.
pub fn extract_keywords(
    engine: &dyn PolarityEngine,
    cleaned_text: &str,
    word_sentiments: &[WordSentiment],
) -> Result<KeywordSet> {
    let noun_phrases = top_by_frequency(engine.noun_phrases(cleaned_text)?, TOP_PHRASES);

    let words = engine
        .tokenize(cleaned_text)?
        .into_iter()
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() > MIN_WORD_LEN);
    let frequent_words = top_by_frequency(words, TOP_WORDS);

    let sentiment_keywords: Vec<String> = word_sentiments
        .iter()
        .take(TOP_SENTIMENT_WORDS)
        .map(|ws| ws.word.clone())
        .collect();

    let total_keywords = frequent_words
        .iter()
        .chain(sentiment_keywords.iter())
        .collect::<HashSet<_>>()
        .len();

    Ok(KeywordSet {
        noun_phrases,
        frequent_words,
        sentiment_keywords,
        total_keywords,
    })
}

/// Top `k` items by count; ties keep first-seen order so output is
/// deterministic across runs.
fn top_by_frequency(items: impl IntoIterator<Item = String>, k: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiscope_engine::LexiconEngine;

    #[test]
    fn top_by_frequency_breaks_ties_first_seen() {
        let items = ["b", "a", "b", "c", "a", "d"].map(String::from);
        let top = top_by_frequency(items, 3);
        assert_eq!(top, vec!["b", "a", "c"]);
    }

    #[test]
    fn frequent_words_require_more_than_three_chars() {
        let engine = LexiconEngine::new();
        let set = extract_keywords(&engine, "the cat cat sat on wonderful wonderful mats", &[])
            .unwrap();
        assert!(set.frequent_words.contains(&"wonderful".to_string()));
        assert!(set.frequent_words.contains(&"mats".to_string()));
        assert!(!set.frequent_words.contains(&"cat".to_string()));
        assert!(!set.frequent_words.contains(&"the".to_string()));
    }

    #[test]
    fn sentiment_keywords_take_first_ten_in_given_order() {
        let entries: Vec<WordSentiment> = (0..12)
            .map(|i| WordSentiment::new(format!("word{i}"), 0.5))
            .collect();
        let engine = LexiconEngine::new();
        let set = extract_keywords(&engine, "", &entries).unwrap();
        assert_eq!(set.sentiment_keywords.len(), 10);
        assert_eq!(set.sentiment_keywords[0], "word0");
        assert_eq!(set.sentiment_keywords[9], "word9");
    }

    #[test]
    fn total_keywords_is_union_size() {
        let entries = vec![
            WordSentiment::new("wonderful", 1.0),
            WordSentiment::new("unique", 0.5),
        ];
        let engine = LexiconEngine::new();
        let set = extract_keywords(&engine, "wonderful wonderful things", &entries).unwrap();
        // frequent: {wonderful, things}; sentiment: {wonderful, unique}
        assert_eq!(set.total_keywords, 3);
    }
}
