//! English stopword list used by the noun-phrase heuristic

/// Common English stopwords. Lowercase; matched case-insensitively.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "when", "while", "for", "nor",
    "so", "yet", "at", "by", "from", "in", "into", "of", "off", "on", "onto", "out", "over",
    "to", "up", "with", "about", "after", "before", "between", "during", "under", "above",
    "below", "again", "further", "once", "here", "there", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "only", "own", "same",
    "than", "too", "very", "can", "will", "just", "should", "now", "not", "this", "that",
    "these", "those", "was", "were", "been", "being", "have", "has", "had", "having", "does",
    "did", "doing", "would", "could", "must", "shall", "may", "might", "its", "his", "her",
    "their", "our", "your", "who", "whom", "which", "what", "are", "is", "am", "be", "do",
    "you", "she", "they", "them", "him", "it", "we", "me", "my", "i", "as",
];
