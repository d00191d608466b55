//! Input text preprocessing
//!
//! Four fixed passes, each feeding the next: HTML-entity decode, whitespace
//! normalization, character filtering, and anti-spam run collapsing. An empty
//! result is a valid return value; rejecting it is the caller's job.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Keep alphanumerics, whitespace, and basic punctuation; drop the rest.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.!?,;:\-']").expect("valid regex"));

/// Runs of this many identical chars or more get collapsed
const RUN_THRESHOLD: usize = 5;

/// Length a collapsed run is reduced to
const RUN_KEEP: usize = 3;

/// Clean raw input text.
pub fn preprocess(text: &str) -> String {
    let text = decode_entities(text);
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim();
    let text = DISALLOWED.replace_all(text, "");
    collapse_runs(&text)
}

/// Decode the common HTML entities (named subset plus numeric references).
/// Unrecognized entities pass through unchanged.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        // Entities are short; cap the lookahead so a stray '&' stays cheap.
        // The cap is on the ';' position, never a slice, so multibyte text
        // after '&' cannot split a char boundary.
        let end = tail.find(';').filter(|&e| e <= 12);
        match end.and_then(|e| decode_entity(&tail[1..e]).map(|d| (d, e))) {
            Some((decoded, e)) => {
                out.push(decoded);
                rest = &tail[e + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = if let Some(hex) = digits.strip_prefix('x').or(digits.strip_prefix('X')) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}

/// Collapse any run of `RUN_THRESHOLD`+ identical chars down to `RUN_KEEP`.
/// The regex crate has no backreferences, so this pass is a plain scan.
fn collapse_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            run += 1;
        }
        let keep = if run >= RUN_THRESHOLD { RUN_KEEP } else { run };
        for _ in 0..keep {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_html_entities() {
        // The char filter runs after whitespace collapsing, so dropping
        // the decoded '&' leaves the spaces on both sides of it.
        assert_eq!(preprocess("fish &amp; chips"), "fish  chips");
        assert_eq!(preprocess("5 &lt; 10"), "5  10");
        assert_eq!(preprocess("it&apos;s &#103;ood"), "it's good");
    }

    #[test]
    fn unknown_entities_pass_through() {
        // "&bogus;" survives decoding; the char filter then strips '&'
        // but keeps ';' (it is in the allowed punctuation set)
        assert_eq!(decode_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(preprocess("a &bogus; b"), "a bogus; b");
    }

    #[test]
    fn multibyte_text_after_ampersand_is_safe() {
        // 'é' is two bytes; the entity lookahead must not slice inside it
        assert_eq!(
            preprocess("&ééééééé rest of a valid review"),
            "ééééééé rest of a valid review"
        );
        assert_eq!(decode_entities("&ééééééé;"), "&ééééééé;");
        assert_eq!(preprocess("café &amp; bar"), "café  bar");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(preprocess("  hello\t\nworld  "), "hello world");
    }

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(preprocess("wow* (really) #great"), "wow really great");
        assert_eq!(preprocess("keep .!?,;:-' these"), "keep .!?,;:-' these");
    }

    #[test]
    fn collapses_spam_runs_to_three() {
        assert_eq!(preprocess("loooooove"), "looove");
        assert_eq!(preprocess("yes!!!!!"), "yes!!!");
        // runs of 4 stay untouched
        assert_eq!(preprocess("coool"), "coool");
        assert_eq!(preprocess("cooool"), "cooool");
        assert_eq!(preprocess("coooool"), "coool");
    }

    #[test]
    fn may_return_empty() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("()[]{}"), "");
        assert_eq!(preprocess("   "), "");
    }

    #[test]
    fn passes_apply_in_order() {
        // entity decode happens before the char filter sees the text
        assert_eq!(preprocess("&lt;&lt;hi&gt;&gt;"), "hi");
    }
}
