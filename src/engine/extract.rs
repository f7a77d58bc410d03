//! Entity extraction: pull the item name and quantity out of a raw command.

use regex::Regex;

/// Grammatical role a classifier assigns to one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Noun,
    Number,
    Filler,
}

/// Noun-detection capability. Any conformant tagger — a full NLP pipeline or
/// the heuristic below — can stand in without changing the extractor contract.
pub trait TokenClassifier {
    fn classify_tokens(&self, text: &str) -> Vec<(String, TokenRole)>;
}

/// Closed-class words that never name an item: the command verbs themselves,
/// determiners, pronouns, prepositions, auxiliaries, and common filler.
const FILLER_WORDS: &[&str] = &[
    // trigger verbs
    "add", "buy", "need", "remove", "delete", "show", "list", "find", "search", "suggest",
    "stop", "exit",
    // determiners and pronouns
    "a", "an", "the", "some", "any", "more", "my", "your", "our", "his", "her", "their",
    "i", "we", "you", "me", "us", "it", "this", "that", "these", "those",
    // prepositions and conjunctions
    "to", "from", "for", "of", "in", "on", "at", "by", "with", "under", "over", "per",
    "and", "or", "but",
    // auxiliaries and filler
    "is", "are", "am", "do", "does", "did", "can", "could", "will", "would", "should",
    "want", "get", "go", "let", "please", "now", "today",
];

/// Keyword tagger: numerals are numbers, closed-class words are filler, and
/// everything left is treated as a noun. Tokens are lowercased and stripped
/// of surrounding punctuation.
pub struct HeuristicTagger;

impl TokenClassifier for HeuristicTagger {
    fn classify_tokens(&self, text: &str) -> Vec<(String, TokenRole)> {
        text.split_whitespace()
            .filter_map(|raw| {
                let token = raw
                    .trim_matches(|c: char| !c.is_ascii_alphanumeric())
                    .to_lowercase();
                if token.is_empty() {
                    return None;
                }
                let role = if token.chars().any(|c| c.is_ascii_digit()) {
                    TokenRole::Number
                } else if FILLER_WORDS.contains(&token.as_str()) {
                    TokenRole::Filler
                } else {
                    TokenRole::Noun
                };
                Some((token, role))
            })
            .collect()
    }
}

/// Stateless extractor over a pluggable tagger. Pure function of the input
/// text; nothing is retained between calls.
pub struct Extractor {
    tagger: Box<dyn TokenClassifier + Send>,
    digits: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self::with_tagger(Box::new(HeuristicTagger))
    }

    pub fn with_tagger(tagger: Box<dyn TokenClassifier + Send>) -> Self {
        Self {
            tagger,
            digits: Regex::new(r"\d+").expect("digit pattern is valid"),
        }
    }

    /// Extract `(item, quantity)` from a raw command.
    ///
    /// Quantity is the first contiguous digit run anywhere in the text,
    /// defaulting to 1 when no numeral is present. Values are taken as-is:
    /// 0 is accepted, and a run too long for u64 saturates. The item is the
    /// first token the tagger classifies as a noun, lower-cased.
    pub fn extract(&self, text: &str) -> (Option<String>, u64) {
        let qty = self
            .digits
            .find(text)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .unwrap_or(1);

        let item = self
            .tagger
            .classify_tokens(text)
            .into_iter()
            .find(|(_, role)| *role == TokenRole::Noun)
            .map(|(token, _)| token);

        (item, qty)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
