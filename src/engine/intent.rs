//! Intent classification: an ordered rule table over trigger substrings.

/// The command family a user utterance expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Add,
    Remove,
    Show,
    Find,
    Suggest,
    Stop,
    Unknown,
}

/// One dispatch rule: any trigger contained in the lowercased input selects
/// the intent.
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub intent: Intent,
}

/// Ordered dispatch table, evaluated top to bottom with first match winning.
/// An input containing both "add" and "remove" therefore always resolves to
/// `Add` — the tie-break lives in this table, not in branch order.
pub const RULES: &[Rule] = &[
    Rule { triggers: &["add", "buy", "need"], intent: Intent::Add },
    Rule { triggers: &["remove", "delete"], intent: Intent::Remove },
    Rule { triggers: &["show", "list"], intent: Intent::Show },
    Rule { triggers: &["find", "search"], intent: Intent::Find },
    Rule { triggers: &["suggest"], intent: Intent::Suggest },
    Rule { triggers: &["stop", "exit"], intent: Intent::Stop },
];

/// Classify a raw command. Matching is substring containment against the
/// lowercased input.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_family_has_its_triggers() {
        assert_eq!(classify("add milk"), Intent::Add);
        assert_eq!(classify("buy bread"), Intent::Add);
        assert_eq!(classify("i need rice"), Intent::Add);
        assert_eq!(classify("delete the cheese"), Intent::Remove);
        assert_eq!(classify("show my list"), Intent::Show);
        assert_eq!(classify("search for oranges"), Intent::Find);
        assert_eq!(classify("suggest something"), Intent::Suggest);
        assert_eq!(classify("exit now"), Intent::Stop);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ADD Milk"), Intent::Add);
        assert_eq!(classify("Stop"), Intent::Stop);
    }

    #[test]
    fn first_rule_wins_when_triggers_collide() {
        // contains both "remove" and "add": row 1 outranks row 2
        assert_eq!(classify("remove that and add milk"), Intent::Add);
        // contains both "show" and "find": row 3 outranks row 4
        assert_eq!(classify("show me what you find"), Intent::Show);
    }

    #[test]
    fn unmatched_input_is_unknown() {
        assert_eq!(classify("hello there"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }
}
