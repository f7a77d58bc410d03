//! Recency-based suggestions derived from the tail of the purchase history.

use crate::store::history::PurchaseHistory;

/// How far back the recency window reaches.
const WINDOW: usize = 3;

/// Build the suggestion reply. Pure read of the history; the window keeps
/// its stored order.
pub fn suggest(history: &PurchaseHistory) -> String {
    if history.is_empty() {
        return "No shopping history available yet.".to_string();
    }
    let items = history.recent_items(WINDOW);
    format!("I suggest you might need {}.", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn history_of(items: &[&str]) -> PurchaseHistory {
        let dir = tempfile::tempdir().unwrap();
        let mut history = PurchaseHistory::load(dir.path().join("history.json"));
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        for item in items {
            history.append(item, date);
        }
        history
    }

    #[test]
    fn empty_history_has_its_own_reply() {
        assert_eq!(
            suggest(&history_of(&[])),
            "No shopping history available yet."
        );
    }

    #[test]
    fn short_history_suggests_everything() {
        assert_eq!(
            suggest(&history_of(&["milk"])),
            "I suggest you might need milk."
        );
    }

    #[test]
    fn long_history_suggests_the_last_three_in_stored_order() {
        assert_eq!(
            suggest(&history_of(&["eggs", "milk", "bread", "rice"])),
            "I suggest you might need milk, bread, rice."
        );
    }
}
