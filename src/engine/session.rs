//! The command processor: one caller-owned session holding the shopping
//! list, the persisted purchase history, and the collaborators that
//! interpret commands. All state mutation flows through `process`.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, warn};

use crate::catalog::{self, MockCatalog, ProductLookup};
use crate::store::history::PurchaseHistory;
use crate::store::list::{ListEntry, ShoppingList};
use crate::suggest;

use super::extract::Extractor;
use super::intent::{classify, Intent};

/// Outcome of one command turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What the speech adapter should say back.
    pub reply: String,
    /// False only after a stop/exit command.
    pub should_continue: bool,
}

impl Turn {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            should_continue: true,
        }
    }
}

pub struct Session {
    list: ShoppingList,
    history: PurchaseHistory,
    extractor: Extractor,
    catalog: Box<dyn ProductLookup + Send>,
}

impl Session {
    /// Open a session backed by the history document at `path`. A missing or
    /// unreadable file starts the session with an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_parts(
            PurchaseHistory::load(path),
            Extractor::new(),
            Box::new(MockCatalog),
        )
    }

    /// Assemble a session from explicit collaborators. Used by tests and by
    /// callers substituting a real tagger or catalog.
    pub fn with_parts(
        history: PurchaseHistory,
        extractor: Extractor,
        catalog: Box<dyn ProductLookup + Send>,
    ) -> Self {
        Self {
            list: ShoppingList::new(),
            history,
            extractor,
            catalog,
        }
    }

    /// Dispatch one raw command and produce the turn outcome. Only add and
    /// remove mutate state; every other intent is a pure read.
    pub fn process(&mut self, raw: &str) -> Turn {
        let intent = classify(raw);
        debug!(?intent, command = raw, "dispatching");

        match intent {
            Intent::Add => self.add(raw),
            Intent::Remove => self.remove(raw),
            Intent::Show => Turn::reply(if self.list.is_empty() {
                "Your shopping list is empty."
            } else {
                // Enumeration is the display adapter's job.
                "Here is your shopping list."
            }),
            Intent::Find => Turn::reply(
                self.catalog
                    .find(&raw.to_lowercase())
                    .unwrap_or_else(|| "I could not find that item right now.".to_string()),
            ),
            Intent::Suggest => Turn::reply(suggest::suggest(&self.history)),
            Intent::Stop => Turn {
                reply: "Goodbye! Happy shopping!".to_string(),
                should_continue: false,
            },
            Intent::Unknown => Turn::reply("Sorry, I didn't understand."),
        }
    }

    fn add(&mut self, raw: &str) -> Turn {
        let (item, qty) = self.extractor.extract(raw);
        let Some(item) = item else {
            return Turn::reply("I could not detect the item.");
        };

        self.list.push(ListEntry {
            item: item.clone(),
            qty,
            category: catalog::category_of(&item).to_string(),
        });
        self.history.append(&item, Local::now().date_naive());
        if let Err(e) = self.history.save() {
            // In-memory history stays intact; the record rides along on the
            // next successful save.
            warn!("failed to persist history: {e}");
        }
        Turn::reply(format!("Added {qty} {item} to your list."))
    }

    fn remove(&mut self, raw: &str) -> Turn {
        let (item, _) = self.extractor.extract(raw);
        let Some(item) = item else {
            return Turn::reply("I could not detect the item.");
        };
        if self.list.remove_first(&item) {
            Turn::reply(format!("Removed {item} from your list."))
        } else {
            Turn::reply(format!("{item} is not in your list."))
        }
    }

    /// Snapshot for the display adapter.
    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn history(&self) -> &PurchaseHistory {
        &self.history
    }
}
