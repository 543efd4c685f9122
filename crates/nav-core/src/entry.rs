//! Stack entries
//!
//! A pushed page is wrapped in an entry carrying a key that is
//! generated once at creation and stays stable until the entry is
//! discarded. Re-pushing the same page value creates a distinct entry
//! with a distinct key, so two pushes of one destination never
//! collapse into a single rendered surface.

use serde::{Deserialize, Serialize};

use crate::page::Page;

/// One occupant of the navigation stack or of a modal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry<P: Page> {
    page: P,
    key: String,
}

impl<P: Page> StackEntry<P> {
    /// Wrap a page in a new entry with a fresh key.
    pub fn new(page: P) -> Self {
        Self {
            page,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// The page value this entry presents.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Stable identity of this entry, unique per push.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Consume the entry, returning its page value.
    pub fn into_page(self) -> P {
        self.page
    }
}
