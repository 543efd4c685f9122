//! The navigation coordinator
//!
//! `Navigator` is the single source of truth for "where am I" within
//! one navigation flow. It owns three independent containers:
//!
//! - a linear stack of pushed pages (last entry is topmost/visible),
//! - a sheet slot holding at most one dismissible modal,
//! - a full-screen cover slot holding at most one blocking modal.
//!
//! Setting one container never implicitly clears another: a flow may
//! hold a deep stack and an open sheet at the same time. Presenting
//! into an occupied modal slot replaces the occupant; modals do not
//! queue.
//!
//! All mutations are synchronous in-memory assignments applied in call
//! order. The coordinator is a plain value with `&mut self` methods;
//! shared single-threaded access is provided by the host crate.

use serde::{Deserialize, Serialize};

use crate::entry::StackEntry;
use crate::error::{NavError, Result};
use crate::page::Page;

// =============================================================================
// Presentation / Dismissal
// =============================================================================

/// How a pushed page should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Append to the linear stack (back-stack semantics)
    #[default]
    Stacked,
    /// Present as the dismissible modal overlay
    Sheet,
    /// Present as the blocking modal overlay
    FullScreenCover,
}

/// What a pop operation should dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dismissal {
    /// Remove the last `count` entries from the stack
    Stacked {
        /// Number of entries to remove
        count: usize,
    },
    /// Clear the sheet slot
    Sheet,
    /// Clear the full-screen cover slot
    FullScreenCover,
}

impl Default for Dismissal {
    fn default() -> Self {
        Dismissal::Stacked { count: 1 }
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigation coordinator for one flow.
///
/// Created empty; the root page of a flow is not part of the stack (an
/// empty stack means the root is visible). One coordinator is created
/// per mounted host and lives for the lifetime of that host; flows
/// with different page types never share a coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator<P: Page> {
    stack: Vec<StackEntry<P>>,
    sheet: Option<StackEntry<P>>,
    full_screen_cover: Option<StackEntry<P>>,
}

impl<P: Page> Default for Navigator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Navigator<P> {
    /// Create a coordinator with an empty stack and empty modal slots.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            sheet: None,
            full_screen_cover: None,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Present a page.
    ///
    /// `Stacked` appends a fresh entry to the stack. `Sheet` and
    /// `FullScreenCover` assign their slot, replacing (and thereby
    /// dismissing) any current occupant. Any page value is valid
    /// input; there is no failure path.
    pub fn push(&mut self, page: P, presentation: Presentation) {
        match presentation {
            Presentation::Stacked => {
                let entry = StackEntry::new(page);
                tracing::debug!(key = entry.key(), depth = self.stack.len() + 1, "push");
                self.stack.push(entry);
            }
            Presentation::Sheet => {
                let entry = StackEntry::new(page);
                if self.sheet.is_some() {
                    tracing::debug!(key = entry.key(), "sheet replaced");
                }
                self.sheet = Some(entry);
            }
            Presentation::FullScreenCover => {
                let entry = StackEntry::new(page);
                if self.full_screen_cover.is_some() {
                    tracing::debug!(key = entry.key(), "full-screen cover replaced");
                }
                self.full_screen_cover = Some(entry);
            }
        }
    }

    /// Dismiss pages.
    ///
    /// `Stacked { count }` removes the last `count` entries. Asking
    /// for more entries than exist is a caller logic bug; the excess
    /// is clamped to the available depth and a warning is logged
    /// rather than crashing. `Sheet` and `FullScreenCover` clear
    /// their slot and are no-ops when the slot is already empty.
    pub fn pop(&mut self, dismissal: Dismissal) {
        match dismissal {
            Dismissal::Stacked { count } => {
                let available = self.stack.len();
                if count > available {
                    tracing::warn!(
                        requested = count,
                        available,
                        "stack underflow, clamping pop to available depth"
                    );
                }
                self.stack.truncate(available.saturating_sub(count));
            }
            Dismissal::Sheet => self.sheet = None,
            Dismissal::FullScreenCover => self.full_screen_cover = None,
        }
    }

    /// Strict variant of [`pop`](Self::pop).
    ///
    /// Returns [`NavError::StackUnderflow`] instead of clamping when a
    /// stacked dismissal asks for more entries than exist; the stack
    /// is left untouched in that case.
    pub fn try_pop(&mut self, dismissal: Dismissal) -> Result<()> {
        if let Dismissal::Stacked { count } = dismissal {
            let available = self.stack.len();
            if count > available {
                return Err(NavError::StackUnderflow {
                    requested: count,
                    available,
                });
            }
        }
        self.pop(dismissal);
        Ok(())
    }

    /// Remove all stacked entries, returning to the root page.
    ///
    /// Modal slots are left untouched.
    pub fn pop_to_root(&mut self) {
        tracing::debug!(depth = self.stack.len(), "pop to root");
        self.stack.clear();
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// All stacked entries, bottom to top (last = topmost/visible).
    pub fn stack(&self) -> &[StackEntry<P>] {
        &self.stack
    }

    /// Number of stacked entries (0 means the root page is visible).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The topmost stacked entry, if any.
    pub fn current(&self) -> Option<&StackEntry<P>> {
        self.stack.last()
    }

    /// Whether the stack is empty and the root page is visible.
    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether a stacked dismissal would remove anything.
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The current sheet occupant, if presented.
    pub fn sheet(&self) -> Option<&StackEntry<P>> {
        self.sheet.as_ref()
    }

    /// The current full-screen cover occupant, if presented.
    pub fn full_screen_cover(&self) -> Option<&StackEntry<P>> {
        self.full_screen_cover.as_ref()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    enum Pages {
        Login,
        SignUp,
        Profile { name: String },
    }

    fn pages(nav: &Navigator<Pages>) -> Vec<&Pages> {
        nav.stack().iter().map(|e| e.page()).collect()
    }

    #[test]
    fn test_new_navigator_is_empty() {
        let nav: Navigator<Pages> = Navigator::new();
        assert!(nav.is_at_root());
        assert!(!nav.can_go_back());
        assert_eq!(nav.depth(), 0);
        assert!(nav.current().is_none());
        assert!(nav.sheet().is_none());
        assert!(nav.full_screen_cover().is_none());
    }

    #[test]
    fn test_push_then_pop_restores_stack() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        let before = nav.clone();

        nav.push(Pages::SignUp, Presentation::Stacked);
        nav.pop(Dismissal::Stacked { count: 1 });

        assert_eq!(nav, before);
    }

    #[test]
    fn test_push_order_is_preserved() {
        let mut nav = Navigator::new();
        let p3 = Pages::Profile {
            name: "carol".to_string(),
        };
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);
        nav.push(p3.clone(), Presentation::Stacked);

        assert_eq!(pages(&nav), vec![&Pages::Login, &Pages::SignUp, &p3]);
        assert_eq!(nav.current().unwrap().page(), &p3);
    }

    #[test]
    fn test_modal_slots_are_independent_of_stack() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Sheet);
        nav.push(Pages::SignUp, Presentation::FullScreenCover);

        assert!(nav.is_at_root());
        assert_eq!(nav.sheet().unwrap().page(), &Pages::Login);
        assert_eq!(nav.full_screen_cover().unwrap().page(), &Pages::SignUp);

        // Clearing one slot leaves the other alone
        nav.pop(Dismissal::Sheet);
        assert!(nav.sheet().is_none());
        assert_eq!(nav.full_screen_cover().unwrap().page(), &Pages::SignUp);
    }

    #[test]
    fn test_pop_to_root_empties_stack_and_keeps_modals() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);
        nav.push(Pages::Login, Presentation::Sheet);
        nav.push(Pages::SignUp, Presentation::FullScreenCover);

        nav.pop_to_root();

        assert!(nav.is_at_root());
        assert!(nav.sheet().is_some());
        assert!(nav.full_screen_cover().is_some());
    }

    #[test]
    fn test_pop_to_root_on_empty_stack_is_noop() {
        let mut nav: Navigator<Pages> = Navigator::new();
        nav.pop_to_root();
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_sheet_replacement_does_not_queue() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Sheet);
        nav.push(Pages::SignUp, Presentation::Sheet);

        assert_eq!(nav.sheet().unwrap().page(), &Pages::SignUp);

        // One dismissal clears the slot entirely
        nav.pop(Dismissal::Sheet);
        assert!(nav.sheet().is_none());
    }

    #[test]
    fn test_cover_replacement_does_not_queue() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::FullScreenCover);
        nav.push(Pages::SignUp, Presentation::FullScreenCover);

        assert_eq!(nav.full_screen_cover().unwrap().page(), &Pages::SignUp);
    }

    #[test]
    fn test_over_pop_clamps_to_available_depth() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);

        nav.pop(Dismissal::Stacked { count: 5 });

        assert!(nav.is_at_root());
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_pop_multiple_entries() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);
        nav.push(
            Pages::Profile {
                name: "alice".to_string(),
            },
            Presentation::Stacked,
        );

        nav.pop(Dismissal::Stacked { count: 2 });

        assert_eq!(pages(&nav), vec![&Pages::Login]);
    }

    #[test]
    fn test_modal_dismissal_is_noop_when_empty() {
        let mut nav: Navigator<Pages> = Navigator::new();
        nav.pop(Dismissal::Sheet);
        nav.pop(Dismissal::FullScreenCover);
        assert!(nav.sheet().is_none());
        assert!(nav.full_screen_cover().is_none());
    }

    #[test]
    fn test_try_pop_rejects_underflow_and_leaves_stack() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);

        let err = nav.try_pop(Dismissal::Stacked { count: 3 }).unwrap_err();
        assert_eq!(
            err,
            NavError::StackUnderflow {
                requested: 3,
                available: 1
            }
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_try_pop_within_depth_succeeds() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);

        nav.try_pop(Dismissal::Stacked { count: 2 }).unwrap();
        assert!(nav.is_at_root());

        // Modal dismissals never underflow
        nav.try_pop(Dismissal::Sheet).unwrap();
        nav.try_pop(Dismissal::FullScreenCover).unwrap();
    }

    #[test]
    fn test_login_then_signup_sheet_scenario() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Sheet);

        assert_eq!(pages(&nav), vec![&Pages::Login]);
        assert_eq!(nav.sheet().unwrap().page(), &Pages::SignUp);
        assert!(nav.full_screen_cover().is_none());
    }

    #[test]
    fn test_cover_dismissal_leaves_stack_unchanged() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::FullScreenCover);

        nav.pop(Dismissal::FullScreenCover);

        assert!(nav.full_screen_cover().is_none());
        assert_eq!(pages(&nav), vec![&Pages::Login]);
    }

    #[test]
    fn test_repushing_a_page_creates_a_distinct_entry() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::Login, Presentation::Stacked);

        assert_eq!(nav.depth(), 2);
        let keys: Vec<_> = nav.stack().iter().map(|e| e.key()).collect();
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn test_default_dismissal_pops_one() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(Pages::SignUp, Presentation::Stacked);

        nav.pop(Dismissal::default());

        assert_eq!(pages(&nav), vec![&Pages::Login]);
    }

    #[test]
    fn test_navigator_serialization_round_trip() {
        let mut nav = Navigator::new();
        nav.push(Pages::Login, Presentation::Stacked);
        nav.push(
            Pages::Profile {
                name: "alice".to_string(),
            },
            Presentation::Stacked,
        );
        nav.push(Pages::SignUp, Presentation::Sheet);

        let json = serde_json::to_string(&nav).unwrap();
        let parsed: Navigator<Pages> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, nav);
        assert_eq!(
            parsed.current().unwrap().key(),
            nav.current().unwrap().key()
        );
    }
}
