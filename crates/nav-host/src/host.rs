//! Composition root for one navigation flow
//!
//! `NavHost` binds a root page to a fresh [`Navigator`], turns the
//! coordinator state into a renderable [`Scene`], and hands out
//! [`SharedNavigator`] handles so any descendant of the rendered
//! content can push and pop without the reference being threaded
//! through every level by hand.
//!
//! The handle wraps `Rc<RefCell<_>>`: cloning is cheap, all clones
//! address the same coordinator, and `Rc` keeps the handle `!Send`, so
//! every mutation happens on the thread that mounted the host. Flows
//! with different page types get different `Navigator` types and can
//! never share state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use nav_core::{Dismissal, Navigator, Page, Presentation, Result};

use crate::render::Render;

// =============================================================================
// Shared handle
// =============================================================================

/// Shared single-threaded handle to a flow's [`Navigator`].
///
/// Handed to descendant views by the [`NavHost`] that owns the
/// coordinator. Holding a handle does not transfer ownership; the
/// coordinator lives exactly as long as its host.
#[derive(Debug)]
pub struct SharedNavigator<P: Page> {
    inner: Rc<RefCell<Navigator<P>>>,
}

impl<P: Page> Clone for SharedNavigator<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Page> SharedNavigator<P> {
    fn new(navigator: Navigator<P>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(navigator)),
        }
    }

    /// Present a page. See [`Navigator::push`].
    pub fn push(&self, page: P, presentation: Presentation) {
        self.inner.borrow_mut().push(page, presentation);
    }

    /// Dismiss pages. See [`Navigator::pop`].
    pub fn pop(&self, dismissal: Dismissal) {
        self.inner.borrow_mut().pop(dismissal);
    }

    /// Strict dismissal. See [`Navigator::try_pop`].
    pub fn try_pop(&self, dismissal: Dismissal) -> Result<()> {
        self.inner.borrow_mut().try_pop(dismissal)
    }

    /// Return to the root page. See [`Navigator::pop_to_root`].
    pub fn pop_to_root(&self) {
        self.inner.borrow_mut().pop_to_root();
    }

    /// Read the coordinator state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&Navigator<P>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Current stack depth (0 means the root page is visible).
    pub fn depth(&self) -> usize {
        self.inner.borrow().depth()
    }

    /// Whether a stacked dismissal would remove anything.
    pub fn can_go_back(&self) -> bool {
        self.inner.borrow().can_go_back()
    }

    /// Clone of the full coordinator state, e.g. for persistence.
    pub fn snapshot(&self) -> Navigator<P> {
        self.inner.borrow().clone()
    }

    /// Replace the coordinator state, e.g. when restoring a snapshot.
    pub fn restore(&self, navigator: Navigator<P>) {
        *self.inner.borrow_mut() = navigator;
    }
}

// =============================================================================
// Scene
// =============================================================================

/// One rendered surface together with the stable key of its entry.
///
/// The key lets the frontend match surfaces across scene rebuilds, so
/// an unchanged entry keeps its view (and transient view state) while
/// pushed and popped entries animate in and out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayer<V> {
    /// Stable identity of the backing stack entry
    pub key: String,
    /// The rendered surface
    pub view: V,
}

/// Everything currently presented by one flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene<V> {
    /// The rendered root page, always present beneath the stack
    pub root: V,
    /// Rendered stack entries in push order (last = topmost/visible)
    pub stacked: Vec<SceneLayer<V>>,
    /// Rendered sheet, drawn over the stack, dismissible by gesture
    pub sheet: Option<SceneLayer<V>>,
    /// Rendered blocking overlay, not dismissible by gesture
    pub full_screen_cover: Option<SceneLayer<V>>,
}

// =============================================================================
// NavHost
// =============================================================================

/// Composition root binding a root page to its own coordinator.
///
/// Mounting a host creates exactly one [`Navigator`]; dropping the
/// host releases it. Nested flows mount their own hosts with their own
/// page types and coordinators.
#[derive(Debug)]
pub struct NavHost<P>
where
    P: Page + Render,
{
    root: P,
    navigator: SharedNavigator<P>,
}

impl<P> NavHost<P>
where
    P: Page + Render,
{
    /// Mount a host for the given root page with a fresh coordinator.
    pub fn new(root: P) -> Self {
        Self {
            root,
            navigator: SharedNavigator::new(Navigator::new()),
        }
    }

    /// The root page this host was mounted with.
    pub fn root(&self) -> &P {
        &self.root
    }

    /// A handle for descendant content to navigate with.
    pub fn navigator(&self) -> SharedNavigator<P> {
        self.navigator.clone()
    }

    /// Render the current coordinator state into a [`Scene`].
    pub fn scene(&self) -> Scene<P::View> {
        self.navigator.read(|nav| Scene {
            root: self.root.render(),
            stacked: nav
                .stack()
                .iter()
                .map(|entry| SceneLayer {
                    key: entry.key().to_string(),
                    view: entry.page().render(),
                })
                .collect(),
            sheet: nav.sheet().map(|entry| SceneLayer {
                key: entry.key().to_string(),
                view: entry.page().render(),
            }),
            full_screen_cover: nav.full_screen_cover().map(|entry| SceneLayer {
                key: entry.key().to_string(),
                view: entry.page().render(),
            }),
        })
    }

    /// Report that the user dismissed the sheet by gesture.
    ///
    /// Keeps coordinator state consistent with what is visually
    /// presented; the next [`scene`](Self::scene) omits the sheet.
    pub fn dismiss_sheet(&self) {
        tracing::debug!("sheet dismissed by gesture");
        self.navigator.pop(Dismissal::Sheet);
    }

    /// Programmatically clear the full-screen cover.
    ///
    /// Covers have no dismissal gesture; this is the host-side path
    /// for chrome such as a close button.
    pub fn dismiss_full_screen_cover(&self) {
        self.navigator.pop(Dismissal::FullScreenCover);
    }
}

// =============================================================================
// Tests
// =============================================================================
