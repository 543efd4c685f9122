//! Navigation coordinator core for Waypoint
//!
//! This crate provides the state machine behind one navigation flow:
//! a linear push/pop stack plus two independent modal slots (sheet and
//! full-screen cover), generic over a caller-supplied page type.
//!
//! The coordinator holds no rendering knowledge. Composition with a
//! rendering surface lives in the `nav-host` crate.
//!
//! # Example
//!
//! ```rust
//! use nav_core::{Dismissal, Navigator, Presentation};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum Pages {
//!     Login,
//!     SignUp,
//! }
//!
//! let mut nav = Navigator::new();
//! nav.push(Pages::Login, Presentation::Stacked);
//! nav.push(Pages::SignUp, Presentation::Sheet);
//!
//! assert_eq!(nav.depth(), 1);
//! assert_eq!(nav.sheet().map(|e| e.page()), Some(&Pages::SignUp));
//!
//! nav.pop(Dismissal::Sheet);
//! assert!(nav.sheet().is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod navigator;
pub mod page;

pub use entry::StackEntry;
pub use error::{NavError, Result};
pub use navigator::{Dismissal, Navigator, Presentation};
pub use page::Page;
