//! Page contract for navigable destinations
//!
//! Each navigation flow defines its own closed set of destinations,
//! typically as an enum. The coordinator only needs value semantics
//! from it: cloning into the stack, equality and hashing for matching
//! a rendered destination back to its model.

use std::fmt::Debug;
use std::hash::Hash;

/// Capability bound for the destination values of one navigation flow.
///
/// Implemented automatically for any type with value semantics; an
/// application normally defines an enum per flow:
///
/// ```rust
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum MainPages {
///     Root,
///     Login { title: String },
///     SignUp,
/// }
/// ```
///
/// Enums keep the destination set closed: every navigable value of a
/// flow is one of the declared variants, checked at compile time.
pub trait Page: Debug + Clone + PartialEq + Eq + Hash {}

impl<T> Page for T where T: Debug + Clone + PartialEq + Eq + Hash {}
