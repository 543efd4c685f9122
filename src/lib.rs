//! Waypoint - a generic, type-safe navigation coordinator
//!
//! One navigation flow is a closed set of destination pages (an enum),
//! a coordinator owning the push/pop stack and two modal slots, and a
//! host that renders the whole thing into a scene:
//!
//! - [`nav_core`] - the coordinator state machine
//! - [`nav_host`] - flow hosting, rendering contract, sample flows

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use nav_core::{Dismissal, NavError, Navigator, Page, Presentation, StackEntry};
pub use nav_host::{flows, NavHost, Render, Scene, SceneLayer, SharedNavigator};
