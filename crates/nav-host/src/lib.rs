//! Flow hosting for Waypoint
//!
//! This crate composes a `nav-core` coordinator with a rendering
//! surface:
//!
//! - [`Render`] - the pure page-to-view contract supplied by the
//!   integrating application
//! - [`NavHost`] - the composition root owning one coordinator per
//!   mounted flow
//! - [`SharedNavigator`] - the handle descendants navigate with
//! - [`Scene`] - the renderable description of everything a flow
//!   currently presents
//! - [`flows`] - the sample main/login flow pair from the original
//!   sample app
//!
//! # Example
//!
//! ```rust
//! use nav_core::Presentation;
//! use nav_host::NavHost;
//! use nav_host::flows::MainFlow;
//!
//! let host = NavHost::new(MainFlow::Root);
//! host.navigator().push(MainFlow::SignUp, Presentation::Stacked);
//!
//! let scene = host.scene();
//! assert_eq!(scene.stacked.len(), 1);
//! assert_eq!(scene.stacked[0].view.title, "Sign Up");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod flows;
pub mod host;
pub mod render;

pub use host::{NavHost, Scene, SceneLayer, SharedNavigator};
pub use render::Render;
