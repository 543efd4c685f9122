//! Sample flows
//!
//! The flow pair shipped with the original sample app: a main flow
//! whose login destination mounts a nested login flow with its own
//! coordinator. Used by the demo binary and the integration tests;
//! applications define their own page enums the same way.
//!
//! Sample usage:
//!
//! ```rust
//! use nav_core::Presentation;
//! use nav_host::NavHost;
//! use nav_host::flows::{LoginFlow, MainFlow};
//!
//! let main = NavHost::new(MainFlow::Root);
//! let nav = main.navigator();
//!
//! nav.push(MainFlow::SignUp, Presentation::Stacked);
//! nav.push(
//!     MainFlow::Login { title: "Login".to_string() },
//!     Presentation::Sheet,
//! );
//!
//! // The login destination hosts a nested flow with its own coordinator
//! let login = NavHost::new(LoginFlow::Root { title: "Login".to_string() });
//! login.navigator().push(LoginFlow::ForgotPassword, Presentation::FullScreenCover);
//! ```

use serde::{Deserialize, Serialize};

use crate::render::Render;

/// A rendered screen as plain data, consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenView {
    /// Navigation bar title
    pub title: String,
    /// Placeholder body content
    pub body: String,
}

impl ScreenView {
    fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Destinations of the main flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainFlow {
    /// Landing screen
    Root,
    /// Login entry point; mounts the nested [`LoginFlow`]
    Login {
        /// Title passed into the nested flow's root
        title: String,
    },
    /// Account creation screen
    SignUp,
}

impl MainFlow {
    /// Display title for this destination.
    pub fn title(&self) -> &str {
        match self {
            MainFlow::Root => "Main",
            MainFlow::Login { title } => title,
            MainFlow::SignUp => "Sign Up",
        }
    }
}

impl Render for MainFlow {
    type View = ScreenView;

    fn render(&self) -> ScreenView {
        match self {
            MainFlow::Root => ScreenView::new("Main", "Landing screen"),
            MainFlow::Login { title } => {
                ScreenView::new(title.clone(), "Hosts the nested login flow")
            }
            MainFlow::SignUp => ScreenView::new("Sign Up", "Account creation form"),
        }
    }
}

/// Destinations of the nested login flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginFlow {
    /// Credential entry screen
    Root {
        /// Title handed over from the presenting flow
        title: String,
    },
    /// Password recovery screen
    ForgotPassword,
}

impl LoginFlow {
    /// Display title for this destination.
    pub fn title(&self) -> &str {
        match self {
            LoginFlow::Root { title } => title,
            LoginFlow::ForgotPassword => "Forgot Password",
        }
    }
}

impl Render for LoginFlow {
    type View = ScreenView;

    fn render(&self) -> ScreenView {
        match self {
            LoginFlow::Root { title } => ScreenView::new(title.clone(), "Credential entry"),
            LoginFlow::ForgotPassword => {
                ScreenView::new("Forgot Password", "Password recovery form")
            }
        }
    }
}
