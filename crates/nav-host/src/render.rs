//! Rendering contract
//!
//! The host never interprets page values itself; the integrating
//! application supplies a pure mapping from each page value to a
//! displayable unit. The view type is opaque here — typically a
//! serializable description consumed by the frontend.

/// Pure mapping from a page value to its displayable unit.
///
/// `render` must be a pure function of the page value: the host may
/// call it any number of times while assembling a scene, and two calls
/// on equal pages must describe the same surface. View identity is
/// not the renderer's concern; the host tags each rendered layer with
/// the stable key of its stack entry.
pub trait Render {
    /// The displayable unit produced for one page.
    type View;

    /// Render this page value.
    fn render(&self) -> Self::View;
}
