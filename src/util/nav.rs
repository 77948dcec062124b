//! Full-page navigation.
//!
//! Distinct from the router's soft navigation: assigning `location.href`
//! reloads the document and discards all in-memory application state. Used
//! when the session itself is torn down (logout, unrecoverable refresh
//! failure), where keeping stale state alive would be worse than a reload.

/// Navigate the browser to `path` with a full page load. No-op outside a
/// browser environment.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
