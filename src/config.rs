//! Build-time configuration.

/// Backend base URL used when `MSDP_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Base URL of the backend API, without a trailing slash.
///
/// Resolved at compile time from the `MSDP_API_URL` environment variable
/// so the deployed bundle needs no runtime configuration endpoint.
pub fn api_base() -> String {
    option_env!("MSDP_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_owned()
}
