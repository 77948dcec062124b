//! The API client: single chokepoint for backend HTTP calls.
//!
//! PROTOCOL
//! ========
//! Every call attaches `Content-Type: application/json` and, when an access
//! token is stored, `Authorization: Bearer <access>`. A 401 on a call that
//! carried a bearer triggers the refresh flow; on success the original
//! request is retried exactly once with the fresh token, on failure the
//! token store is cleared, the session-invalidated hook fires, and the call
//! fails with an authentication error. Application errors are never
//! retried.
//!
//! The refresh flow is single-flight: concurrent 401s serialize on an
//! async mutex, and a waiter whose stored access token already changed
//! reuses it instead of issuing a duplicate refresh call.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use futures::lock::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::error::{self, ApiError};
use crate::net::tokens::TokenStore;
use crate::net::transport::{ApiRequest, Method, Transport};
use crate::net::types::RefreshResponse;

const REFRESH_PATH: &str = "/api/users/token/refresh/";

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const JSON_CONTENT: &str = "application/json";

/// Typed client for the backend API, generic over the HTTP transport.
pub struct ApiClient<T: Transport> {
    base: String,
    tokens: TokenStore,
    transport: T,
    refresh_gate: Mutex<()>,
    on_session_invalid: Box<dyn Fn()>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, tokens: TokenStore, transport: T) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_owned(),
            tokens,
            transport,
            refresh_gate: Mutex::new(()),
            on_session_invalid: Box::new(|| {}),
        }
    }

    /// Install the hook fired when a session turns out to be unrecoverable
    /// (refresh failed after a 401). The hosting app wires this to a hard
    /// redirect so all in-memory state is discarded with the session.
    #[must_use]
    pub fn on_session_invalid(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_session_invalid = Box::new(hook);
        self
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Send a request and decode the success body as `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let raw = self.request_raw(method, path, body).await?;
        decode(&raw)
    }

    async fn request_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let access = self.tokens.access();
        let request = build_request(&self.base, method, path, access.as_deref(), body.clone());
        let mut response = self.transport.send(request).await.map_err(ApiError::from)?;

        // Only a call that actually carried a bearer is worth refreshing;
        // an anonymous 401 is an ordinary application error.
        if response.status == 401 {
            if let Some(stale) = access {
                match self.refresh_access(&stale).await {
                    Some(fresh) => {
                        let retry = build_request(&self.base, method, path, Some(&fresh), body);
                        response = self.transport.send(retry).await.map_err(ApiError::from)?;
                    }
                    None => {
                        self.tokens.clear();
                        (self.on_session_invalid)();
                        return Err(ApiError::AuthExpired);
                    }
                }
            }
        }

        if !response.is_success() {
            return Err(error::status_error(response.status, &response.body));
        }
        Ok(response.body)
    }

    /// Mint a new access token from the stored refresh token.
    ///
    /// Returns the token to use for the retry, or `None` when the session
    /// cannot be recovered (no refresh token, or the backend rejected it),
    /// in which case the store has been cleared. The refresh token itself
    /// is not rotated by this flow.
    async fn refresh_access(&self, stale_access: &str) -> Option<String> {
        let _guard = self.refresh_gate.lock().await;

        // Another caller may have finished a refresh while we waited.
        if let Some(current) = self.tokens.access() {
            if current != stale_access {
                return Some(current);
            }
        }

        let refresh = self.tokens.refresh()?;
        let request = ApiRequest {
            method: Method::Post,
            url: format!("{}{REFRESH_PATH}", self.base),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT.to_owned())],
            body: Some(serde_json::json!({ "refresh": refresh })),
        };

        let response = match self.transport.send(request).await {
            Ok(r) if r.is_success() => r,
            _ => {
                self.tokens.clear();
                return None;
            }
        };

        match serde_json::from_str::<RefreshResponse>(&response.body) {
            Ok(parsed) => {
                self.tokens.store(&parsed.access, &refresh);
                Some(parsed.access)
            }
            Err(_) => {
                self.tokens.clear();
                None
            }
        }
    }
}

/// Assemble a JSON request with the default headers for `path`.
pub(crate) fn build_request(
    base: &str,
    method: Method,
    path: &str,
    access: Option<&str>,
    body: Option<Value>,
) -> ApiRequest {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT.to_owned())];
    if let Some(token) = access {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    ApiRequest { method, url: format!("{base}{path}"), headers, body }
}

/// Headers for non-JSON calls (multipart upload, binary download): bearer
/// only, no Content-Type so the transport can set its own boundary.
pub(crate) fn bearer_headers(access: Option<&str>) -> Vec<(String, String)> {
    access
        .map(|token| vec![("Authorization".to_owned(), format!("Bearer {token}"))])
        .unwrap_or_default()
}

fn decode<R: DeserializeOwned>(raw: &str) -> Result<R, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}
