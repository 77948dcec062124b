//! Network layer: token storage, HTTP transport, and the typed API client.
//!
//! DESIGN
//! ======
//! Every backend call funnels through [`client::ApiClient`], which owns the
//! bearer-auth and refresh-and-retry protocol. The client is generic over
//! [`transport::Transport`] so the protocol is exercised natively in tests
//! with a scripted transport; the real `gloo-net` transport only exists in
//! the browser (`hydrate` feature). Pages call the free functions in
//! [`api`], which stub out to errors on the server.

pub mod api;
pub mod client;
pub mod error;
pub mod tokens;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
