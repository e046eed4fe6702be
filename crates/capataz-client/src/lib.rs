//! capataz-client: HTTP transport for Foreman/Katello-style management servers
//!
//! This crate provides:
//! - Request building against a configured server base URL
//! - Basic-auth credentials on every request
//! - Typed JSON request helpers that fail on HTTP 4xx/5xx
//! - Status-preserving request variants for endpoints where the status code
//!   carries protocol meaning (HTTP 202 = asynchronous task accepted)

pub mod error;
pub mod http;

pub use error::ClientError;
pub use http::{CapatazHttpClient, HttpClientConfig, RawResponse};
