//! Network Module
//!
//! Client-side TCP transport for the admin protocol.
//!
//! ## Architecture
//! - One disposable connection per fetch, no pooling
//! - A single timeout budget covers connect, write, and read-to-close
//! - All failures surface as [`ProbeError::Connection`](crate::ProbeError)

mod client;

pub use client::fetch;
