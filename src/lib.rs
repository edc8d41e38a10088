//! # zkprobe
//!
//! A lightweight health prober for ZooKeeper-style coordination services:
//! - One-shot `mntr` fetch over a short-lived TCP connection
//! - Forgiving plaintext parser producing a fully-populated metric event
//! - No persistent connections, no internal scheduling, no shared state
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Host Collector                            │
//! │           (scheduling, shipping, retry cadence)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Probe::fetch()
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Probe                                  │
//! │              (config + fetch-and-parse)                      │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   ┌─────────────────┐           ┌──────────────────┐
//!   │    Transport     │  bytes   │      Parser      │
//!   │ (TCP, "mntr",    │ ───────► │ (descriptor      │
//!   │  read to close)  │          │  table scan)     │
//!   └─────────────────┘           └────────┬─────────┘
//!                                          │
//!                                          ▼
//!                                  ┌──────────────┐
//!                                  │  MntrEvent   │
//!                                  │ (flat record)│
//!                                  └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod network;
pub mod protocol;
pub mod probe;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ProbeError, Result};
pub use config::Config;
pub use probe::Probe;
pub use protocol::{parse, MntrEvent, MNTR};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of zkprobe
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
