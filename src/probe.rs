//! Probe Module
//!
//! The fetch-and-parse facade the host collector drives.
//!
//! ## Responsibilities
//! - Own the connection target configuration
//! - Run one transport fetch of the `mntr` command per call
//! - Hand the raw response to the parser and return the event
//!
//! A probe holds no mutable state: concurrent fetches against the same or
//! different probes need no locking. Scheduling, retry cadence, and event
//! shipping belong to the caller.

use crate::config::Config;
use crate::error::Result;
use crate::network;
use crate::protocol::{self, MntrEvent, MNTR};

/// A reusable fetch-and-parse handle for one configured target
#[derive(Debug, Clone)]
pub struct Probe {
    config: Config,
}

impl Probe {
    /// Create a probe for the given target
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The `host:port` this probe is aimed at
    pub fn target(&self) -> String {
        self.config.address()
    }

    /// Fetch one monitoring snapshot
    ///
    /// Opens a fresh connection, sends `mntr`, reads to connection close,
    /// and parses the response. Returns a fully-populated event; fields the
    /// server did not report stay at their zero defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Connection`](crate::ProbeError) if the target
    /// is unreachable or the timeout elapses. No partial event is produced
    /// on error.
    pub fn fetch(&self) -> Result<MntrEvent> {
        let response = network::fetch(MNTR, &self.config).inspect_err(|e| {
            tracing::error!(
                "four-letter command {} on {} failed: {}",
                MNTR,
                self.target(),
                e
            );
        })?;

        Ok(protocol::parse(response.as_slice()))
    }
}
