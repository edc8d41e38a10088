//! Error types for zkprobe
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type for zkprobe operations
///
/// Every failure is scoped to a single fetch attempt. Field-level coercion
/// failures during parsing are deliberately NOT errors (the wire protocol is
/// best-effort diagnostic text); the parser defaults those fields instead.
#[derive(Debug, Error)]
pub enum ProbeError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// TCP connect, write, or read failure against a target.
    ///
    /// Covers refused/unreachable targets and timeouts during connect or
    /// read. The caller decides whether and when to retry.
    #[error("connection to {target} failed: {source}")]
    Connection {
        /// The `host:port` the fetch was aimed at
        target: String,
        /// The underlying I/O cause
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Wrap an I/O error with the target it occurred against
    pub fn connection(target: impl Into<String>, source: std::io::Error) -> Self {
        ProbeError::Connection {
            target: target.into(),
            source,
        }
    }

    /// True if this error was caused by a connect or read timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            ProbeError::Connection { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ),
        }
    }
}
