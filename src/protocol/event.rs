//! Metric event definition
//!
//! The flat output record for one fetch.

use serde::Serialize;

/// A monitoring snapshot of the coordination service
///
/// Always fully populated: fields absent from the response keep their zero
/// value (`0` for counters, `""` for text). Absence is indistinguishable
/// from a reported zero.
///
/// Follower counts (`followers`, `synced_followers`, `pending_syncs`) are
/// only reported by cluster leaders and stay at zero elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MntrEvent {
    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------
    /// Service version, including any build metadata
    /// (e.g. `3.5.1-alpha-1693007, built on 07/28/2015 07:19 GMT`)
    pub version_string: String,

    /// Role in the ensemble: `leader`, `follower`, or `standalone`
    pub server_state: String,

    // -------------------------------------------------------------------------
    // Request Latency (milliseconds)
    // -------------------------------------------------------------------------
    pub avg_latency: i64,
    pub min_latency: i64,
    pub max_latency: i64,

    // -------------------------------------------------------------------------
    // Traffic
    // -------------------------------------------------------------------------
    pub packets_received: i64,
    pub packets_sent: i64,
    pub num_alive_connections: i64,
    pub outstanding_requests: i64,

    // -------------------------------------------------------------------------
    // Data Tree
    // -------------------------------------------------------------------------
    pub znode_count: i64,
    pub watch_count: i64,
    pub ephemerals_count: i64,
    pub approximate_data_size: i64,

    // -------------------------------------------------------------------------
    // Process Resources
    // -------------------------------------------------------------------------
    pub open_file_descriptor_count: i64,
    pub max_file_descriptor_count: i64,

    // -------------------------------------------------------------------------
    // Leader-only Ensemble State
    // -------------------------------------------------------------------------
    pub followers: i64,
    pub synced_followers: i64,
    pub pending_syncs: i64,
}
