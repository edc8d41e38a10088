//! Field descriptors
//!
//! The fixed table of monitoring fields the service may report. Each
//! descriptor pairs a wire field name with a compiled line pattern and a
//! typed slot into [`MntrEvent`]. The table is built once per process and
//! is safe to share across concurrent fetches.

use std::sync::LazyLock;

use regex::Regex;

use super::event::MntrEvent;

/// Value type of a monitoring field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed integer counter or gauge
    Integer,
    /// Free-form text, stored verbatim
    Text,
}

/// Typed write access into one event field
enum Slot {
    Integer(fn(&mut MntrEvent) -> &mut i64),
    Text(fn(&mut MntrEvent) -> &mut String),
}

/// One monitoring field: wire name, output key, line pattern, typed slot
pub struct FieldDescriptor {
    /// Field name as emitted by the service (e.g. `zk_avg_latency`)
    pub wire_name: &'static str,

    /// Key under which the value appears in the output record
    /// (e.g. `avg_latency`)
    pub output_key: &'static str,

    /// Anchored pattern: wire name, a whitespace run, then the captured
    /// remainder of the line
    pattern: Regex,

    slot: Slot,
}

impl FieldDescriptor {
    fn new(wire_name: &'static str, output_key: &'static str, slot: Slot) -> Self {
        let pattern = Regex::new(&format!(r"^{wire_name}\s+(.*)$"))
            .expect("static field pattern must compile");
        Self {
            wire_name,
            output_key,
            pattern,
            slot,
        }
    }

    /// Value type this descriptor extracts
    pub fn kind(&self) -> FieldKind {
        match self.slot {
            Slot::Integer(_) => FieldKind::Integer,
            Slot::Text(_) => FieldKind::Text,
        }
    }

    /// Match a response line against this descriptor and, on success, store
    /// the extracted value into `event`.
    ///
    /// Integer values are trimmed and parsed as signed; a value that fails
    /// to parse leaves the field at its zero default. Text values keep the
    /// captured remainder verbatim.
    pub(super) fn apply(&self, line: &str, event: &mut MntrEvent) -> bool {
        let Some(caps) = self.pattern.captures(line) else {
            return false;
        };
        let raw = &caps[1];
        match self.slot {
            Slot::Integer(field) => {
                if let Ok(value) = raw.trim().parse::<i64>() {
                    *field(event) = value;
                }
            }
            Slot::Text(field) => {
                *field(event) = raw.to_string();
            }
        }
        true
    }
}

/// The full descriptor table, compiled once per process.
///
/// Wire names are unique and the patterns are anchored, so at most one
/// descriptor matches any given line.
pub static DESCRIPTORS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
    vec![
        FieldDescriptor::new(
            "zk_version",
            "version_string",
            Slot::Text(|e| &mut e.version_string),
        ),
        FieldDescriptor::new(
            "zk_server_state",
            "server_state",
            Slot::Text(|e| &mut e.server_state),
        ),
        FieldDescriptor::new(
            "zk_avg_latency",
            "avg_latency",
            Slot::Integer(|e| &mut e.avg_latency),
        ),
        FieldDescriptor::new(
            "zk_min_latency",
            "min_latency",
            Slot::Integer(|e| &mut e.min_latency),
        ),
        FieldDescriptor::new(
            "zk_max_latency",
            "max_latency",
            Slot::Integer(|e| &mut e.max_latency),
        ),
        FieldDescriptor::new(
            "zk_packets_received",
            "packets_received",
            Slot::Integer(|e| &mut e.packets_received),
        ),
        FieldDescriptor::new(
            "zk_packets_sent",
            "packets_sent",
            Slot::Integer(|e| &mut e.packets_sent),
        ),
        FieldDescriptor::new(
            "zk_num_alive_connections",
            "num_alive_connections",
            Slot::Integer(|e| &mut e.num_alive_connections),
        ),
        FieldDescriptor::new(
            "zk_outstanding_requests",
            "outstanding_requests",
            Slot::Integer(|e| &mut e.outstanding_requests),
        ),
        FieldDescriptor::new(
            "zk_znode_count",
            "znode_count",
            Slot::Integer(|e| &mut e.znode_count),
        ),
        FieldDescriptor::new(
            "zk_watch_count",
            "watch_count",
            Slot::Integer(|e| &mut e.watch_count),
        ),
        FieldDescriptor::new(
            "zk_ephemerals_count",
            "ephemerals_count",
            Slot::Integer(|e| &mut e.ephemerals_count),
        ),
        FieldDescriptor::new(
            "zk_approximate_data_size",
            "approximate_data_size",
            Slot::Integer(|e| &mut e.approximate_data_size),
        ),
        FieldDescriptor::new(
            "zk_open_file_descriptor_count",
            "open_file_descriptor_count",
            Slot::Integer(|e| &mut e.open_file_descriptor_count),
        ),
        FieldDescriptor::new(
            "zk_max_file_descriptor_count",
            "max_file_descriptor_count",
            Slot::Integer(|e| &mut e.max_file_descriptor_count),
        ),
        FieldDescriptor::new(
            "zk_followers",
            "followers",
            Slot::Integer(|e| &mut e.followers),
        ),
        FieldDescriptor::new(
            "zk_synced_followers",
            "synced_followers",
            Slot::Integer(|e| &mut e.synced_followers),
        ),
        FieldDescriptor::new(
            "zk_pending_syncs",
            "pending_syncs",
            Slot::Integer(|e| &mut e.pending_syncs),
        ),
    ]
});
