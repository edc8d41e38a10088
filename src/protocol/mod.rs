//! Protocol Module
//!
//! The four-letter-word admin protocol: a fixed 4-byte command sent over a
//! fresh TCP connection, answered with newline-delimited plaintext and a
//! server-side close. No length prefixes, no framing, no escaping.
//!
//! ## Response Format
//!
//! One `field_name<whitespace>value` pair per line, in no guaranteed order;
//! leader-only fields may be absent entirely:
//!
//! ```text
//! zk_version      3.5.1-alpha-1693007, built on 07/28/2015 07:19 GMT
//! zk_avg_latency  0
//! zk_max_latency  1789
//! zk_min_latency  0
//! zk_packets_received     22152032
//! zk_packets_sent 30959914
//! zk_num_alive_connections        1033
//! zk_outstanding_requests 0
//! zk_server_state leader
//! zk_znode_count  242609
//! zk_watch_count  940522
//! zk_ephemerals_count     8565
//! zk_approximate_data_size        372143564
//! zk_open_file_descriptor_count   1083
//! zk_max_file_descriptor_count    1048576
//! zk_followers    5
//! zk_synced_followers     2
//! zk_pending_syncs        0
//! ```

mod event;
mod fields;
mod parser;

pub use event::MntrEvent;
pub use fields::{FieldDescriptor, FieldKind, DESCRIPTORS};
pub use parser::parse;

/// The monitoring-snapshot command, exactly 4 bytes by protocol convention
pub const MNTR: &str = "mntr";
