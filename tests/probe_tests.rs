//! Probe Tests
//!
//! End-to-end fetch-and-parse against an in-process fixture server, plus
//! the JSON output surface handed to the host collector.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use zkprobe::{Config, MntrEvent, Probe};

// =============================================================================
// Helper Functions
// =============================================================================

fn serve_once(response: &'static [u8]) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut command = [0u8; 4];
        stream.read_exact(&mut command).unwrap();
        stream.write_all(response).unwrap();
    });
    port
}

fn probe_for(port: u16) -> Probe {
    Probe::new(
        Config::builder()
            .hostname("127.0.0.1")
            .port(port.to_string())
            .timeout(Duration::from_secs(5))
            .build(),
    )
}

// =============================================================================
// End-to-end Fetches
// =============================================================================

#[test]
fn test_fetch_produces_populated_event() {
    let port = serve_once(
        b"zk_version\t3.5.1-alpha, built on 07/28/2015\n\
          zk_avg_latency\t0\n\
          zk_max_latency\t1789\n\
          zk_followers\t5\n",
    );

    let event = probe_for(port).fetch().unwrap();

    assert_eq!(event.version_string, "3.5.1-alpha, built on 07/28/2015");
    assert_eq!(event.avg_latency, 0);
    assert_eq!(event.max_latency, 1789);
    assert_eq!(event.followers, 5);
    assert_eq!(event.server_state, "");
    assert_eq!(event.znode_count, 0);
}

#[test]
fn test_fetch_empty_response_yields_default_event() {
    let port = serve_once(b"");

    let event = probe_for(port).fetch().unwrap();

    assert_eq!(event, MntrEvent::default());
}

#[test]
fn test_fetch_unreachable_target_errors() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = probe_for(port).fetch();

    assert!(result.is_err());
}

#[test]
fn test_probe_target_joins_host_and_port() {
    let probe = Probe::new(Config::builder().hostname("zk1.internal").port("2181").build());

    assert_eq!(probe.target(), "zk1.internal:2181");
}

// =============================================================================
// Output Surface
// =============================================================================

#[test]
fn test_event_serializes_with_exactly_the_known_keys() {
    let port = serve_once(b"zk_znode_count\t9\nzk_server_state\tleader\n");

    let event = probe_for(port).fetch().unwrap();
    let value = serde_json::to_value(&event).unwrap();
    let object = value.as_object().unwrap();

    let expected = [
        "version_string",
        "server_state",
        "avg_latency",
        "min_latency",
        "max_latency",
        "packets_received",
        "packets_sent",
        "num_alive_connections",
        "outstanding_requests",
        "znode_count",
        "watch_count",
        "ephemerals_count",
        "approximate_data_size",
        "open_file_descriptor_count",
        "max_file_descriptor_count",
        "followers",
        "synced_followers",
        "pending_syncs",
    ];

    assert_eq!(object.len(), expected.len());
    for key in expected {
        assert!(object.contains_key(key), "missing output key {key}");
    }

    assert_eq!(object["znode_count"], 9);
    assert_eq!(object["server_state"], "leader");
}
