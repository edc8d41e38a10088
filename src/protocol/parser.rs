//! Response parser
//!
//! Turns the raw `mntr` response into a fully-populated [`MntrEvent`].
//!
//! The wire protocol is best-effort diagnostic text, so the parser never
//! fails: malformed values leave their field at the zero default, unknown
//! lines are skipped, and a read error mid-stream simply ends the scan with
//! whatever was extracted up to that point.

use std::io::BufRead;

use super::event::MntrEvent;
use super::fields::DESCRIPTORS;

/// Parse a `mntr` response stream into a metric event
///
/// Scans the stream line by line and matches each line against the
/// descriptor table. Field order in the response does not matter, and any
/// subset of fields (including none) is accepted.
pub fn parse(mut response: impl BufRead) -> MntrEvent {
    let mut event = MntrEvent::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match response.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        // Tolerate arbitrary bytes in the response; a line that is not
        // valid UTF-8 can still carry matchable ASCII field names.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }

        // Wire names are unique and patterns anchored, so the first match
        // is the only possible one.
        for descriptor in DESCRIPTORS.iter() {
            if descriptor.apply(line, &mut event) {
                break;
            }
        }
    }

    event
}
