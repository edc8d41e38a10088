//! Command Client
//!
//! Runs one admin command against a target: connect, write the command
//! bytes, read everything until the server closes the connection.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Instant;

use crate::config::Config;
use crate::error::{ProbeError, Result};

/// Read chunk size; responses are a few KB at most
const READ_BUF_SIZE: usize = 4096;

/// Run a four-letter command against the configured target and return the
/// raw response bytes
///
/// The configured timeout bounds the connect and, once connected, the full
/// write-and-read-to-close exchange. The connection is closed on every exit
/// path; no partial response is returned on error.
pub fn fetch(command: &str, config: &Config) -> Result<Vec<u8>> {
    let target = config.address();
    let wrap = |source: std::io::Error| ProbeError::connection(target.as_str(), source);

    let addr = resolve(&target).map_err(wrap)?;
    let mut stream = TcpStream::connect_timeout(&addr, config.timeout).map_err(wrap)?;
    tracing::debug!("connected to {}", target);

    // The read budget starts once the connection is up
    let deadline = Instant::now() + config.timeout;

    // Disable Nagle's algorithm; the command must go out in one packet
    stream.set_nodelay(true).map_err(wrap)?;
    stream
        .set_write_timeout(Some(config.timeout))
        .map_err(wrap)?;
    stream.write_all(command.as_bytes()).map_err(wrap)?;
    tracing::trace!("sent command {:?} to {}", command, target);

    let response = read_to_close(&mut stream, deadline).map_err(wrap)?;
    tracing::debug!("read {} bytes from {}", response.len(), target);

    Ok(response)
}

/// Resolve `host:port` to the first usable socket address
fn resolve(target: &str) -> std::io::Result<SocketAddr> {
    target.to_socket_addrs()?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no address found for {target}"),
        )
    })
}

/// Accumulate the full response until the peer closes the connection
///
/// The socket read timeout is re-armed with the remaining budget before
/// every read, so a server that drips bytes cannot extend the fetch past
/// the deadline.
fn read_to_close(stream: &mut TcpStream, deadline: Instant) -> std::io::Result<Vec<u8>> {
    let mut response = Vec::new();
    let mut chunk = [0u8; READ_BUF_SIZE];

    loop {
        let remaining = deadline
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::TimedOut, "read deadline exceeded")
            })?;
        stream.set_read_timeout(Some(remaining))?;

        match stream.read(&mut chunk) {
            // Server closed the connection: response complete
            Ok(0) => return Ok(response),
            Ok(n) => response.extend_from_slice(&chunk[..n]),
            Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            // WouldBlock is the Unix read-timeout kind, TimedOut the Windows one
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) =>
            {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "read deadline exceeded",
                ))
            }
            Err(e) => return Err(e),
        }
    }
}
