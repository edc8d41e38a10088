//! zkprobe CLI
//!
//! One-shot health probe: fetch a `mntr` snapshot from a coordination
//! service and print the event as JSON.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use zkprobe::{Config, Probe};

/// zkprobe
#[derive(Parser, Debug)]
#[command(name = "zkprobe")]
#[command(about = "Fetch a monitoring snapshot from a ZooKeeper-style service")]
#[command(version)]
struct Args {
    /// Target hostname or IP
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    hostname: String,

    /// Target admin port
    #[arg(short, long, default_value = "2181")]
    port: String,

    /// Fetch timeout (e.g. "60s", "1500ms")
    #[arg(short, long, default_value = "60s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,zkprobe=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .hostname(&args.hostname)
        .port(&args.port)
        .timeout(args.timeout)
        .build();

    let probe = Probe::new(config);
    tracing::info!("zkprobe v{} probing {}", zkprobe::VERSION, probe.target());

    let event = match probe.fetch() {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("probe failed: {}", e);
            std::process::exit(1);
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&event)
    } else {
        serde_json::to_string(&event)
    };

    match json {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("failed to serialize event: {}", e);
            std::process::exit(1);
        }
    }
}
