//! Logging setup for binaries and tests built on the lease contracts.
//!
//! The library itself only emits `tracing` events (decode successes at
//! `debug`, rejected input at `warn`); installing a subscriber is left to the
//! process that owns `main`.

use std::str::FromStr;
use std::sync::Once;

use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logs.
    Json,
    /// Human-readable logs.
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(format!("unknown log format '{other}' (expected json or pretty)")),
        }
    }
}

/// Initializes the logging subsystem, writing to stderr.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Environment Variables
///
/// - `RUST_LOG`: log filter (e.g. `warn`, `lease_proto=debug`); falls back to
///   `default_filter` when unset or invalid
///
/// # Example
///
/// ```rust
/// use lease_proto::observability::{init_logging, LogFormat};
///
/// init_logging(LogFormat::Pretty, "info");
/// ```
pub fn init_logging(format: LogFormat, default_filter: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                    .init();
            }
        }
    });
}

/// Creates a span for a codec operation on one message type.
///
/// # Example
///
/// ```rust
/// use lease_proto::observability::codec_span;
///
/// let span = codec_span("decode", "tutorial.lease.v1.Lease");
/// let _guard = span.enter();
/// ```
#[must_use]
pub fn codec_span(operation: &str, message_type: &str) -> Span {
    tracing::info_span!("codec", op = operation, message_type = message_type)
}
