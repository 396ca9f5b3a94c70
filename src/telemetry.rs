//! Logging initialization.
//!
//! Controlled by two environment variables:
//! - `BLOCKLIST_LOG` → `EnvFilter` directives (default: `warn`)
//! - `BLOCKLIST_LOG_FORMAT=json` → JSON lines instead of the compact text format
//!
//! Logs always go to stderr; stdout carries only command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "BLOCKLIST_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "BLOCKLIST_LOG_FORMAT";

/// Install the global subscriber. A second call keeps the first subscriber and
/// prints a warning.
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {e}");
    }
}
