//! Tracing setup.
//!
//! - `LOG_LEVEL` sets the filter directives (e.g. `debug` or
//!   `warn,halachabench_dashboard::dashboard=debug`)
//! - `LOG_FORMAT=json` switches to structured JSON lines
//!
//! Logs always go to stderr; stdout carries command output only.

use std::io;

use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_DIRECTIVES: &str = "warn,halachabench_dashboard=info";

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    let result = match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
    // Already installed (tests, or an embedding binary)
    let _ = result;
}
