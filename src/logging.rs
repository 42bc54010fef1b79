use crate::error::LookupError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stdout tracing subscriber for the crate.
///
/// Opt-in: callers that already have a subscriber should skip this. The
/// filter honors `RUST_LOG` and defaults the crate's own spans and events
/// to `info`.
pub fn init() -> Result<(), LookupError> {
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_filter(
                    EnvFilter::from_default_env()
                        .add_directive("mlb_lookup=info".parse().unwrap()),
                ),
        )
        .try_init()
        .map_err(|e| LookupError::log_setup_error(format!("Failed to install subscriber: {e}")))
}
