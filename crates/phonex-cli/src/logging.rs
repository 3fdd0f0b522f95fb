//! Logging setup for the phonex command.

use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initialize tracing.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Logs go to
/// stderr in compact form so stdout carries only codes.
pub fn init(default_level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
