//! [`tracing`] subscriber setup.

use std::{io, sync::OnceLock};

use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::{SubscriberInitExt as _, TryInitError},
};

/// [`log::Level`]s written to the stderr, rather than to the stdout.
const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

/// Maximal [`log::Level`] to be written.
///
/// [`log::Level::INFO`] is used until [`set_level()`] is called.
static LEVEL: OnceLock<log::Level> = OnceLock::new();

/// Installs the global [`tracing`] subscriber writing [`STDERR_LEVELS`] to
/// the stderr and everything else to the stdout.
///
/// # Errors
///
/// If a global subscriber has been installed already.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || !STDERR_LEVELS.contains(meta.level())
                            && is_enabled(*meta.level())
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || STDERR_LEVELS.contains(meta.level())
                            && is_enabled(*meta.level())
                })),
        )
        .try_init()
}

/// Sets the maximal [`log::Level`] to be written.
///
/// Only the first call has an effect, so the level configured once stays for
/// the whole process.
pub fn set_level(level: log::Level) {
    if LEVEL.set(level).is_err() {
        log::warn!(%level, "log level is set already, ignoring");
    }
}

/// Indicates whether the provided [`log::Level`] passes the configured one.
fn is_enabled(level: log::Level) -> bool {
    LEVEL.get().copied().unwrap_or(log::Level::INFO) >= level
}
