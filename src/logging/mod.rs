//! Logging
//!
//! - `init_tracing` - internal diagnostics via `tracing`
//! - `EventEntry` / `EventLog` - the event log shown in the console

pub mod entry;
pub mod filter;
pub mod store;

pub use entry::{EventEntry, EventKind};
pub use filter::EventFilter;
pub use store::EventLog;

/// Initialize internal tracing.
///
/// Call early in main() before any logging occurs. In TUI mode diagnostics
/// would corrupt the screen, so they are only enabled there with `verbose`.
pub fn init_tracing(verbose: bool, tui: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match (verbose, tui) {
        (true, _) => "debug",
        (false, true) => "off",
        (false, false) => "info",
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .try_init();
}
