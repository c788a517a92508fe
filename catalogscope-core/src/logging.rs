//! Injected logging capability for connectors.
//!
//! Connectors never touch the process-wide subscriber. They hold a
//! [`tracing::Dispatch`] handed to them at construction and run each
//! operation under it, so callers choose where connector events go.

use tracing::{Dispatch, Level};

/// Maps CLI-style verbosity flags to a maximum log level.
///
/// `quiet` wins over any verbosity (ERROR only); otherwise 0 is INFO,
/// 1 is DEBUG and anything higher is TRACE.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

/// Builds a formatted logging dispatcher without installing it globally.
///
/// # Example
/// ```rust
/// use catalogscope_core::logging::logging_dispatch;
///
/// let dispatch = logging_dispatch(1, false);
/// tracing::dispatcher::with_default(&dispatch, || {
///     tracing::debug!("routed to the injected subscriber");
/// });
/// ```
pub fn logging_dispatch(verbose: u8, quiet: bool) -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    Dispatch::new(subscriber)
}

/// Returns the dispatcher currently in effect for the calling thread.
///
/// Used as the default logger when a connector is built without an
/// explicit one.
pub fn current_dispatch() -> Dispatch {
    tracing::dispatcher::get_default(Dispatch::clone)
}
