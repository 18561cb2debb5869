use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "storefront::cart";

/// Forwards use-case log lines to the installed `tracing` subscriber, all
/// under the `storefront::cart` target so they can be filtered as a group.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{message}");
    }
}
