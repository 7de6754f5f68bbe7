use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Forwards domain messages to `tracing`, tagged with the emitting run.
pub struct TracingLogger {
    tag: String,
}

impl TracingLogger {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl DomainLogger for TracingLogger {
    fn info(&self, msg: &str) {
        info!(run = %self.tag, "{}", msg);
    }

    fn warn(&self, msg: &str) {
        warn!(run = %self.tag, "{}", msg);
    }

    fn error(&self, msg: &str) {
        error!(run = %self.tag, "{}", msg);
    }
}

pub fn init_tracing_logger(tag: &str) -> DynLogger {
    Arc::new(TracingLogger::new(tag))
}
