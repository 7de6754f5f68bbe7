use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Fans every line out to all attached sinks, in attach order.
#[derive(Default)]
pub struct MultiLogger {
    sinks: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }

    pub fn attach(mut self, sink: DynLogger) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn into_dyn(self) -> DynLogger {
        Arc::new(self)
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }
}

/// Tracing output always; the file sink too when `file` is set and can be opened.
pub fn init_combined_logger(tag: &str, file: Option<&str>, level: &str) -> DynLogger {
    let mut logger = MultiLogger::default().attach(super::init_tracing_logger(tag));
    if let Some(path) = file {
        match super::init_file_logger(path, level) {
            Ok(file_logger) => logger = logger.attach(file_logger),
            Err(e) => tracing::warn!("{}", e),
        }
    }
    logger.into_dyn()
}
