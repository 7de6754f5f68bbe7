use crate::domains::logger::{parse_level, DomainLogger, DynLogger, FileLogger};
use std::sync::Arc;

/// Install the `fast_log` file sink and hand back a logger that writes to it.
pub fn init_file_logger(path: &str, level: &str) -> Result<DynLogger, String> {
    FileLogger::init(path, parse_level(level))
        .map_err(|e| format!("Failed to initialize fast_log at {}: {}", path, e))?;
    Ok(Arc::new(FileLogger) as Arc<dyn DomainLogger>)
}
