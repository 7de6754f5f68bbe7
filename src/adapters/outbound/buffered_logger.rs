use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy)]
enum Severity {
    Info,
    Warn,
    Error,
}

/// Keeps slow sinks (files) off the tick loop: lines are queued and written by a
/// background task. When the queue is full new lines are dropped.
///
/// Must be called from within a tokio runtime.
pub fn init_buffered_logger(sink: DynLogger, capacity: usize) -> DynLogger {
    spawn_buffered_logger(sink, capacity).0
}

/// Like [`init_buffered_logger`], also returning the writer task. The task ends once
/// every clone of the returned logger is dropped and the queue is empty, so awaiting
/// it flushes all pending lines.
pub fn spawn_buffered_logger(sink: DynLogger, capacity: usize) -> (DynLogger, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<(Severity, String)>(capacity.max(1));

    let writer = tokio::spawn(async move {
        while let Some((severity, line)) = rx.recv().await {
            match severity {
                Severity::Info => sink.info(&line),
                Severity::Warn => sink.warn(&line),
                Severity::Error => sink.error(&line),
            }
        }
    });

    (Arc::new(BufferedLogger { queue: tx }), writer)
}

struct BufferedLogger {
    queue: mpsc::Sender<(Severity, String)>,
}

impl BufferedLogger {
    fn enqueue(&self, severity: Severity, msg: &str) {
        let _ = self.queue.try_send((severity, msg.to_string()));
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) {
        self.enqueue(Severity::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.enqueue(Severity::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.enqueue(Severity::Error, msg);
    }
}
