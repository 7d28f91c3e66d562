//! JSON-line event sinks
//!
//! Per REHYDRATION.md §8:
//! - Logs are synchronous
//! - No buffering
//! - One log line = one event
//! - Deterministic key ordering (alphabetical)

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::Value;

use super::RehydrationEvent;

/// Where traversal events go.
pub trait EventSink {
    /// Receives one event. Must not panic on sink failure.
    fn emit(&self, event: &RehydrationEvent);
}

/// Discards every event. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &RehydrationEvent) {}
}

/// A sink that writes one JSON object per line.
///
/// Key order is alphabetical and therefore deterministic. Write failures
/// are swallowed; observability must never take the traversal down.
pub struct JsonLogger<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonLogger<W> {
    /// Creates a logger over the given writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the logger, returning the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl JsonLogger<io::Stderr> {
    /// Creates a logger writing to stderr.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> EventSink for JsonLogger<W> {
    fn emit(&self, event: &RehydrationEvent) {
        let Ok(Value::Object(mut fields)) = serde_json::to_value(event) else {
            return;
        };
        fields.insert(
            "severity".to_string(),
            Value::String(event.severity().as_str().to_string()),
        );
        let line = Value::Object(fields).to_string();

        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}
