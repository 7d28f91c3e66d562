//! Observability
//!
//! Per REHYDRATION.md §8:
//! - One JSON line per event
//! - Synchronous, unbuffered, deterministic field order
//! - Skipped relationships are reported here, never as errors
//!
//! This module provides:
//! - `Severity` - Explicit severity levels
//! - `RehydrationEvent` / `SkipReason` - Typed traversal events
//! - `EventSink` - Where events go
//! - `NullSink` - Discards everything (the default)
//! - `JsonLogger` - Writer-generic JSON-line sink

mod events;
mod logger;

pub use events::{RehydrationEvent, Severity, SkipReason};
pub use logger::{EventSink, JsonLogger, NullSink};
