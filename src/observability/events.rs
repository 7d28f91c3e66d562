//! Observable traversal events
//!
//! Per REHYDRATION.md §8, events are explicit and typed. They cover
//! selection outcomes, cycle breaks, skipped relationships, and collection
//! rebuilds; nothing else in the core is observable.

use serde::Serialize;

use crate::change::Timestamp;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Per-subject traversal detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Data conditions worth surfacing
    Warn = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
        }
    }
}

/// Why a relationship was skipped during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The target type is not registered in the navigation schema
    TargetNotRehydratable,
    /// The relationship slot holds no value
    ValueAbsent,
}

/// Observable events during rehydration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RehydrationEvent {
    /// A change was selected for a subject at the target time
    SnapshotSelected {
        /// The subject's type key name
        subject: &'static str,
        /// The selected change's timestamp
        timestamp: Timestamp,
    },
    /// No change predates the target time; the live state is used
    NoHistoryFallback {
        /// The subject's type key name
        subject: &'static str,
    },
    /// A subject identity was reached again and not re-entered
    CycleDetected {
        /// The subject's type key name
        subject: &'static str,
    },
    /// A relationship was left untouched
    RelationshipSkipped {
        /// The owning subject's type key name
        subject: &'static str,
        /// The relationship name
        relationship: &'static str,
        /// Why it was skipped
        reason: SkipReason,
    },
    /// A plural relationship's membership was rebuilt
    CollectionRebuilt {
        /// The owning subject's type key name
        subject: &'static str,
        /// The relationship name
        relationship: &'static str,
        /// Members in the rebuilt collection
        members: usize,
    },
}

impl RehydrationEvent {
    /// Returns the severity this event logs at
    pub fn severity(&self) -> Severity {
        match self {
            RehydrationEvent::SnapshotSelected { .. } => Severity::Trace,
            RehydrationEvent::CycleDetected { .. } => Severity::Trace,
            RehydrationEvent::NoHistoryFallback { .. } => Severity::Info,
            RehydrationEvent::RelationshipSkipped { .. } => Severity::Info,
            RehydrationEvent::CollectionRebuilt { .. } => Severity::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = RehydrationEvent::RelationshipSkipped {
            subject: "post",
            relationship: "author",
            reason: SkipReason::ValueAbsent,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "relationship_skipped");
        assert_eq!(json["subject"], "post");
        assert_eq!(json["reason"], "value_absent");
    }

    #[test]
    fn test_severity_strings() {
        assert_eq!(Severity::Trace.as_str(), "TRACE");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert!(Severity::Trace < Severity::Warn);
    }
}
