//! VersionSelector - Deterministic point-in-time selection
//!
//! Per REHYDRATION.md §2 - This module implements the EXACT selection rule:
//!
//! Given the change set `C₀ … Cₙ` for a subject and a target time `T`:
//! 1. Consider only changes with `timestamp ≤ T`
//! 2. Order descending by timestamp; ties keep change-set order (stable)
//! 3. Default policy takes the first ordered change (maximum timestamp);
//!    a caller policy receives the whole ordered sequence and returns one
//!    of its elements, or none
//! 4. An empty filtered set selects nothing; the caller falls back to the
//!    live subject
//!
//! This rule admits NO EXCEPTIONS. Repeated calls over identical input
//! select the same change.

use crate::change::{Change, Timestamp};

/// A caller-supplied selection policy.
///
/// Receives the filtered changes in descending timestamp order and returns
/// one of them, or none. Lets callers express resolutions such as "latest
/// published version" instead of plain latest.
pub type SelectorFn<'p> = &'p dyn for<'c> Fn(&[&'c Change]) -> Option<&'c Change>;

/// Stateless point-in-time selection per REHYDRATION.md §2.
///
/// This is a pure function module with no state. It never reorders or
/// mutates the change set it is given.
pub struct VersionSelector;

impl VersionSelector {
    /// Selects the change that was current at `at` under the default policy.
    pub fn select<'a>(changes: &'a [Change], at: Timestamp) -> Option<&'a Change> {
        Self::select_with(changes, at, None)
    }

    /// Selects the change that was current at `at`.
    ///
    /// With no policy this is the filtered change with the maximum
    /// timestamp; among equal maxima the one earliest in the change set
    /// wins, so the pick is stable for a fixed input.
    pub fn select_with<'a>(
        changes: &'a [Change],
        at: Timestamp,
        policy: Option<SelectorFn<'_>>,
    ) -> Option<&'a Change> {
        let mut ordered: Vec<&'a Change> = changes
            .iter()
            .filter(|change| change.timestamp() <= at)
            .collect();
        // Stable sort: equal timestamps keep their change-set order.
        ordered.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        match policy {
            Some(policy) => policy(&ordered),
            None => ordered.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SubjectType, TypeKey};
    use chrono::DateTime;

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    fn change(body: &str, secs: i64) -> Change {
        Change::of(
            Doc {
                body: body.to_string(),
            },
            ts(secs),
        )
    }

    fn ts(secs: i64) -> Timestamp {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn body(change: &Change) -> &str {
        &change.value_of::<Doc>().unwrap().body
    }

    #[test]
    fn test_selects_largest_timestamp_within_bound() {
        let changes = vec![change("v1", 1), change("v5", 5), change("v10", 10)];

        let selected = VersionSelector::select(&changes, ts(7)).unwrap();
        assert_eq!(body(selected), "v5");
    }

    #[test]
    fn test_exact_timestamp_is_selectable() {
        let changes = vec![change("v1", 10), change("v2", 20)];

        let selected = VersionSelector::select(&changes, ts(20)).unwrap();
        assert_eq!(body(selected), "v2");
    }

    #[test]
    fn test_empty_filtered_set_selects_nothing() {
        let changes = vec![change("v10", 10), change("v20", 20)];
        assert!(VersionSelector::select(&changes, ts(5)).is_none());
        assert!(VersionSelector::select(&[], ts(5)).is_none());
    }

    #[test]
    fn test_tie_break_is_stable() {
        let changes = vec![change("first", 10), change("second", 10)];

        // Equal timestamps: the pick is unspecified but must repeat.
        let first = VersionSelector::select(&changes, ts(10)).unwrap();
        for _ in 0..10 {
            let again = VersionSelector::select(&changes, ts(10)).unwrap();
            assert_eq!(body(again), body(first));
        }
        assert_eq!(body(first), "first");
    }

    #[test]
    fn test_selection_ignores_change_set_order() {
        let changes = vec![change("newest", 30), change("oldest", 1), change("mid", 15)];

        let selected = VersionSelector::select(&changes, ts(40)).unwrap();
        assert_eq!(body(selected), "newest");
    }

    fn oldest_policy<'c>(ordered: &[&'c Change]) -> Option<&'c Change> {
        let stamps: Vec<i64> = ordered.iter().map(|c| c.timestamp().timestamp()).collect();
        let mut descending = stamps.clone();
        descending.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, descending, "policy must see descending order");
        ordered.last().copied()
    }

    fn refuse_policy<'c>(_: &[&'c Change]) -> Option<&'c Change> {
        None
    }

    #[test]
    fn test_policy_receives_descending_order() {
        let changes = vec![change("v1", 1), change("v2", 2), change("v3", 3)];

        let selected = VersionSelector::select_with(&changes, ts(10), Some(&oldest_policy)).unwrap();
        assert_eq!(body(selected), "v1");
    }

    #[test]
    fn test_policy_may_select_nothing() {
        let changes = vec![change("v1", 1)];
        assert!(VersionSelector::select_with(&changes, ts(10), Some(&refuse_policy)).is_none());
    }
}
