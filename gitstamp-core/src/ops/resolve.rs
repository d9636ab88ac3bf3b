//! Timestamp selection.

use crate::helpers::git_ops::GitOps;
use crate::ops::history::history;
use crate::types::{
    ContentUnit, History, HistoryOptions, ResolvedTimestamp, Result, SelectionPolicy, Strategy,
    TimestampEntry,
};

/// Reduce a history to a single instant under `policy`.
///
/// Steps, in order:
/// 1. drop commits whose message matches `ignore_commits` (synthetic
///    entries are never dropped),
/// 2. if `skip_first_commit`, drop the last remaining entry,
/// 3. apply the strategy.
///
/// Returns `None` when nothing remains. `Earliest`/`Latest` ties go to the
/// entry nearest the front of the history.
pub fn select(history: &History, policy: &SelectionPolicy) -> Option<i64> {
    select_entry(history, policy).map(|entry| entry.instant)
}

/// Like [`select`], but returns the chosen entry.
pub fn select_entry<'h>(history: &'h History, policy: &SelectionPolicy) -> Option<&'h TimestampEntry> {
    let mut remaining: Vec<&TimestampEntry> = history
        .iter()
        .filter(|entry| match (&policy.ignore_commits, &entry.commit_message) {
            (Some(pattern), Some(message)) => !pattern.is_match(message),
            _ => true,
        })
        .collect();

    if policy.skip_first_commit {
        remaining.pop();
    }

    match policy.strategy {
        Strategy::Last => remaining.first().copied(),
        Strategy::First => remaining.last().copied(),
        // max_by_key keeps the last maximum, so walk back to front
        Strategy::Latest => remaining.iter().copied().rev().max_by_key(|entry| entry.instant),
        Strategy::Earliest => remaining.iter().copied().min_by_key(|entry| entry.instant),
    }
}

/// [`select`] wrapped as a [`ResolvedTimestamp`].
pub fn resolve(history: &History, policy: &SelectionPolicy) -> ResolvedTimestamp {
    select(history, policy).into()
}

/// Extract the unit's history and reduce it.
///
/// # Errors
///
/// * `Configuration` - incompatible history options
/// * `Invocation` - git failed
pub fn resolve_timestamp(
    git: &dyn GitOps,
    unit: &ContentUnit,
    policy: &SelectionPolicy,
    options: &HistoryOptions,
) -> Result<ResolvedTimestamp> {
    let history = history(git, unit, options)?;
    let resolved = resolve(&history, policy);
    log::debug!(
        "{} resolved to {:?} ({} entries, {})",
        unit.primary().display(),
        resolved,
        history.len(),
        policy.descriptor()
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T1: i64 = 1589238000;
    const T2: i64 = 1589238180;

    fn two_commits() -> History {
        History::new(vec![TimestampEntry::commit(T2, "b"), TimestampEntry::commit(T1, "a")])
    }

    fn policy(strategy: Strategy) -> SelectionPolicy {
        SelectionPolicy::new(strategy)
    }

    #[test]
    fn strategies_on_ordered_history() {
        let h = two_commits();
        assert_eq!(select(&h, &policy(Strategy::First)), Some(T1));
        assert_eq!(select(&h, &policy(Strategy::Last)), Some(T2));
        assert_eq!(select(&h, &policy(Strategy::Earliest)), Some(T1));
        assert_eq!(select(&h, &policy(Strategy::Latest)), Some(T2));
    }

    #[test]
    fn positional_and_value_strategies_diverge_on_unordered_history() {
        let h = History::new(vec![
            TimestampEntry::commit(1589238180, "c3"),
            TimestampEntry::commit(1589238300, "c2"),
            TimestampEntry::commit(1589238000, "c1"),
            TimestampEntry::commit(1589237700, "c0"),
        ]);
        assert_eq!(select(&h, &policy(Strategy::Last)), Some(1589238180));
        assert_eq!(select(&h, &policy(Strategy::Latest)), Some(1589238300));
        assert_eq!(select(&h, &policy(Strategy::First)), Some(1589237700));

        let h = History::new(vec![
            TimestampEntry::commit(1589238180, "c3"),
            TimestampEntry::commit(1589237700, "c2"),
            TimestampEntry::commit(1589238000, "c1"),
        ]);
        assert_eq!(select(&h, &policy(Strategy::Earliest)), Some(1589237700));
        assert_eq!(select(&h, &policy(Strategy::First)), Some(1589238000));
    }

    #[test]
    fn ignore_commits_searches_messages() {
        let h = History::new(vec![
            TimestampEntry::commit(T2, "[skip] c2"),
            TimestampEntry::commit(T1, "c1"),
        ]);
        let p = SelectionPolicy::default().with_ignore_commits(r"\[skip\]").unwrap();
        assert_eq!(select(&h, &p), Some(T1));
    }

    #[test]
    fn ignore_commits_never_drops_synthetic_entries() {
        let h = History::new(vec![TimestampEntry::synthetic(T2), TimestampEntry::commit(T1, "c1")]);
        let p = SelectionPolicy::default().with_ignore_commits(".*").unwrap();
        assert_eq!(select(&h, &p), Some(T2));
    }

    #[test]
    fn empty_message_can_match_ignore_pattern() {
        let h = History::new(vec![TimestampEntry::commit(T2, ""), TimestampEntry::commit(T1, "x")]);
        let p = SelectionPolicy::default().with_ignore_commits("^$").unwrap();
        assert_eq!(select(&h, &p), Some(T1));
    }

    #[test]
    fn skip_first_commit_with_single_entry_is_missing() {
        let h = History::new(vec![TimestampEntry::commit(T1, "initial")]);
        let p = SelectionPolicy::default().with_skip_first_commit(true);
        assert_eq!(resolve(&h, &p), ResolvedTimestamp::missing());
    }

    #[test]
    fn skip_first_commit_applies_after_filtering() {
        let h = History::new(vec![
            TimestampEntry::commit(300, "later [nochange]"),
            TimestampEntry::commit(200, "edit"),
            TimestampEntry::commit(100, "create"),
        ]);
        let p = SelectionPolicy::default()
            .with_ignore_commits(r"\[nochange\]")
            .unwrap()
            .with_skip_first_commit(true);
        assert_eq!(select(&h, &p), Some(200));

        let h = History::new(vec![
            TimestampEntry::commit(200, "edit"),
            TimestampEntry::commit(100, "create [nochange]"),
        ]);
        // the ignored creation commit is gone, so "edit" is the one skipped
        assert_eq!(select(&h, &p), None);
    }

    #[test]
    fn empty_history_is_missing() {
        for strategy in [Strategy::First, Strategy::Earliest, Strategy::Latest, Strategy::Last] {
            assert!(resolve(&History::default(), &policy(strategy)).is_missing());
        }
    }

    #[test]
    fn ties_prefer_the_newest_position() {
        let h = History::new(vec![
            TimestampEntry::commit(100, "front"),
            TimestampEntry::commit(100, "back"),
        ]);
        let latest = select_entry(&h, &policy(Strategy::Latest)).unwrap();
        let earliest = select_entry(&h, &policy(Strategy::Earliest)).unwrap();
        assert_eq!(latest.commit_message.as_deref(), Some("front"));
        assert_eq!(earliest.commit_message.as_deref(), Some("front"));
    }

    #[test]
    fn resolution_is_pure() {
        let h = two_commits();
        let p = SelectionPolicy::new(Strategy::Earliest);
        assert_eq!(resolve(&h, &p), resolve(&h, &p));
        assert_eq!(h, two_commits());
    }
}
