//! History extraction and resolution against real git repositories.

use gitstamp_core::{
    history, resolve_timestamp, ContentUnit, History, HistoryOptions, ResolvedTimestamp,
    SelectionPolicy, Strategy, TimestampEntry,
};
use gitstamp_testkit::{TestRepo, INITIAL_COMMIT_TIME};

fn default_history(repo: &TestRepo, rel_paths: &[&str]) -> History {
    let unit = ContentUnit::new(rel_paths.iter().map(|p| repo.path(p))).unwrap();
    history(&repo.git(), &unit, &HistoryOptions::default()).unwrap()
}

fn resolve_with(repo: &TestRepo, rel_path: &str, policy: &SelectionPolicy) -> ResolvedTimestamp {
    let unit = ContentUnit::single(repo.path(rel_path));
    resolve_timestamp(&repo.git(), &unit, policy, &HistoryOptions::default()).unwrap()
}

#[test]
fn history_from_git() {
    let repo = TestRepo::new().unwrap();
    let ts = 1589238186;
    repo.commit("test.txt", ts, "message").unwrap();
    assert_eq!(
        default_history(&repo, &["test.txt"]).entries(),
        [TimestampEntry::commit(ts, "message")]
    );
}

#[test]
fn history_newest_first_without_synthetic_entry() {
    let repo = TestRepo::new().unwrap();
    repo.commit("test.txt", 1000, "c1").unwrap();
    repo.commit("test.txt", 2000, "c2").unwrap();
    repo.commit("test.txt", 3000, "c3").unwrap();
    assert_eq!(
        default_history(&repo, &["test.txt"]).entries(),
        [
            TimestampEntry::commit(3000, "c3"),
            TimestampEntry::commit(2000, "c2"),
            TimestampEntry::commit(1000, "c1"),
        ]
    );
}

#[test]
fn history_from_mtime_for_untracked_file() {
    let repo = TestRepo::new().unwrap();
    let ts = 1589238186;
    repo.touch("test.txt", Some(ts)).unwrap();
    assert_eq!(
        default_history(&repo, &["test.txt"]).entries(),
        [TimestampEntry::synthetic(ts)]
    );
}

#[test]
fn history_from_mtime_and_git_for_dirty_file() {
    let repo = TestRepo::new().unwrap();
    let ts1 = 1589238000;
    let ts2 = 1589238180;
    repo.commit("test.txt", ts1, "commit").unwrap();
    repo.modify("test.txt").unwrap();
    repo.touch("test.txt", Some(ts2)).unwrap();
    assert_eq!(
        default_history(&repo, &["test.txt"]).entries(),
        [TimestampEntry::synthetic(ts2), TimestampEntry::commit(ts1, "commit")]
    );
}

#[test]
fn history_of_missing_file_is_empty() {
    let repo = TestRepo::new().unwrap();
    assert!(default_history(&repo, &["test.txt"]).is_empty());
}

#[test]
fn shared_commit_appears_once_for_multi_path_unit() {
    let repo = TestRepo::new().unwrap();
    repo.commit("a.txt", 1000, "a only").unwrap();
    repo.commit_files(&["a.txt", "b.txt"], 2000, "both").unwrap();
    repo.commit("b.txt", 3000, "b only").unwrap();
    repo.commit("other.txt", 4000, "unrelated").unwrap();
    assert_eq!(
        default_history(&repo, &["a.txt", "b.txt"]).entries(),
        [
            TimestampEntry::commit(3000, "b only"),
            TimestampEntry::commit(2000, "both"),
            TimestampEntry::commit(1000, "a only"),
        ]
    );
}

#[test]
fn multi_path_dirty_variant_adds_its_mtime() {
    let repo = TestRepo::new().unwrap();
    repo.commit_files(&["a.txt", "b.txt"], 2000, "both").unwrap();
    repo.modify("b.txt").unwrap();
    repo.touch("b.txt", Some(5000)).unwrap();
    repo.touch("a.txt", Some(9000)).unwrap();
    // a.txt is clean, so its newer mtime is not consulted
    assert_eq!(
        default_history(&repo, &["a.txt", "b.txt"]).entries(),
        [TimestampEntry::synthetic(5000), TimestampEntry::commit(2000, "both")]
    );
}

#[test]
fn follow_renames_tracks_moved_file() {
    let repo = TestRepo::new().unwrap();
    repo.commit("old.txt", 1000, "create").unwrap();
    repo.rename("old.txt", "new.txt", 2000, "move").unwrap();

    let unit = ContentUnit::single(repo.path("new.txt"));
    let plain = history(&repo.git(), &unit, &HistoryOptions::default()).unwrap();
    assert_eq!(plain.entries(), [TimestampEntry::commit(2000, "move")]);

    let followed = history(&repo.git(), &unit, &HistoryOptions::follow_renames()).unwrap();
    assert_eq!(
        followed.entries(),
        [TimestampEntry::commit(2000, "move"), TimestampEntry::commit(1000, "create")]
    );
}

#[test]
fn follow_renames_rejects_multi_path_unit() {
    let repo = TestRepo::new().unwrap();
    let unit = ContentUnit::new([repo.path("a.txt"), repo.path("b.txt")]).unwrap();
    let err = history(&repo.git(), &unit, &HistoryOptions::follow_renames()).unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn resolve_not_in_git() {
    let repo = TestRepo::new().unwrap();
    let ts = 1589238006;
    repo.touch("test.txt", Some(ts)).unwrap();
    assert_eq!(
        resolve_with(&repo, "test.txt", &SelectionPolicy::default()),
        ResolvedTimestamp::instant(ts)
    );
}

#[test]
fn resolve_clean() {
    let repo = TestRepo::new().unwrap();
    let ts = 1589238186;
    repo.commit("test.txt", ts, "test").unwrap();
    assert_eq!(
        resolve_with(&repo, "test.txt", &SelectionPolicy::default()),
        ResolvedTimestamp::instant(ts)
    );
}

#[test]
fn resolve_dirty() {
    let repo = TestRepo::new().unwrap();
    let ts = 1589238246;
    repo.commit("test.txt", 1589238000, "test").unwrap();
    repo.modify("test.txt").unwrap();
    repo.touch("test.txt", Some(ts)).unwrap();
    let policy = SelectionPolicy::default().with_ignore_commits("ignore").unwrap();
    assert_eq!(resolve_with(&repo, "test.txt", &policy), ResolvedTimestamp::instant(ts));
}

#[test]
fn resolve_ignore_commits() {
    let repo = TestRepo::new().unwrap();
    let ts1 = 1589238000;
    let ts2 = 1589238180;
    repo.commit("test.txt", ts1, "commit 1").unwrap();
    repo.commit("test.txt", ts2, "[skip] commit 2").unwrap();
    let policy = SelectionPolicy::default().with_ignore_commits(r"\[skip\]").unwrap();
    assert_eq!(resolve_with(&repo, "test.txt", &policy), ResolvedTimestamp::instant(ts1));
}

#[test]
fn resolve_skip_first_commit() {
    let repo = TestRepo::new().unwrap();
    let ts1 = 1589238000;
    let ts2 = 1589238180;
    let policy = SelectionPolicy::default().with_skip_first_commit(true);

    repo.commit("test.txt", ts1, "test").unwrap();
    assert!(resolve_with(&repo, "test.txt", &policy).is_missing());

    repo.commit("test.txt", ts2, "test").unwrap();
    assert_eq!(resolve_with(&repo, "test.txt", &policy), ResolvedTimestamp::instant(ts2));
}

#[test]
fn resolve_strategies() {
    let repo = TestRepo::new().unwrap();
    repo.commit("test.txt", 1589238000, "c1").unwrap();
    repo.commit("test.txt", 1589238300, "c2").unwrap();
    repo.commit("test.txt", 1589237700, "c3").unwrap();

    let cases = [
        (Strategy::First, 1589238000),
        (Strategy::Last, 1589237700),
        (Strategy::Earliest, 1589237700),
        (Strategy::Latest, 1589238300),
    ];
    for (strategy, expected) in cases {
        assert_eq!(
            resolve_with(&repo, "test.txt", &SelectionPolicy::new(strategy)),
            ResolvedTimestamp::instant(expected),
            "strategy {}",
            strategy
        );
    }
}

#[test]
fn resolve_missing_file_is_missing_not_error() {
    let repo = TestRepo::new().unwrap();
    assert!(resolve_with(&repo, "test.txt", &SelectionPolicy::default()).is_missing());
}

#[test]
fn pub_date_and_last_mod_fields() {
    let repo = TestRepo::new().unwrap();
    let nochange = SelectionPolicy::default().with_ignore_commits(r"\[nochange\]").unwrap();
    let pub_date = SelectionPolicy {
        strategy: Strategy::First,
        ..nochange.clone()
    };
    let last_mod = nochange.with_skip_first_commit(true);

    repo.commit("contents.lr", 1589200000, "Ignore this commit [nochange]").unwrap();
    repo.commit("contents.lr", 1589210000, "publish").unwrap();
    repo.commit("contents.lr", 1589220000, "typo [nochange]").unwrap();
    assert_eq!(resolve_with(&repo, "contents.lr", &pub_date), ResolvedTimestamp::instant(1589210000));
    assert!(resolve_with(&repo, "contents.lr", &last_mod).is_missing());

    repo.commit("contents.lr", 1589230000, "update").unwrap();
    assert_eq!(resolve_with(&repo, "contents.lr", &last_mod), ResolvedTimestamp::instant(1589230000));
}

#[test]
fn initial_empty_commit_never_appears() {
    let repo = TestRepo::new().unwrap();
    repo.commit("test.txt", 1589238000, "c1").unwrap();
    let h = default_history(&repo, &["test.txt"]);
    assert!(h.iter().all(|e| e.instant != INITIAL_COMMIT_TIME));
}
