//! Integration tests for commit objects: accessors, parents and messages.

mod common;

use common::{test_signature, TestRepo};
use gitveneer::core::config::{CommitSettings, Settings, SettingsFile};
use gitveneer::git::{ErrorKind, GitError, Oid, Repository, Signature};

/// Root commit A on HEAD, B on HEAD, side commit C off A, merge M of B and C.
fn merge_history() -> (TestRepo, [Oid; 4]) {
    let (test, a) = TestRepo::with_initial_commit();
    let b = test.commit_file("b.txt", "b\n", "Add b", "HEAD", &[a]);
    let c = test.commit_file("c.txt", "c\n", "Add c", "", &[a]);
    let m = test.commit_file("m.txt", "m\n", "Merge c into b", "HEAD", &[b, c]);
    (test, [a, b, c, m])
}

#[test]
fn accessors() {
    let (test, oid) = TestRepo::with_initial_commit();
    let commit = test.repo.lookup_commit(&oid).unwrap();
    let sig = test_signature();

    assert_eq!(commit.oid(), oid);
    assert_eq!(commit.message().unwrap(), "Initial commit");
    assert_eq!(commit.author(), sig);
    assert_eq!(commit.committer(), sig);
    assert_eq!(commit.date_time(), 1_700_000_000);
    assert_eq!(commit.time_offset(), 120);

    let when = commit.author_time().unwrap();
    assert_eq!(when.timestamp(), 1_700_000_000);
    assert_eq!(when.offset().local_minus_utc(), 120 * 60);

    let tree = commit.tree().unwrap();
    assert_eq!(tree.oid(), commit.tree_id());
    assert_eq!(tree.len(), 1);
}

#[test]
fn root_commit_has_no_parents() {
    let (test, oid) = TestRepo::with_initial_commit();
    let commit = test.repo.lookup_commit(&oid).unwrap();

    assert_eq!(commit.parent_count(), 0);
    assert!(commit.parents().unwrap().is_empty());
    assert!(matches!(
        commit.parent(0),
        Err(GitError::ParentOutOfRange {
            index: 0,
            count: 0,
            ..
        })
    ));
}

#[test]
fn merge_parents_keep_order() {
    let (test, [_, b, c, m]) = merge_history();
    let merge = test.repo.lookup_commit(&m).unwrap();

    assert_eq!(merge.parent_count(), 2);
    assert_eq!(merge.parent(0).unwrap().oid(), b);
    assert_eq!(merge.parent(1).unwrap().oid(), c);
    assert_eq!(merge.parent_id(1).unwrap(), c);

    let ids: Vec<Oid> = merge.parents().unwrap().iter().map(|p| p.oid()).collect();
    assert_eq!(ids, vec![b, c]);

    let err = merge.parent(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(merge.parent_id(2).is_err());
}

#[test]
fn head_follows_ref_updates() {
    let (test, [a, b, c, m]) = merge_history();

    assert_eq!(test.repo.lookup_ref_oid("HEAD").unwrap(), m);
    let side = test.repo.lookup_commit(&c).unwrap();
    assert_eq!(side.parent(0).unwrap().oid(), a);

    let head = test.repo.head().unwrap().peel_to_commit().unwrap();
    let first_parent = head.parent(0).unwrap();
    assert_eq!(first_parent.oid(), b);
    assert_eq!(first_parent.parent(0).unwrap().oid(), a);
}

#[test]
fn commit_on_unborn_head_needs_no_parents() {
    let test = TestRepo::new();
    assert!(test.repo.is_head_orphan().unwrap());

    let oid = test.commit_file("f.txt", "f\n", "First", "HEAD", &[]);

    assert!(!test.repo.is_head_orphan().unwrap());
    assert_eq!(test.repo.head().unwrap().target(), Some(oid));
}

#[test]
fn commit_with_stale_parent_on_ref_fails() {
    let (test, [a, ..]) = merge_history();
    let tree = test.repo.lookup_commit(&a).unwrap().tree().unwrap();
    let parent = test.repo.lookup_commit(&a).unwrap();
    let sig = test_signature();

    // HEAD has moved on; its current tip must be the first parent.
    let result = test
        .repo
        .create_commit("HEAD", &sig, &sig, "stale", &tree, &[parent]);
    assert!(result.is_err());
}

#[test]
fn short_message_stops_at_line_break() {
    let test = TestRepo::new();
    let oid = test.commit_file(
        "f.txt",
        "f\n",
        "Subject line\n\nLonger body text that follows.\n",
        "HEAD",
        &[],
    );
    let commit = test.repo.lookup_commit(&oid).unwrap();

    assert_eq!(commit.short_message(80).unwrap(), "Subject line");
    assert_eq!(commit.short_message(7).unwrap(), "Subject");
    assert_eq!(commit.summary(), Some("Subject line"));
}

#[test]
fn short_message_default_uses_settings() {
    let test = TestRepo::new();
    let long = "x".repeat(120);
    let oid = test.commit_file("f.txt", "f\n", &long, "HEAD", &[]);
    let commit = test.repo.lookup_commit(&oid).unwrap();

    assert_eq!(
        commit.short_message_default(&Settings::default()).unwrap().len(),
        80
    );

    let settings = Settings::new(SettingsFile {
        commit: Some(CommitSettings {
            short_message_len: Some(10),
        }),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(commit.short_message_default(&settings).unwrap(), "xxxxxxxxxx");
}

#[test]
fn distinct_author_and_committer() {
    let test = TestRepo::new();
    let author = Signature::new("Author", "author@example.com", 1_600_000_000, -300);
    let committer = Signature::new("Committer", "committer@example.com", 1_650_000_000, 60);

    let mut index = test.repo.index().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = test.repo.lookup_tree(&tree_oid).unwrap();
    assert!(tree.is_empty());

    let oid = test
        .repo
        .create_commit("HEAD", &author, &committer, "Empty tree", &tree, &[])
        .unwrap();
    let commit = test.repo.lookup_commit(&oid).unwrap();

    assert_eq!(commit.author(), author);
    assert_eq!(commit.committer(), committer);
    assert_eq!(commit.date_time(), 1_600_000_000);
    assert_eq!(commit.time_offset(), -300);
}

#[test]
fn commit_object_round_trip() {
    let (test, oid) = TestRepo::with_initial_commit();
    let commit = test.repo.lookup_commit(&oid).unwrap();

    let object = commit.into_object();
    let again = object.into_commit().unwrap();
    assert_eq!(again.oid(), oid);
}

#[test]
fn operations_before_open_fail() {
    let repo = Repository::new();

    assert!(matches!(repo.head(), Err(GitError::NotOpen)));
    assert!(matches!(repo.lookup_commit(&Oid::zero()), Err(GitError::NotOpen)));
    assert!(matches!(repo.index(), Err(GitError::NotOpen)));
    assert!(matches!(
        repo.default_signature(&Settings::default()),
        Err(GitError::NotOpen)
    ));
}
