use crate::common::command::{count_snapshots, repository_dir, svcs_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_nothing_tracked(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    svcs_commit(repository_dir.path(), "init")
        .assert()
        .success()
        .stdout("Nothing to commit.\n");

    assert_eq!(count_snapshots(repository_dir.path())?, 0);

    Ok(())
}
