use crate::common::command::{
    count_snapshots, get_head_commit_id, svcs_commit, tracked_repository_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_twice_without_changes_is_a_no_op(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();

    svcs_commit(dir, "first message").assert().success();
    let first_id = get_head_commit_id(dir)?;

    svcs_commit(dir, "a different message")
        .assert()
        .success()
        .stdout("Nothing to commit.\n");

    assert_eq!(get_head_commit_id(dir)?, first_id);
    assert_eq!(count_snapshots(dir)?, 1);

    Ok(())
}

#[rstest]
fn commit_after_change_creates_a_new_commit(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();

    svcs_commit(dir, "init").assert().success();
    let first_id = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("a.txt"), "HELLO".to_string()));
    svcs_commit(dir, "update")
        .assert()
        .success()
        .stdout("Changes are committed.\n");

    assert_ne!(get_head_commit_id(dir)?, first_id);
    assert_eq!(count_snapshots(dir)?, 2);

    Ok(())
}
