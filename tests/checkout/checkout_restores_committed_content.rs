use crate::common::command::{
    get_head_commit_id, run_svcs_command, svcs_commit, tracked_repository_dir,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_restores_committed_content(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();

    svcs_commit(dir, "init").assert().success();
    let first_id = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("a.txt"), "HELLO".to_string()));
    svcs_commit(dir, "update").assert().success();
    let second_id = get_head_commit_id(dir)?;
    assert_ne!(first_id, second_id);

    // uncommitted edits are overwritten as well
    write_file(FileSpec::new(dir.join("b.txt"), "dirty".to_string()));

    run_svcs_command(dir, &["checkout", first_id.as_str()])
        .assert()
        .success()
        .stdout(format!("Switched to commit {}.\n", first_id));

    assert_eq!(read_file(&dir.join("a.txt")), "hello");
    assert_eq!(read_file(&dir.join("b.txt")), "world");

    run_svcs_command(dir, &["checkout", second_id.as_str()])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "HELLO");
    assert_eq!(read_file(&dir.join("b.txt")), "world");

    Ok(())
}

#[rstest]
fn checkout_recreates_deleted_files(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();

    svcs_commit(dir, "init").assert().success();
    let commit_id = get_head_commit_id(dir)?;
    std::fs::remove_file(dir.join("a.txt"))?;

    run_svcs_command(dir, &["checkout", commit_id.as_str()])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "hello");

    Ok(())
}
