use crate::common::command::{repository_dir, run_svcs_command, tracked_repository_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_tracked_files_on_empty_index(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout("Add a file to the index.\n");

    Ok(())
}

#[rstest]
fn list_tracked_files_in_insertion_order(
    tracked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(tracked_repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout("Tracked files:\na.txt\nb.txt\n");

    Ok(())
}
