use crate::common::command::{count_snapshots, run_svcs_command, tracked_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::no_argument(&["commit"])]
#[case::blank_message(&["commit", "   "])]
fn commit_without_message(
    tracked_repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(tracked_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("Message was not passed.\n");

    assert_eq!(count_snapshots(tracked_repository_dir.path())?, 0);

    Ok(())
}
