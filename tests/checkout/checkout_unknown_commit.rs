use crate::common::command::{run_svcs_command, svcs_commit, tracked_repository_dir};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::short_id("123456789")]
#[case::full_length_id("0123456789abcdef0123456789abcdef01234567")]
fn checkout_unknown_commit(
    tracked_repository_dir: TempDir,
    #[case] commit_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tracked_repository_dir.path();
    svcs_commit(dir, "init").assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "changed".to_string()));

    run_svcs_command(dir, &["checkout", commit_id])
        .assert()
        .success()
        .stdout("Commit does not exist.\n");

    assert_eq!(read_file(&dir.join("a.txt")), "changed");

    Ok(())
}
