use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_missing_file_reports_it(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .success()
        .stdout("Can't find 'missing.txt'.\n");

    // the index must stay untouched
    let index_content = std::fs::read_to_string(repository_dir.path().join("vcs/index.txt"))?;
    assert_eq!(index_content, "");

    Ok(())
}
