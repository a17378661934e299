use crate::common::command::{repository_dir, run_svcs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_same_file_twice_keeps_duplicates(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));

    for _ in 0..2 {
        run_svcs_command(repository_dir.path(), &["add", "a.txt"])
            .assert()
            .success();
    }

    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout("Tracked files:\na.txt\na.txt\n");

    Ok(())
}
