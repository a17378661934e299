use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::name::en::Name;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn get_username_when_none_is_set(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout("Please, tell me who you are.\n");

    Ok(())
}

#[rstest]
fn set_then_get_username(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let name = Name().fake::<String>().replace(" ", "_");

    run_svcs_command(repository_dir.path(), &["config", name.as_str()])
        .assert()
        .success()
        .stdout(format!("The username is {}.\n", name));

    run_svcs_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout(format!("The username is {}.\n", name));

    let stored = std::fs::read_to_string(repository_dir.path().join("vcs/config.txt"))?;
    assert_eq!(stored, name);

    Ok(())
}

#[rstest]
fn environment_overrides_stored_username(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["config", "stored"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["config"])
        .env("SVCS_AUTHOR_NAME", "from_env")
        .assert()
        .success()
        .stdout("The username is from_env.\n");

    Ok(())
}
