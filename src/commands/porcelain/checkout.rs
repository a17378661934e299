use crate::areas::repository::Repository;
use crate::artifacts::core::error::SvcsError;
use std::io::Write;

impl Repository {
    pub fn checkout(&self, id: Option<&str>) -> anyhow::Result<()> {
        match self.restore_snapshot(id) {
            Ok(_) => writeln!(
                self.writer(),
                "Switched to commit {}.",
                id.unwrap_or_default().trim()
            )?,
            Err(SvcsError::MissingArgument(_)) => {
                writeln!(self.writer(), "Commit id was not passed.")?
            }
            Err(error) if error.is_not_found() => {
                writeln!(self.writer(), "Commit does not exist.")?
            }
            Err(error) => {
                return Err(anyhow::Error::from(error).context("Failed to checkout commit"));
            }
        }

        Ok(())
    }
}
