use crate::areas::repository::Repository;
use crate::artifacts::core::error::SvcsError;
use crate::commands::plumbing::write_commit::CommitOutcome;
use std::io::Write;

impl Repository {
    pub fn commit(&self, message: Option<&str>) -> anyhow::Result<()> {
        match self.write_commit(message) {
            Ok(CommitOutcome::Created(_)) => writeln!(self.writer(), "Changes are committed.")?,
            Ok(CommitOutcome::Unchanged(_)) => writeln!(self.writer(), "Nothing to commit.")?,
            Err(SvcsError::MissingArgument(_)) => {
                writeln!(self.writer(), "Message was not passed.")?
            }
            Err(error) => {
                return Err(anyhow::Error::from(error).context("Failed to commit changes"));
            }
        }

        Ok(())
    }
}
