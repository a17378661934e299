use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn log(&self) -> anyhow::Result<()> {
        let log = {
            let _lock = self.lockfile().shared()?;
            self.commit_log().render()?
        };

        if log.trim().is_empty() {
            writeln!(self.writer(), "No commits yet.")?;
        } else {
            write!(self.writer(), "{}", log)?;
        }

        Ok(())
    }
}
