use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn configure(&self, name: Option<&str>) -> anyhow::Result<()> {
        let name = match name {
            Some(name) => {
                let _lock = self.lockfile().exclusive()?;
                self.config().set_author(name)?;
                self.config().stored_author()?
            }
            None => self.config().author()?,
        };

        if name.is_empty() {
            writeln!(self.writer(), "Please, tell me who you are.")?;
        } else {
            writeln!(self.writer(), "The username is {}.", name)?;
        }

        Ok(())
    }
}
