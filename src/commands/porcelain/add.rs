use crate::areas::repository::Repository;
use crate::artifacts::core::error::SvcsError;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn add(&self, path: Option<&str>) -> anyhow::Result<()> {
        let Some(path) = path else {
            return self.list_tracked();
        };

        match self.track_file(Path::new(path)) {
            Ok(_) => writeln!(self.writer(), "The file '{}' is tracked.", path)?,
            Err(SvcsError::PathNotFound(_)) => writeln!(self.writer(), "Can't find '{}'.", path)?,
            Err(SvcsError::NotAFile(_)) => writeln!(self.writer(), "'{}' is not a file.", path)?,
            Err(SvcsError::OutsideWorkspace(_)) => {
                writeln!(self.writer(), "'{}' is outside the repository.", path)?
            }
            Err(SvcsError::InvalidPath(_)) => {
                writeln!(self.writer(), "{:?} is not a valid file name.", path)?
            }
            Err(error) => {
                return Err(anyhow::Error::from(error).context(format!("Failed to add {}", path)));
            }
        }

        Ok(())
    }

    fn list_tracked(&self) -> anyhow::Result<()> {
        let tracked = self.tracked_files()?;

        if tracked.is_empty() {
            writeln!(self.writer(), "Add a file to the index.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Tracked files:")?;
        for path in tracked {
            writeln!(self.writer(), "{}", path.display())?;
        }

        Ok(())
    }
}
