//! Commit log
//!
//! The log is an ordered sequence of commit records, newest first. New records
//! are prepended, so the stored file is already in display order and its
//! first block always describes the most recent snapshot.
//!
//! ## File Format
//!
//! `vcs/log.txt` holds rendered [`CommitRecord`] blocks, each followed by a
//! blank line.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::core::error::Result;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::commit_record::CommitRecord;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct CommitLog {
    /// Path to the log file (typically `vcs/log.txt`)
    path: Box<Path>,
}

impl CommitLog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier of the most recent commit, or the empty sentinel for an empty log
    pub fn head(&self) -> Result<CommitId> {
        Ok(CommitRecord::parse_head(&self.render()?)?.unwrap_or_else(CommitId::empty))
    }

    /// Insert a record at the head of the log
    pub fn prepend(&self, record: &CommitRecord) -> Result<()> {
        let existing = self.render()?;
        let content = format!("{}\n{}", record.render(), existing);

        write_atomically(&self.path, content.as_bytes())?;
        tracing::info!(
            commit = %record.id().to_short_id(),
            "prepended commit to the log"
        );

        Ok(())
    }

    /// The full log body, newest block first; empty when nothing was committed yet
    pub fn render(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        Ok(std::fs::read_to_string(&self.path)?)
    }

    pub fn records(&self) -> Result<Vec<CommitRecord>> {
        CommitRecord::parse_all(&self.render()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.render()?.trim().is_empty())
    }
}
