use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RequiredArgument, Result, SvcsError};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::commit_record::CommitRecord;

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The tracked content matches the log head; nothing was written
    Unchanged(CommitId),
    /// A snapshot was published and its record prepended to the log
    Created(CommitRecord),
}

impl Repository {
    /// Snapshot the tracked files and record the commit, unless nothing changed
    ///
    /// The message is not part of the identifier: committing unchanged content
    /// twice is a no-op whatever the message. Returning to an earlier committed
    /// state reuses that snapshot and records a new log entry. Fails with
    /// `MissingArgument` when no (or a blank) message is given, and with
    /// `Conflict` when an existing snapshot under the same id holds other files.
    pub fn write_commit(&self, message: Option<&str>) -> Result<CommitOutcome> {
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .ok_or(SvcsError::MissingArgument(RequiredArgument::Message))?;

        let _lock = self.lockfile().exclusive()?;

        let mut index = self.index();
        index.rehydrate()?;

        let commit_id = self.hash_tracked(&index)?;
        if commit_id == self.commit_log().head()? {
            tracing::debug!(commit = %commit_id.to_short_id(), "tracked content unchanged");
            return Ok(CommitOutcome::Unchanged(commit_id));
        }

        let author = self.config().author()?;
        if author.is_empty() {
            tracing::warn!("no author configured, recording a blank author");
        }

        if !self.snapshots().contains(&commit_id) {
            self.snapshots()
                .save(&commit_id, self.workspace(), index.entries())?;
        } else if self
            .snapshots()
            .holds(&commit_id, self.workspace(), index.entries())?
        {
            tracing::debug!(commit = %commit_id.to_short_id(), "reusing existing snapshot");
        } else {
            return Err(SvcsError::Conflict(commit_id));
        }

        let record = CommitRecord::new(commit_id, author, message.to_string());
        self.commit_log().prepend(&record)?;

        Ok(CommitOutcome::Created(record))
    }
}
