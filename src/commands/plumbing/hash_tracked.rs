use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use crate::artifacts::objects::commit_id::{CommitId, CommitIdHasher};

impl Repository {
    /// Identifier of the current content of every tracked file
    ///
    /// Reads the working files on every call, never a cached copy. An empty
    /// tracked set yields [`CommitId::empty`].
    pub fn compute_identifier(&self) -> Result<CommitId> {
        let _lock = self.lockfile().shared()?;

        let mut index = self.index();
        index.rehydrate()?;

        self.hash_tracked(&index)
    }

    pub(crate) fn hash_tracked(&self, index: &Index) -> Result<CommitId> {
        let mut hasher = CommitIdHasher::default();
        for entry in index.entries() {
            hasher.update(&self.workspace().read_file(entry)?);
        }

        Ok(hasher.finish())
    }
}
