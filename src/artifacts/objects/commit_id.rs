//! Commit identifier (SHA-1 of the tracked content)
//!
//! A commit identifier is derived from the content of every tracked file, in
//! tracked order. Each file contributes its length as 8 big-endian bytes
//! followed by its raw bytes, so two different tracked sets can only share an
//! identifier if their concatenated contents are byte-identical.
//!
//! ## Format
//!
//! - Full: 40 lowercase hex characters
//! - Short: first 7 characters
//!
//! ## Sentinel
//!
//! An empty tracked set hashes nothing and yields the SHA-1 of empty input.
//! The same value stands in for the head of an empty commit log, which makes
//! committing an empty tracked set a no-op.

use crate::artifacts::core::error::SvcsError;
use crate::artifacts::objects::COMMIT_ID_LENGTH;
use sha1::{Digest, Sha1};

/// SHA-1 of zero bytes
const EMPTY_COMMIT_ID: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// The identifier of an empty tracked set, also used as the head of an empty log
    pub fn empty() -> Self {
        Self(EMPTY_COMMIT_ID.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == EMPTY_COMMIT_ID
    }

    /// Parse and validate an identifier
    ///
    /// # Returns
    ///
    /// Validated CommitId or `InvalidCommitId` if the length or characters are wrong
    pub fn try_parse(id: &str) -> Result<Self, SvcsError> {
        if id.len() != COMMIT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SvcsError::InvalidCommitId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash a sequence of file contents, in order
    pub fn from_contents<I, C>(contents: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let mut hasher = CommitIdHasher::default();
        for content in contents {
            hasher.update(content.as_ref());
        }
        hasher.finish()
    }

    pub fn to_short_id(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incremental identifier computation, one tracked file at a time
#[derive(Default)]
pub struct CommitIdHasher {
    hasher: Sha1,
}

impl CommitIdHasher {
    pub fn update(&mut self, content: &[u8]) {
        self.hasher.update((content.len() as u64).to_be_bytes());
        self.hasher.update(content);
    }

    pub fn finish(self) -> CommitId {
        CommitId(format!("{:x}", self.hasher.finalize()))
    }
}
