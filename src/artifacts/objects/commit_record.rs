//! Commit metadata as stored in the commit log
//!
//! ## Format
//!
//! ```text
//! commit <id>
//! Author: <author>
//! <message>
//! ```
//!
//! Blocks are separated by one blank line, newest block first. A block header
//! is a `commit <id>` line holding a valid id and followed by an `Author:`
//! line, found at the start of the log or right after a blank line.

use crate::artifacts::core::error::SvcsError;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

const COMMIT_PREFIX: &str = "commit ";
const AUTHOR_PREFIX: &str = "Author:";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    id: CommitId,
    author: String,
    message: String,
}

impl CommitRecord {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the record as a log block, including its trailing newline
    pub fn render(&self) -> String {
        format!(
            "{}{}\n{} {}\n{}\n",
            COMMIT_PREFIX, self.id, AUTHOR_PREFIX, self.author, self.message
        )
    }

    /// Identifier in the first block header of a log body, `None` for an empty log
    ///
    /// Only the header line is read, so message text never affects the result.
    pub fn parse_head(text: &str) -> Result<Option<CommitId>, SvcsError> {
        let lines = text.lines().collect::<Vec<_>>();
        let cursor = skip_blank_lines(&lines, 0);

        lines
            .get(cursor)
            .map(|line| parse_header(line, cursor))
            .transpose()
    }

    /// Parse a whole log body into records, preserving the stored order
    pub fn parse_all(text: &str) -> Result<Vec<CommitRecord>, SvcsError> {
        let lines = text.lines().collect::<Vec<_>>();
        let mut records = Vec::new();
        let mut cursor = skip_blank_lines(&lines, 0);

        while cursor < lines.len() {
            let id = parse_header(lines[cursor], cursor)?;
            cursor += 1;

            let author = lines
                .get(cursor)
                .and_then(|line| line.strip_prefix(AUTHOR_PREFIX))
                .map(|author| author.strip_prefix(' ').unwrap_or(author).to_string())
                .ok_or_else(|| SvcsError::InvalidLog {
                    line: cursor + 1,
                    reason: "expected an Author line".to_string(),
                })?;
            cursor += 1;

            let message_start = cursor;
            while cursor < lines.len() && !ends_block(&lines, cursor) {
                cursor += 1;
            }
            let message = lines[message_start..cursor].join("\n");

            records.push(CommitRecord::new(id, author, message.trim_end().to_string()));
            cursor = skip_blank_lines(&lines, cursor);
        }

        Ok(records)
    }
}

fn parse_header(line: &str, index: usize) -> Result<CommitId, SvcsError> {
    let raw_id = line
        .strip_prefix(COMMIT_PREFIX)
        .ok_or_else(|| SvcsError::InvalidLog {
            line: index + 1,
            reason: format!("expected a commit header, found {:?}", line),
        })?;

    CommitId::try_parse(raw_id.trim()).map_err(|_| SvcsError::InvalidLog {
        line: index + 1,
        reason: format!("invalid commit id {:?}", raw_id),
    })
}

// A blank line closes a block only when it is followed by another header or by the end of the log
fn ends_block(lines: &[&str], index: usize) -> bool {
    if !lines[index].trim().is_empty() {
        return false;
    }

    let next = skip_blank_lines(lines, index);
    next >= lines.len() || is_header(lines, next)
}

fn is_header(lines: &[&str], index: usize) -> bool {
    let valid_id = lines[index]
        .strip_prefix(COMMIT_PREFIX)
        .is_some_and(|raw_id| CommitId::try_parse(raw_id.trim()).is_ok());

    valid_id
        && lines
            .get(index + 1)
            .is_some_and(|line| line.starts_with(AUTHOR_PREFIX))
}

fn skip_blank_lines(lines: &[&str], mut index: usize) -> usize {
    while index < lines.len() && lines[index].trim().is_empty() {
        index += 1;
    }
    index
}
