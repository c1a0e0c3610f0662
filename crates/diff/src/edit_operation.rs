use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of block reported by a diff computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditKind {
    /// Target lines were added at a source position
    #[display(fmt = "Insert")]
    Insert,

    /// Source lines were removed
    #[display(fmt = "Delete")]
    Delete,

    /// Source lines were replaced by target lines
    #[display(fmt = "Replace")]
    Replace,
}

/// One insert, delete or replace block of a diff result
///
/// `source_start` indexes the original, unmodified source sequence. The line
/// payloads hold the literal block content on each side; a `None` payload
/// marks a malformed descriptor and makes annotation fail for its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditOperation {
    pub kind: EditKind,
    pub source_start: usize,
    pub source_lines: Option<Vec<String>>,
    pub target_start: usize,
    pub target_lines: Option<Vec<String>>,
}

impl EditOperation {
    /// Create an insert of `lines` before source position `source_start`
    pub fn insert(source_start: usize, target_start: usize, lines: Vec<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            source_start,
            source_lines: Some(Vec::new()),
            target_start,
            target_lines: Some(lines),
        }
    }

    /// Create a delete of `lines` starting at source position `source_start`
    pub fn delete(source_start: usize, target_start: usize, lines: Vec<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            source_start,
            source_lines: Some(lines),
            target_start,
            target_lines: Some(Vec::new()),
        }
    }

    /// Create a replace of `source_lines` with `target_lines`
    pub fn replace(
        source_start: usize,
        source_lines: Vec<String>,
        target_start: usize,
        target_lines: Vec<String>,
    ) -> Self {
        Self {
            kind: EditKind::Replace,
            source_start,
            source_lines: Some(source_lines),
            target_start,
            target_lines: Some(target_lines),
        }
    }

    /// Get the number of source lines in the block
    pub fn source_len(&self) -> usize {
        self.source_lines.as_ref().map_or(0, Vec::len)
    }

    /// Get the number of target lines in the block
    pub fn target_len(&self) -> usize {
        self.target_lines.as_ref().map_or(0, Vec::len)
    }

    /// Get the source positions covered by the block
    pub fn source_range(&self) -> std::ops::Range<usize> {
        self.source_start..self.source_start + self.source_len()
    }

    /// Check if both line payloads are present
    pub fn has_payload(&self) -> bool {
        self.source_lines.is_some() && self.target_lines.is_some()
    }
}

impl std::fmt::Display for EditOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{} -> {}:{}",
            self.kind,
            self.source_start,
            self.source_len(),
            self.target_start,
            self.target_len()
        )
    }
}
