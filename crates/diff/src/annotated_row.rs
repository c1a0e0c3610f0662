use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the change status of a single display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowStatus {
    /// The line is identical in both files
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// The line has a counterpart in the other file but its content differs
    #[display(fmt = "Changed")]
    Changed,

    /// The line has no counterpart in the other file
    #[display(fmt = "Deleted")]
    Deleted,

    /// The line only exists in the other file and was spliced into this view
    #[display(fmt = "Inserted")]
    Inserted,
}

/// One display line paired with its change status
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedRow {
    /// The text of the line
    pub text: String,

    /// The change status of the line
    pub status: RowStatus,
}

impl AnnotatedRow {
    /// Create a new annotated row
    pub fn new(text: impl Into<String>, status: RowStatus) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    /// Create an unchanged row
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(text, RowStatus::Unchanged)
    }

    /// Create an inserted row
    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(text, RowStatus::Inserted)
    }

    /// Check if this row differs from the other file
    pub fn has_changes(&self) -> bool {
        self.status != RowStatus::Unchanged
    }
}

/// Per-status row counts for one annotated view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowCounts {
    pub unchanged: usize,
    pub changed: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl RowCounts {
    /// Count the rows of each status
    pub fn of(rows: &[AnnotatedRow]) -> Self {
        rows.iter().fold(Self::default(), |mut counts, row| {
            match row.status {
                RowStatus::Unchanged => counts.unchanged += 1,
                RowStatus::Changed => counts.changed += 1,
                RowStatus::Deleted => counts.deleted += 1,
                RowStatus::Inserted => counts.inserted += 1,
            }
            counts
        })
    }

    /// Get the total number of rows
    pub fn total(&self) -> usize {
        self.unchanged + self.changed + self.deleted + self.inserted
    }

    /// Check if any row differs from the other file
    pub fn has_changes(&self) -> bool {
        self.total() != self.unchanged
    }
}

impl std::fmt::Display for RowCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows ({} unchanged, {} changed, {} deleted, {} inserted)",
            self.total(),
            self.unchanged,
            self.changed,
            self.deleted,
            self.inserted
        )
    }
}
