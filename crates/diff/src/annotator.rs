use derive_more::Display;
use log::{debug, trace};
use thiserror::Error;

use crate::annotated_row::{AnnotatedRow, RowCounts, RowStatus};
use crate::edit_operation::{EditKind, EditOperation};

/// The side of an edit operation whose line payload is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PayloadSide {
    #[display(fmt = "source")]
    Source,

    #[display(fmt = "target")]
    Target,
}

/// Why the rows for one comparison direction could not be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    #[error("diff computation failed: {kind} operation #{index} has no {side} lines")]
    MissingPayload {
        index: usize,
        kind: EditKind,
        side: PayloadSide,
    },

    #[error(
        "diff computation failed: {kind} operation #{index} covers source lines {start}..{end} \
         but the file has {len} lines"
    )]
    OutOfRange {
        index: usize,
        kind: EditKind,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error(
        "diff computation failed: {kind} operation #{index} starts at source line {start} \
         inside the previous block ending at {previous_end}"
    )]
    Overlapping {
        index: usize,
        kind: EditKind,
        start: usize,
        previous_end: usize,
    },
}

/// An edit operation whose payloads and bounds have been checked
struct Block<'a> {
    kind: EditKind,
    position: usize,
    source: &'a [String],
    target: &'a [String],
}

/// Annotate every line of `original` with its change status
///
/// The result holds one row per original line, each Unchanged unless an edit
/// rewrote it to Changed or Deleted, plus one Inserted row per target line
/// that has no source counterpart, spliced in at its source position.
///
/// Edits are applied from the highest source position down, so lines spliced
/// in for one block never shift the positions still needed by blocks before
/// it. A replace of unequal size is shown as a Changed prefix aligned from the
/// start of the block, followed by the excess lines as Deleted (source longer)
/// or Inserted (target longer).
pub fn annotate(
    original: &[String],
    edits: &[EditOperation],
) -> Result<Vec<AnnotatedRow>, AnnotateError> {
    let blocks = validate(original.len(), edits)?;

    let mut rows: Vec<AnnotatedRow> = original
        .iter()
        .map(|line| AnnotatedRow::unchanged(line.as_str()))
        .collect();

    for block in blocks.iter().rev() {
        trace!(
            "Applying {} at {} ({} -> {} lines)",
            block.kind,
            block.position,
            block.source.len(),
            block.target.len()
        );

        match block.kind {
            EditKind::Delete => {
                mark(&mut rows, block.position, 0..block.source.len(), RowStatus::Deleted)
            }
            EditKind::Insert => splice(&mut rows, block.position, block.target, 0),
            EditKind::Replace => apply_replace(&mut rows, block),
        }
    }

    debug!(
        "Annotated {} lines with {} edits: {}",
        original.len(),
        edits.len(),
        RowCounts::of(&rows)
    );

    Ok(rows)
}

/// Check every operation and return them ordered by source position
fn validate(len: usize, edits: &[EditOperation]) -> Result<Vec<Block<'_>>, AnnotateError> {
    let mut blocks = Vec::with_capacity(edits.len());

    for (index, edit) in edits.iter().enumerate() {
        let source = edit.source_lines.as_deref().ok_or(AnnotateError::MissingPayload {
            index,
            kind: edit.kind,
            side: PayloadSide::Source,
        })?;
        let target = edit.target_lines.as_deref().ok_or(AnnotateError::MissingPayload {
            index,
            kind: edit.kind,
            side: PayloadSide::Target,
        })?;

        // Insert blocks take no room on the source side
        let covered = match edit.kind {
            EditKind::Insert => 0,
            EditKind::Delete | EditKind::Replace => source.len(),
        };
        let end = edit.source_start.saturating_add(covered);
        if end > len {
            return Err(AnnotateError::OutOfRange {
                index,
                kind: edit.kind,
                start: edit.source_start,
                end,
                len,
            });
        }

        blocks.push((
            index,
            Block {
                kind: edit.kind,
                position: edit.source_start,
                source,
                target,
            },
        ));
    }

    // An insert sharing its position with another block goes before it
    blocks.sort_by_key(|(_, block)| (block.position, block.kind != EditKind::Insert));

    let mut previous_end = 0;
    for (index, block) in &blocks {
        if block.position < previous_end {
            return Err(AnnotateError::Overlapping {
                index: *index,
                kind: block.kind,
                start: block.position,
                previous_end,
            });
        }
        if block.kind != EditKind::Insert {
            previous_end = block.position + block.source.len();
        }
    }

    Ok(blocks.into_iter().map(|(_, block)| block).collect())
}

/// Apply the uneven-block rule for a replace
fn apply_replace(rows: &mut Vec<AnnotatedRow>, block: &Block<'_>) {
    let source_len = block.source.len();
    let target_len = block.target.len();
    let shared = source_len.min(target_len);

    mark(rows, block.position, 0..shared, RowStatus::Changed);

    if source_len > target_len {
        mark(rows, block.position, shared..source_len, RowStatus::Deleted);
    } else if target_len > source_len {
        splice(rows, block.position, block.target, shared);
    }
}

/// Overwrite the status of rows `position + offset` for each offset
fn mark(
    rows: &mut [AnnotatedRow],
    position: usize,
    offsets: std::ops::Range<usize>,
    status: RowStatus,
) {
    for offset in offsets {
        rows[position + offset].status = status;
    }
}

/// Insert `lines[from..]` as new rows, `lines[i]` landing at `position + i`
fn splice(rows: &mut Vec<AnnotatedRow>, position: usize, lines: &[String], from: usize) {
    for (offset, line) in lines.iter().enumerate().skip(from) {
        rows.insert(position + offset, AnnotatedRow::inserted(line.as_str()));
    }
}
