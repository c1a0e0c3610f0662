// Core row annotation library for difftable
// This crate turns two line sequences and their edit operations into
// display-ready annotated rows for both comparison directions

mod annotated_row;
mod annotator;
mod comparator;
mod edit_operation;
mod line_sequence;
mod text_diff;

pub use annotated_row::{AnnotatedRow, RowCounts, RowStatus};
pub use annotator::{annotate, AnnotateError, PayloadSide};
pub use comparator::{compare, Comparator, DirectionView, DualView};
pub use edit_operation::{EditKind, EditOperation};
pub use line_sequence::LineSequence;
pub use text_diff::{DiffAlgorithm, LineDiffer, SimilarDiffer, UnknownAlgorithm};
