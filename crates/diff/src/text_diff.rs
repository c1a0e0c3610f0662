use std::str::FromStr;
use std::time::{Duration, Instant};

use derive_more::Display;
use similar::{Algorithm, DiffTag};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_operation::{EditKind, EditOperation};
use crate::line_sequence::LineSequence;

/// Computes the edit operations that turn one line sequence into another
///
/// Implementations must return operations that do not overlap on the source
/// side, in ascending source order, with both line payloads present.
pub trait LineDiffer: Send + Sync {
    fn diff(&self, source: &LineSequence, target: &LineSequence) -> Vec<EditOperation>;
}

/// The diff algorithm used by [`SimilarDiffer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffAlgorithm {
    #[default]
    #[display(fmt = "myers")]
    Myers,

    #[display(fmt = "patience")]
    Patience,

    #[display(fmt = "lcs")]
    Lcs,
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diff algorithm `{0}` (expected myers, patience or lcs)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for DiffAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            "lcs" => Ok(Self::Lcs),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Line differ backed by the `similar` crate
#[derive(Debug, Clone, Default)]
pub struct SimilarDiffer {
    algorithm: DiffAlgorithm,
    timeout: Option<Duration>,
}

impl SimilarDiffer {
    /// Create a differ using the given algorithm and no timeout
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self {
            algorithm,
            timeout: None,
        }
    }

    /// Give up on finding a minimal diff after `timeout`
    ///
    /// The result is still a valid diff, just not necessarily the smallest.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured algorithm
    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }
}

impl LineDiffer for SimilarDiffer {
    fn diff(&self, source: &LineSequence, target: &LineSequence) -> Vec<EditOperation> {
        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        let ops = similar::capture_diff_slices_deadline(
            self.algorithm.into(),
            source.as_slice(),
            target.as_slice(),
            deadline,
        );

        ops.iter()
            .filter_map(|op| {
                let (tag, old_range, new_range) = op.as_tag_tuple();
                let kind = match tag {
                    DiffTag::Equal => return None,
                    DiffTag::Delete => EditKind::Delete,
                    DiffTag::Insert => EditKind::Insert,
                    DiffTag::Replace => EditKind::Replace,
                };

                Some(EditOperation {
                    kind,
                    source_start: old_range.start,
                    source_lines: Some(source[old_range].to_vec()),
                    target_start: new_range.start,
                    target_lines: Some(target[new_range].to_vec()),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> LineSequence {
        items.iter().copied().collect()
    }

    #[test]
    fn test_identical_has_no_edits() {
        let lines = seq(&["A", "B", "C"]);
        assert!(SimilarDiffer::default().diff(&lines, &lines).is_empty());
    }

    #[test]
    fn test_replace_then_insert() {
        let source = seq(&["A", "B", "C", "D"]);
        let target = seq(&["A", "X", "D", "E", "F"]);

        let edits = SimilarDiffer::default().diff(&source, &target);

        // B and C are covered on the source side, A and D are kept
        let covered: Vec<usize> = edits.iter().flat_map(|edit| edit.source_range()).collect();
        assert_eq!(covered, vec![1, 2]);
        assert_eq!(edits[0].kind, EditKind::Replace);
        assert!(edits.iter().all(EditOperation::has_payload));

        assert_eq!(
            edits.last(),
            Some(&EditOperation::insert(4, 3, vec!["E".into(), "F".into()]))
        );
    }

    #[test]
    fn test_edits_are_ascending() {
        let source = seq(&["a", "b", "c", "d", "e", "f"]);
        let target = seq(&["a", "x", "c", "e", "y", "f", "z"]);

        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let edits = SimilarDiffer::new(algorithm).diff(&source, &target);
            assert!(!edits.is_empty());
            assert!(edits
                .windows(2)
                .all(|pair| pair[0].source_range().end <= pair[1].source_start));
        }
    }

    #[test]
    fn test_zero_timeout_still_valid() {
        let source = seq(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let target = seq(&["a", "x", "c", "e", "y", "f", "h", "z"]);

        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            // The deadline has passed before diffing starts
            let differ = SimilarDiffer::new(algorithm).with_timeout(Some(Duration::ZERO));
            let edits = differ.diff(&source, &target);

            assert!(!edits.is_empty());
            assert!(edits.iter().all(EditOperation::has_payload));
            assert!(edits
                .windows(2)
                .all(|pair| pair[0].source_range().end <= pair[1].source_start));
            for edit in &edits {
                assert_eq!(
                    edit.source_lines.as_deref(),
                    Some(&source[edit.source_range()])
                );
            }

            let rows = crate::annotate(&source, &edits).unwrap();
            let kept = rows
                .iter()
                .filter(|row| row.status != crate::RowStatus::Inserted)
                .count();
            assert_eq!(kept, source.len());
        }
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Patience".parse(), Ok(DiffAlgorithm::Patience));
        assert_eq!("lcs".parse(), Ok(DiffAlgorithm::Lcs));
        assert!("histogram".parse::<DiffAlgorithm>().is_err());
        assert_eq!(DiffAlgorithm::default().to_string(), "myers");
    }
}
