use log::{debug, warn};

use crate::annotated_row::AnnotatedRow;
use crate::annotator::{annotate, AnnotateError};
use crate::line_sequence::LineSequence;
use crate::text_diff::{LineDiffer, SimilarDiffer};

/// The annotated rows for one comparison direction, or why they are missing
pub type DirectionView = Result<Vec<AnnotatedRow>, AnnotateError>;

/// Both annotated views of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualView {
    /// The original file annotated against the revised file
    pub original: DirectionView,

    /// The revised file annotated against the original file
    pub revised: DirectionView,
}

impl DualView {
    /// Split into `(view of original, view of revised)`
    pub fn into_pair(self) -> (DirectionView, DirectionView) {
        (self.original, self.revised)
    }

    /// Check if both directions were annotated
    pub fn is_complete(&self) -> bool {
        self.original.is_ok() && self.revised.is_ok()
    }
}

/// Runs the row annotator in both comparison directions
pub struct Comparator<D = SimilarDiffer> {
    differ: D,
    parallel: bool,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(SimilarDiffer::default())
    }
}

impl<D: LineDiffer> Comparator<D> {
    /// Create a comparator using the given differ
    pub fn new(differ: D) -> Self {
        Self {
            differ,
            parallel: true,
        }
    }

    /// Choose whether the two directions run in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get the differ
    pub fn differ(&self) -> &D {
        &self.differ
    }

    /// Compare `a` against `b` and `b` against `a`
    ///
    /// The diff is recomputed with the roles swapped rather than inverted, as
    /// block boundaries need not match between the two directions.
    pub fn compare(&self, a: &LineSequence, b: &LineSequence) -> DualView {
        let (original, revised) = if self.parallel {
            rayon::join(|| self.view(a, b), || self.view(b, a))
        } else {
            (self.view(a, b), self.view(b, a))
        };

        DualView { original, revised }
    }

    /// Annotate `source` with the edits that turn it into `target`
    fn view(&self, source: &LineSequence, target: &LineSequence) -> DirectionView {
        let edits = self.differ.diff(source, target);
        debug!(
            "Diff of {} against {} lines produced {} edits",
            source.len(),
            target.len(),
            edits.len()
        );

        annotate(source, &edits).inspect_err(|err| warn!("{}", err))
    }
}

/// Compare two line sequences with the default differ
pub fn compare(a: &LineSequence, b: &LineSequence) -> DualView {
    Comparator::default().compare(a, b)
}
