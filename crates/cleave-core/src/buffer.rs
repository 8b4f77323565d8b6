//! Scratch storage for code point set operations.
//!
//! Set operations build their results in these vectors and then copy them
//! into exactly sized, immutable sets. The vectors keep their capacity between
//! calls, so a canonicalizer run over thousands of DFA states allocates only
//! for the sets it actually keeps.

use crate::charset::CodeRange;

/// Reusable range vectors for [`CodePointSet`](crate::CodePointSet) operations.
///
/// Owned by the caller and lent out as `&mut` for the duration of one
/// operation. One buffer per worker thread.
#[derive(Debug, Default)]
pub struct CompilationBuffer {
    intersection: Vec<CodeRange>,
    subtracted_a: Vec<CodeRange>,
    subtracted_b: Vec<CodeRange>,
}

impl CompilationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size every scratch vector to hold `ranges` entries.
    pub fn with_capacity(ranges: usize) -> Self {
        Self {
            intersection: Vec::with_capacity(ranges),
            subtracted_a: Vec::with_capacity(ranges),
            subtracted_b: Vec::with_capacity(ranges),
        }
    }

    /// Three cleared vectors for a three-way split:
    /// `(intersection, subtracted_a, subtracted_b)`.
    pub(crate) fn split_vecs(
        &mut self,
    ) -> (
        &mut Vec<CodeRange>,
        &mut Vec<CodeRange>,
        &mut Vec<CodeRange>,
    ) {
        self.intersection.clear();
        self.subtracted_a.clear();
        self.subtracted_b.clear();
        (
            &mut self.intersection,
            &mut self.subtracted_a,
            &mut self.subtracted_b,
        )
    }

    /// One cleared vector for single-result operations (union).
    pub(crate) fn single_vec(&mut self) -> &mut Vec<CodeRange> {
        self.intersection.clear();
        &mut self.intersection
    }

    /// Total retained capacity across the scratch vectors, in ranges.
    pub fn capacity(&self) -> usize {
        self.intersection.capacity() + self.subtracted_a.capacity() + self.subtracted_b.capacity()
    }
}
