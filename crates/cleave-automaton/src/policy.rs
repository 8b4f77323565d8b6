//! Merge policies: when may two same-target DFA transitions become one?
//!
//! After disjointing, several result entries can lead to equal transition
//! sets. Unioning their guards shrinks the DFA, but only when the two
//! transitions are interchangeable for every symbol of the union. That is a
//! domain decision (look-around, anchors, capture bookkeeping), so it is
//! injected rather than fixed.

use crate::builder::TransitionBuilder;
use crate::transition_set::TransitionSet;

/// Decides whether `candidate` may be folded into `existing`.
///
/// Both builders carry equal transition sets when this is called. Accepting
/// means `existing`'s guard becomes the union of both guards and `candidate`
/// is dropped.
pub trait MergePolicy<S> {
    fn mergeable(
        &self,
        candidate: &TransitionBuilder<S>,
        existing: &TransitionBuilder<S>,
    ) -> bool;
}

impl<S, F> MergePolicy<S> for F
where
    F: Fn(&TransitionBuilder<S>, &TransitionBuilder<S>) -> bool,
{
    #[inline]
    fn mergeable(
        &self,
        candidate: &TransitionBuilder<S>,
        existing: &TransitionBuilder<S>,
    ) -> bool {
        self(candidate, existing)
    }
}

/// Every pair with equal targets merges. One result entry per distinct set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysMerge;

impl<S> MergePolicy<S> for AlwaysMerge {
    #[inline]
    fn mergeable(&self, _: &TransitionBuilder<S>, _: &TransitionBuilder<S>) -> bool {
        true
    }
}

/// Nothing merges. The result is the disjoint partition itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverMerge;

impl<S> MergePolicy<S> for NeverMerge {
    #[inline]
    fn mergeable(&self, _: &TransitionBuilder<S>, _: &TransitionBuilder<S>) -> bool {
        false
    }
}

/// Merge only guards that abut, so a merge never adds a range.
///
/// Useful when a downstream encoding pays per range rather than per entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContiguousOnly;

impl<S: TransitionSet> MergePolicy<S> for ContiguousOnly {
    fn mergeable(
        &self,
        candidate: &TransitionBuilder<S>,
        existing: &TransitionBuilder<S>,
    ) -> bool {
        candidate.guard().touches(existing.guard())
    }
}
