//! DFA transition fragments: a guard paired with the NFA transitions it fires.

use cleave_core::CodePointSet;

use crate::transition_set::{TransitionId, TransitionSet};

/// A guard and the transition set it leads to.
///
/// Used for both the canonicalizer's input (one NFA transition each) and its
/// output (one DFA transition each). The guard is replaced, never mutated in
/// place, as the canonicalizer carves it up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionBuilder<S> {
    guard: CodePointSet,
    transitions: S,
}

impl<S: TransitionSet> TransitionBuilder<S> {
    pub fn new(guard: CodePointSet, transitions: S) -> Self {
        Self { guard, transitions }
    }

    /// Builder for a single NFA transition.
    pub fn single(id: TransitionId, guard: CodePointSet) -> Self {
        Self::new(guard, S::singleton(id))
    }

    /// A new builder over `guard` whose transitions are `self`'s followed by
    /// `other`'s. Neither input is modified.
    pub fn create_merged(&self, other: &Self, guard: CodePointSet) -> Self {
        Self::new(guard, self.transitions.merged(&other.transitions))
    }

    #[inline]
    pub fn guard(&self) -> &CodePointSet {
        &self.guard
    }

    #[inline]
    pub fn set_guard(&mut self, guard: CodePointSet) {
        self.guard = guard;
    }

    #[inline]
    pub fn transitions(&self) -> &S {
        &self.transitions
    }

    #[inline]
    pub fn transitions_mut(&mut self) -> &mut S {
        &mut self.transitions
    }

    pub fn into_parts(self) -> (CodePointSet, S) {
        (self.guard, self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition_set::NfaTransitionSet;

    fn id(n: u32) -> TransitionId {
        TransitionId::from_raw(n)
    }

    #[test]
    fn create_merged_orders_receiver_first() {
        let a = TransitionBuilder::<NfaTransitionSet>::single(id(2), CodePointSet::from_char('a'));
        let b = TransitionBuilder::single(id(1), CodePointSet::from_char('b'));

        let merged = a.create_merged(&b, CodePointSet::from_char('z'));

        assert_eq!(merged.transitions().iter().collect::<Vec<_>>(), vec![id(2), id(1)]);
        assert_eq!(merged.guard(), &CodePointSet::from_char('z'));
    }

    #[test]
    fn create_merged_leaves_inputs_untouched() {
        let a = TransitionBuilder::<NfaTransitionSet>::single(id(0), CodePointSet::from_char('a'));
        let b = TransitionBuilder::single(id(1), CodePointSet::from_char('b'));

        let _ = a.create_merged(&b, CodePointSet::full());

        assert_eq!(a.transitions().len(), 1);
        assert_eq!(b.transitions().len(), 1);
        assert_eq!(a.guard(), &CodePointSet::from_char('a'));
    }

    #[test]
    fn set_guard_rebinds() {
        let mut tb = TransitionBuilder::<NfaTransitionSet>::single(id(0), CodePointSet::full());
        tb.set_guard(CodePointSet::empty());
        assert!(tb.guard().matches_nothing());

        let (guard, transitions) = tb.into_parts();
        assert!(guard.matches_nothing());
        assert!(transitions.contains(id(0)));
    }
}
