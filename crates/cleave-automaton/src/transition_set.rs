//! Sets of NFA transitions: where a DFA transition actually goes.
//!
//! A transition set is insertion-ordered. The order is data, not a detail:
//! it records match priority, because the canonicalizer appends lower-priority
//! transitions after higher-priority ones. Nothing may reorder a set, and
//! `add_all` deduplicates by membership only.
//!
//! Two flavors differ only in what "equal" means:
//! - [`NfaTransitionSet`]: same members, in any order.
//! - [`PrioritySensitiveTransitionSet`]: same members in the same order.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

/// Identifier of one NFA transition.
///
/// Opaque to the canonicalizer; only equality and hashing matter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TransitionId(u32);

impl TransitionId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered set of NFA transitions with a caller-chosen notion of equality.
///
/// `Eq` and `Hash` must agree: the canonicalizer buckets result entries by
/// these impls. Implementations whose equality ignores order must also hash
/// order-independently.
pub trait TransitionSet: Clone + Eq + Hash + fmt::Debug {
    /// A set holding exactly `id`.
    fn singleton(id: TransitionId) -> Self;

    /// Append `id` unless already present. Returns whether it was added.
    fn insert(&mut self, id: TransitionId) -> bool;

    /// Members in priority order.
    fn iter(&self) -> impl Iterator<Item = TransitionId> + '_;

    fn len(&self) -> usize;

    fn contains(&self, id: TransitionId) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `other`'s members not yet present, in `other`'s order.
    fn add_all(&mut self, other: &Self) {
        for id in other.iter() {
            self.insert(id);
        }
    }

    /// `self` followed by the new members of `other`. Neither input changes.
    fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.add_all(other);
        merged
    }
}

/// Spreads ids over the hash space before summing.
#[inline]
fn mix(id: TransitionId) -> u64 {
    (id.0 as u64 ^ 0x5851_F42D_4C95_7F2D)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .rotate_left(29)
}

/// Transition set compared as a plain set.
///
/// Keeps a commutative running hash of its members so equal sets hash equally
/// regardless of insertion order, without sorting on every lookup.
#[derive(Clone, Default)]
pub struct NfaTransitionSet {
    ids: IndexSet<TransitionId>,
    members_hash: u64,
}

impl NfaTransitionSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionSet for NfaTransitionSet {
    fn singleton(id: TransitionId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    fn insert(&mut self, id: TransitionId) -> bool {
        let added = self.ids.insert(id);
        if added {
            self.members_hash = self.members_hash.wrapping_add(mix(id));
        }
        added
    }

    fn iter(&self) -> impl Iterator<Item = TransitionId> + '_ {
        self.ids.iter().copied()
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn contains(&self, id: TransitionId) -> bool {
        self.ids.contains(&id)
    }
}

impl PartialEq for NfaTransitionSet {
    fn eq(&self, other: &Self) -> bool {
        self.members_hash == other.members_hash
            && self.ids.len() == other.ids.len()
            && self.ids.iter().all(|id| other.ids.contains(id))
    }
}

impl Eq for NfaTransitionSet {}

impl Hash for NfaTransitionSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.ids.len());
        state.write_u64(self.members_hash);
    }
}

impl fmt::Debug for NfaTransitionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ids.iter()).finish()
    }
}

impl FromIterator<TransitionId> for NfaTransitionSet {
    fn from_iter<T: IntoIterator<Item = TransitionId>>(iter: T) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Transition set compared as a sequence.
///
/// Two DFA transitions reaching the same NFA transitions with different
/// priorities lead to different DFA states, so they must never share a
/// bucket during target coalescing.
#[derive(Clone, Default)]
pub struct PrioritySensitiveTransitionSet {
    ids: IndexSet<TransitionId>,
}

impl PrioritySensitiveTransitionSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionSet for PrioritySensitiveTransitionSet {
    fn singleton(id: TransitionId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    fn insert(&mut self, id: TransitionId) -> bool {
        self.ids.insert(id)
    }

    fn iter(&self) -> impl Iterator<Item = TransitionId> + '_ {
        self.ids.iter().copied()
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn contains(&self, id: TransitionId) -> bool {
        self.ids.contains(&id)
    }
}

impl PartialEq for PrioritySensitiveTransitionSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids.iter().eq(other.ids.iter())
    }
}

impl Eq for PrioritySensitiveTransitionSet {}

impl Hash for PrioritySensitiveTransitionSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.ids.len());
        for id in &self.ids {
            id.hash(state);
        }
    }
}

impl fmt::Debug for PrioritySensitiveTransitionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids.iter()).finish()
    }
}

impl FromIterator<TransitionId> for PrioritySensitiveTransitionSet {
    fn from_iter<T: IntoIterator<Item = TransitionId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
