//! Debug-only structural checks on canonicalizer output.
//!
//! Zero-cost in release builds.

use crate::builder::TransitionBuilder;
use crate::transition_set::TransitionSet;

/// Panics if any guard is empty or any two guards overlap.
#[cfg(debug_assertions)]
pub fn debug_verify_disjoint<S: TransitionSet>(entries: &[TransitionBuilder<S>], stage: &str) {
    for (i, a) in entries.iter().enumerate() {
        if a.guard().matches_nothing() {
            panic!("{stage}: entry {i} has an empty guard");
        }
        for (j, b) in entries.iter().enumerate().skip(i + 1) {
            if a.guard().intersects(b.guard()) {
                panic!(
                    "{stage}: entries {i} and {j} overlap: {} vs {}",
                    a.guard(),
                    b.guard()
                );
            }
        }
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn debug_verify_disjoint<S: TransitionSet>(_entries: &[TransitionBuilder<S>], _stage: &str) {}
