#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! DFA transition canonicalization for powerset construction.
//!
//! From one DFA state, the NFA transitions of all member states are collected
//! in priority order. [`Canonicalizer`] turns that list into DFA transitions
//! with disjoint guards, each pointing at the set of NFA transitions it fires.
//!
//! - [`TransitionSet`]: ordered NFA transition ids; order is match priority.
//! - [`TransitionBuilder`]: guard plus transition set.
//! - [`MergePolicy`]: whether two same-target entries may share one guard.
//! - [`input`]/[`dump`]: JSON transition lists in, text or JSON out.

pub mod builder;
pub mod canonicalize;
pub mod dump;
pub mod input;
pub mod policy;
pub mod trace;
pub mod transition_set;

mod verify;


pub use builder::TransitionBuilder;
pub use canonicalize::Canonicalizer;
pub use dump::{dump, dump_json};
pub use input::{InputError, TransitionList, TransitionNames};
pub use policy::{AlwaysMerge, ContiguousOnly, MergePolicy, NeverMerge};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use transition_set::{
    NfaTransitionSet, PrioritySensitiveTransitionSet, TransitionId, TransitionSet,
};
