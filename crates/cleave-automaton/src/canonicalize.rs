//! Canonicalization of one DFA state's outgoing transitions.
//!
//! Input: NFA transitions in priority order, each with a guard. Guards may
//! overlap. Output: DFA transitions with pairwise disjoint guards, each
//! carrying the NFA transitions it fires in priority order.
//!
//! Two phases:
//! 1. Disjointing. Each input is split against every entry placed so far.
//!    Overlaps become new entries whose transition set lists the earlier
//!    entry's transitions first.
//! 2. Coalescing. Entries with equal transition sets are bucketed, and the
//!    merge policy decides which of them collapse into one guard.
//!
//! A `Canonicalizer` keeps its working list and bucket index between runs so
//! their storage is reused. Both are empty whenever `run` returns.

use cleave_core::CompilationBuffer;
use indexmap::IndexMap;

use crate::builder::TransitionBuilder;
use crate::policy::MergePolicy;
use crate::trace::{NoopTracer, Phase, Tracer};
use crate::transition_set::TransitionSet;
use crate::verify::debug_verify_disjoint;

pub struct Canonicalizer<S, P> {
    /// Phase 1 output, phase 2 input.
    disjoint: Vec<TransitionBuilder<S>>,
    /// Phase 2 buckets. Each chain is oldest first; lookups walk it newest first.
    same_targets: IndexMap<S, Vec<TransitionBuilder<S>>>,
    policy: P,
}

impl<S: TransitionSet, P: MergePolicy<S> + Default> Default for Canonicalizer<S, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<S: TransitionSet, P: MergePolicy<S>> Canonicalizer<S, P> {
    pub fn new(policy: P) -> Self {
        Self {
            disjoint: Vec::new(),
            same_targets: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Canonicalize `transitions`, given in priority order.
    pub fn run(
        &mut self,
        transitions: impl IntoIterator<Item = TransitionBuilder<S>>,
        buf: &mut CompilationBuffer,
    ) -> Vec<TransitionBuilder<S>> {
        self.run_traced(transitions, buf, &mut NoopTracer)
    }

    /// [`run`](Self::run) with instrumentation.
    pub fn run_traced<T: Tracer>(
        &mut self,
        transitions: impl IntoIterator<Item = TransitionBuilder<S>>,
        buf: &mut CompilationBuffer,
        tracer: &mut T,
    ) -> Vec<TransitionBuilder<S>> {
        self.make_disjoint(transitions, buf, tracer);
        debug_verify_disjoint(&self.disjoint, "disjoint phase");

        let result = self.coalesce(buf, tracer);
        debug_verify_disjoint(&result, "coalesce phase");
        tracer.trace_result(result.len());
        result
    }

    /// Phase 1 alone: the disjoint partition before any coalescing.
    pub fn disjoint(
        &mut self,
        transitions: impl IntoIterator<Item = TransitionBuilder<S>>,
        buf: &mut CompilationBuffer,
    ) -> Vec<TransitionBuilder<S>> {
        self.disjoint_traced(transitions, buf, &mut NoopTracer)
    }

    /// [`disjoint`](Self::disjoint) with instrumentation.
    pub fn disjoint_traced<T: Tracer>(
        &mut self,
        transitions: impl IntoIterator<Item = TransitionBuilder<S>>,
        buf: &mut CompilationBuffer,
        tracer: &mut T,
    ) -> Vec<TransitionBuilder<S>> {
        self.make_disjoint(transitions, buf, tracer);
        debug_verify_disjoint(&self.disjoint, "disjoint phase");
        tracer.trace_result(self.disjoint.len());
        self.disjoint.drain(..).collect()
    }

    fn make_disjoint<T: Tracer>(
        &mut self,
        transitions: impl IntoIterator<Item = TransitionBuilder<S>>,
        buf: &mut CompilationBuffer,
        tracer: &mut T,
    ) {
        tracer.trace_phase(Phase::Disjoint);

        for (index, mut e) in transitions.into_iter().enumerate() {
            tracer.trace_input(index, &e);
            if e.guard().matches_nothing() {
                tracer.trace_skip(&e);
                continue;
            }

            // Entries appended below are scanned too. They lie inside the part
            // of `e` already carved off, so they never intersect it again.
            let mut i = 0;
            while i < self.disjoint.len() {
                let r = &mut self.disjoint[i];
                let split = r.guard().intersect_and_subtract(e.guard(), buf);
                if split.intersection.matches_nothing() {
                    i += 1;
                    continue;
                }

                if split.subtracted_a.matches_nothing() {
                    r.transitions_mut().add_all(e.transitions());
                    tracer.trace_absorb(i, r);
                } else {
                    r.set_guard(split.subtracted_a);
                    let merged = r.create_merged(&e, split.intersection);
                    tracer.trace_split(i, r);
                    tracer.trace_append(self.disjoint.len(), &merged);
                    self.disjoint.push(merged);
                }

                e.set_guard(split.subtracted_b);
                if e.guard().matches_nothing() {
                    tracer.trace_consumed();
                    break;
                }
                i += 1;
            }

            if e.guard().matches_something() {
                tracer.trace_append(self.disjoint.len(), &e);
                self.disjoint.push(e);
            }
        }
    }

    fn coalesce<T: Tracer>(
        &mut self,
        buf: &mut CompilationBuffer,
        tracer: &mut T,
    ) -> Vec<TransitionBuilder<S>> {
        tracer.trace_phase(Phase::Coalesce);

        let policy = &self.policy;
        let mut result_size = 0;

        for candidate in self.disjoint.drain(..) {
            if candidate.guard().matches_nothing() {
                tracer.trace_skip(&candidate);
                continue;
            }

            let Some(chain) = self.same_targets.get_mut(candidate.transitions()) else {
                tracer.trace_keep(&candidate);
                let key = candidate.transitions().clone();
                self.same_targets.insert(key, vec![candidate]);
                result_size += 1;
                continue;
            };

            let target = chain
                .iter_mut()
                .rev()
                .find(|existing| policy.mergeable(&candidate, existing));

            match target {
                Some(existing) => {
                    let guard = existing.guard().union(candidate.guard(), buf);
                    existing.set_guard(guard);
                    tracer.trace_merge(&candidate, existing);
                }
                None => {
                    tracer.trace_keep(&candidate);
                    chain.push(candidate);
                    result_size += 1;
                }
            }
        }

        let mut result = Vec::with_capacity(result_size);
        for (_, chain) in self.same_targets.drain(..) {
            result.extend(chain.into_iter().rev());
        }
        debug_assert_eq!(result.len(), result_size);
        result
    }
}
