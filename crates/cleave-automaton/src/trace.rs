//! Tracing hooks for the canonicalizer.
//!
//! `NoopTracer` methods are `#[inline(always)]` and empty, so an untraced run
//! compiles to the bare algorithm. `PrintTracer` collects one line per event,
//! filtered by [`Verbosity`], for `cleave canon -v`.

use cleave_core::Colors;

use crate::builder::TransitionBuilder;
use crate::dump::format_builder;
use crate::input::TransitionNames;
use crate::transition_set::TransitionSet;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default (-v): inputs, appended entries, merges and the result size.
    #[default]
    Default,
    /// Verbose (-vv): also splits, absorptions and consumed inputs.
    Verbose,
    /// Very verbose (-vvv): also every coalescing candidate kept apart.
    VeryVerbose,
}

/// Canonicalizer phase, for section headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Disjoint,
    Coalesce,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Disjoint => "disjoint",
            Phase::Coalesce => "coalesce",
        }
    }
}

/// Canonicalizer instrumentation.
///
/// Indices refer to positions in the disjoint list as it stood when the event
/// fired, except in `trace_input` where it is the input position.
pub trait Tracer {
    /// Called when a phase begins.
    fn trace_phase(&mut self, phase: Phase);

    /// Called before an input is disjointed against the existing entries.
    fn trace_input<S: TransitionSet>(&mut self, index: usize, input: &TransitionBuilder<S>);

    /// Called for an input or entry skipped because its guard is empty.
    fn trace_skip<S: TransitionSet>(&mut self, tb: &TransitionBuilder<S>);

    /// Called when an entry's guard lies inside the input and the entry took
    /// on the input's transitions.
    fn trace_absorb<S: TransitionSet>(&mut self, index: usize, entry: &TransitionBuilder<S>);

    /// Called when an entry was shrunk to the part outside the input.
    fn trace_split<S: TransitionSet>(&mut self, index: usize, remainder: &TransitionBuilder<S>);

    /// Called when a builder is pushed onto the disjoint list.
    fn trace_append<S: TransitionSet>(&mut self, index: usize, tb: &TransitionBuilder<S>);

    /// Called when the current input has no guard left.
    fn trace_consumed(&mut self);

    /// Called after `candidate` was folded into `merged`.
    fn trace_merge<S: TransitionSet>(
        &mut self,
        candidate: &TransitionBuilder<S>,
        merged: &TransitionBuilder<S>,
    );

    /// Called when `candidate` starts a new result entry.
    fn trace_keep<S: TransitionSet>(&mut self, candidate: &TransitionBuilder<S>);

    /// Called with the final entry count.
    fn trace_result(&mut self, count: usize);
}

/// No-op tracer that gets optimized away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_phase(&mut self, _phase: Phase) {}

    #[inline(always)]
    fn trace_input<S: TransitionSet>(&mut self, _index: usize, _input: &TransitionBuilder<S>) {}

    #[inline(always)]
    fn trace_skip<S: TransitionSet>(&mut self, _tb: &TransitionBuilder<S>) {}

    #[inline(always)]
    fn trace_absorb<S: TransitionSet>(&mut self, _index: usize, _entry: &TransitionBuilder<S>) {}

    #[inline(always)]
    fn trace_split<S: TransitionSet>(&mut self, _index: usize, _remainder: &TransitionBuilder<S>) {
    }

    #[inline(always)]
    fn trace_append<S: TransitionSet>(&mut self, _index: usize, _tb: &TransitionBuilder<S>) {}

    #[inline(always)]
    fn trace_consumed(&mut self) {}

    #[inline(always)]
    fn trace_merge<S: TransitionSet>(
        &mut self,
        _candidate: &TransitionBuilder<S>,
        _merged: &TransitionBuilder<S>,
    ) {
    }

    #[inline(always)]
    fn trace_keep<S: TransitionSet>(&mut self, _candidate: &TransitionBuilder<S>) {}

    #[inline(always)]
    fn trace_result(&mut self, _count: usize) {}
}

/// Tracer that collects a readable event log.
pub struct PrintTracer<'n> {
    /// Resolves transition ids in target sets.
    names: &'n TransitionNames,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl<'n> PrintTracer<'n> {
    pub fn new(names: &'n TransitionNames, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            names,
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    fn fmt<S: TransitionSet>(&self, tb: &TransitionBuilder<S>) -> String {
        format_builder(tb, self.names, self.colors)
    }

    fn add_event(&mut self, tag: &str, content: String) {
        let c = self.colors;
        let line = format!("  {}{tag:<7}{} {content}", c.dim, c.reset);
        self.lines.push(line.trim_end().to_owned());
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_phase(&mut self, phase: Phase) {
        let c = self.colors;
        self.lines
            .push(format!("{}[{}]{}", c.target, phase.name(), c.reset));
    }

    fn trace_input<S: TransitionSet>(&mut self, index: usize, input: &TransitionBuilder<S>) {
        let content = format!("{index} {}", self.fmt(input));
        self.add_event("input", content);
    }

    fn trace_skip<S: TransitionSet>(&mut self, tb: &TransitionBuilder<S>) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let content = self.fmt(tb);
        self.add_event("skip", content);
    }

    fn trace_absorb<S: TransitionSet>(&mut self, index: usize, entry: &TransitionBuilder<S>) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let content = format!("{index} {}", self.fmt(entry));
        self.add_event("absorb", content);
    }

    fn trace_split<S: TransitionSet>(&mut self, index: usize, remainder: &TransitionBuilder<S>) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let content = format!("{index} {}", self.fmt(remainder));
        self.add_event("split", content);
    }

    fn trace_append<S: TransitionSet>(&mut self, index: usize, tb: &TransitionBuilder<S>) {
        let content = format!("{index} {}", self.fmt(tb));
        self.add_event("append", content);
    }

    fn trace_consumed(&mut self) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        self.add_event("done", String::new());
    }

    fn trace_merge<S: TransitionSet>(
        &mut self,
        candidate: &TransitionBuilder<S>,
        merged: &TransitionBuilder<S>,
    ) {
        let content = format!("{} into {}", candidate.guard(), self.fmt(merged));
        self.add_event("merge", content);
    }

    fn trace_keep<S: TransitionSet>(&mut self, candidate: &TransitionBuilder<S>) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let content = self.fmt(candidate);
        self.add_event("keep", content);
    }

    fn trace_result(&mut self, count: usize) {
        let c = self.colors;
        let noun = if count == 1 { "entry" } else { "entries" };
        self.lines
            .push(format!("{}[result]{} {count} {noun}", c.target, c.reset));
    }
}
