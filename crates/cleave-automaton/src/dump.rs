//! Human-readable and JSON renderings of canonicalized transitions.
//!
//! Text format, one entry per line:
//!
//! ```text
//! 0  [a] -> {kw}
//! 1  [b-c] -> {kw, id}
//! ```

use std::fmt::Write as _;

use cleave_core::{CodePointSet, Colors};
use serde::Serialize;

use crate::builder::TransitionBuilder;
use crate::input::TransitionNames;
use crate::transition_set::TransitionSet;

/// Render a transition set as `{a, b}` in priority order.
pub fn format_targets<S: TransitionSet>(set: &S, names: &TransitionNames) -> String {
    let mut out = String::from("{");
    for (i, id) in set.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&names.label(id));
    }
    out.push('}');
    out
}

/// Render one builder as `[guard] -> {targets}`.
pub fn format_builder<S: TransitionSet>(
    tb: &TransitionBuilder<S>,
    names: &TransitionNames,
    colors: Colors,
) -> String {
    let c = colors;
    format!(
        "{}{}{} {}->{} {}{}{}",
        c.guard,
        tb.guard(),
        c.reset,
        c.dim,
        c.reset,
        c.target,
        format_targets(tb.transitions(), names),
        c.reset
    )
}

/// Index width so columns line up.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).to_string().len()
}

/// Dump entries as numbered lines.
pub fn dump<S: TransitionSet>(
    entries: &[TransitionBuilder<S>],
    names: &TransitionNames,
    colors: Colors,
) -> String {
    let w = width_for_count(entries.len());
    let mut out = String::new();
    for (i, tb) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}{i:>w$}{}  {}",
            colors.dim,
            colors.reset,
            format_builder(tb, names, colors)
        )
        .unwrap();
    }
    out
}

/// JSON shape of one result entry.
#[derive(Debug, Serialize)]
pub struct DumpEntry<'a> {
    pub guard: &'a CodePointSet,
    pub targets: Vec<String>,
}

pub fn to_dump_entries<'a, S: TransitionSet>(
    entries: &'a [TransitionBuilder<S>],
    names: &TransitionNames,
) -> Vec<DumpEntry<'a>> {
    entries
        .iter()
        .map(|tb| DumpEntry {
            guard: tb.guard(),
            targets: tb
                .transitions()
                .iter()
                .map(|id| names.label(id).into_owned())
                .collect(),
        })
        .collect()
}

/// Dump entries as a JSON array.
pub fn dump_json<S: TransitionSet>(
    entries: &[TransitionBuilder<S>],
    names: &TransitionNames,
    pretty: bool,
) -> String {
    let entries = to_dump_entries(entries, names);
    let json = if pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    };
    json.expect("dump entries serialize infallibly")
}
