//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use cleave_automaton::Verbosity;

use super::ColorChoice;
use crate::commands::canon::{CanonArgs, MergeChoice, OutputFormat, PhaseChoice};
use crate::commands::check::CheckArgs;

pub struct CanonParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub merge: MergeChoice,
    pub priority_sensitive: bool,
    pub phase: PhaseChoice,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CanonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            merge: parse_merge(m),
            priority_sensitive: m.get_flag("priority_sensitive"),
            phase: parse_phase(m),
            format: parse_format(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CanonParams> for CanonArgs {
    fn from(p: CanonParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            merge: p.merge,
            priority_sensitive: p.priority_sensitive,
            phase: p.phase,
            format: p.format,
            compact: p.compact,
            color: p.color.should_colorize(),
            verbosity: verbosity_from_count(p.verbose),
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub color: ColorChoice,
    // Note: merge, priority_sensitive, phase, format, compact, verbose are
    // parsed but not extracted (hidden canon flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_merge(m: &ArgMatches) -> MergeChoice {
    match m.get_one::<String>("merge").map(|s| s.as_str()) {
        Some("never") => MergeChoice::Never,
        Some("contiguous") => MergeChoice::Contiguous,
        _ => MergeChoice::Always,
    }
}

fn parse_phase(m: &ArgMatches) -> PhaseChoice {
    match m.get_one::<String>("phase").map(|s| s.as_str()) {
        Some("disjoint") => PhaseChoice::Disjoint,
        _ => PhaseChoice::Full,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// No `-v` means no trace at all.
fn verbosity_from_count(count: u8) -> Option<Verbosity> {
    match count {
        0 => None,
        1 => Some(Verbosity::Default),
        2 => Some(Verbosity::Verbose),
        _ => Some(Verbosity::VeryVerbose),
    }
}
