//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `canon` and `check` share one
//! definition of the input flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Transition list file (positional). `-` reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("TRANSITIONS")
        .value_parser(value_parser!(PathBuf))
        .help("Transition list JSON file ('-' for stdin)")
}

/// Inline transition list (-t/--transitions).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("transitions")
        .value_name("JSON")
        .conflicts_with("input_path")
        .help("Inline transition list JSON")
}

/// Merge policy (--merge).
pub fn merge_arg() -> Arg {
    Arg::new("merge")
        .long("merge")
        .value_name("POLICY")
        .default_value("always")
        .value_parser(["always", "never", "contiguous"])
        .help("When same-target transitions may share one guard")
}

/// Order-sensitive target sets (--priority-sensitive).
pub fn priority_sensitive_arg() -> Arg {
    Arg::new("priority_sensitive")
        .long("priority-sensitive")
        .action(ArgAction::SetTrue)
        .help("Treat target sets listing the same transitions in another order as distinct")
}

/// Stop after a phase (--phase).
pub fn phase_arg() -> Arg {
    Arg::new("phase")
        .long("phase")
        .value_name("PHASE")
        .default_value("full")
        .value_parser(["disjoint", "full"])
        .help("Stop after disjointing, or also coalesce same-target transitions")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (with --format json)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Trace level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace to stderr (-v events, -vv with splits, -vvv with every candidate)")
}
