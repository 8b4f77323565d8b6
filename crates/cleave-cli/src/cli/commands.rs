//! Command builders for the CLI.
//!
//! `check` accepts the `canon` flags too, hidden from `--help`, so switching
//! between the two never trips over a leftover flag.

use clap::Command;

use super::args::*;

/// Add hidden canonicalization args (for commands that only load input).
fn with_hidden_canon_args(cmd: Command) -> Command {
    cmd.arg(merge_arg().hide(true))
        .arg(priority_sensitive_arg().hide(true))
        .arg(phase_arg().hide(true))
        .arg(format_arg().hide(true))
        .arg(compact_arg().hide(true))
        .arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cleave")
        .about("Split overlapping NFA transitions into disjoint DFA transitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(canon_command())
        .subcommand(check_command())
}

/// Canonicalize a transition list.
pub fn canon_command() -> Command {
    Command::new("canon")
        .about("Canonicalize a prioritized transition list")
        .override_usage(
            "\
  cleave canon <TRANSITIONS>
  cleave canon -t <JSON>
  cleave canon - < transitions.json",
        )
        .after_help(
            r#"EXAMPLES:
  cleave canon state.json                       # disjoint + coalesced
  cleave canon state.json --phase disjoint      # partition only
  cleave canon state.json --merge contiguous    # merge touching guards only
  cleave canon state.json --format json         # machine-readable
  cleave canon -t '{"transitions":[{"name":"a","guard":"[a-c]"}]}' -v"#,
        )
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(merge_arg())
        .arg(priority_sensitive_arg())
        .arg(phase_arg())
        .arg(format_arg())
        .arg(compact_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate a transition list.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a transition list")
        .override_usage(
            "\
  cleave check <TRANSITIONS>
  cleave check -t <JSON>",
        )
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(color_arg());

    with_hidden_canon_args(cmd)
}
