//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: `check` accepts the `canon` flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use cleave_automaton::Verbosity;

use super::*;
use crate::cli::commands::{canon_command, check_command};
use crate::commands::canon::{CanonArgs, MergeChoice, OutputFormat, PhaseChoice};

#[test]
fn canon_defaults() {
    let m = canon_command()
        .try_get_matches_from(["canon", "state.json"])
        .unwrap();
    let params = CanonParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("state.json")));
    assert_eq!(params.input_text, None);
    assert_eq!(params.merge, MergeChoice::Always);
    assert!(!params.priority_sensitive);
    assert_eq!(params.phase, PhaseChoice::Full);
    assert_eq!(params.format, OutputFormat::Text);
    assert!(!params.compact);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn canon_all_flags() {
    let m = canon_command()
        .try_get_matches_from([
            "canon",
            "-t",
            "{}",
            "--merge",
            "contiguous",
            "--priority-sensitive",
            "--phase",
            "disjoint",
            "--format",
            "json",
            "--compact",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
    let params = CanonParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.input_text.as_deref(), Some("{}"));
    assert_eq!(params.merge, MergeChoice::Contiguous);
    assert!(params.priority_sensitive);
    assert_eq!(params.phase, PhaseChoice::Disjoint);
    assert_eq!(params.format, OutputFormat::Json);
    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);

    let args: CanonArgs = params.into();
    assert_eq!(args.verbosity, Some(Verbosity::Verbose));
    assert!(!args.color);
}

#[test]
fn canon_verbosity_levels() {
    let level = |flags: &[&str]| {
        let mut argv = vec!["canon", "x.json", "--color", "never"];
        argv.extend_from_slice(flags);
        let m = canon_command().try_get_matches_from(argv).unwrap();
        CanonArgs::from(CanonParams::from_matches(&m)).verbosity
    };

    assert_eq!(level(&[]), None);
    assert_eq!(level(&["-v"]), Some(Verbosity::Default));
    assert_eq!(level(&["-vv"]), Some(Verbosity::Verbose));
    assert_eq!(level(&["-vvv"]), Some(Verbosity::VeryVerbose));
    assert_eq!(level(&["-vvvv"]), Some(Verbosity::VeryVerbose));
}

#[test]
fn canon_rejects_unknown_policy() {
    let result = canon_command().try_get_matches_from(["canon", "x.json", "--merge", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn canon_rejects_path_and_inline_text() {
    let result = canon_command().try_get_matches_from(["canon", "x.json", "-t", "{}"]);
    assert!(result.is_err());
}

#[test]
fn check_accepts_canon_flags() {
    let result = check_command().try_get_matches_from([
        "check",
        "state.json",
        "--merge",
        "never",
        "--phase",
        "disjoint",
        "--format",
        "json",
        "-v",
    ]);
    assert!(
        result.is_ok(),
        "check should accept canon flags: {:?}",
        result.err()
    );

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.input_path, Some(PathBuf::from("state.json")));
}

#[test]
fn check_help_hides_canon_flags() {
    let mut cmd = check_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--transitions"));
    assert!(help.contains("--color"));
    assert!(!help.contains("--merge"));
    assert!(!help.contains("--phase"));
    assert!(!help.contains("--priority-sensitive"));
}

#[test]
fn canon_help_shows_canon_flags() {
    let mut cmd = canon_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--merge"));
    assert!(help.contains("--phase"));
    assert!(help.contains("--format"));
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["cleave"]);
    assert!(result.is_err());
}

#[test]
fn cli_routes_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["cleave", "check", "-t", "{}"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "check");
    assert_eq!(
        CheckParams::from_matches(sub).input_text.as_deref(),
        Some("{}")
    );
}
