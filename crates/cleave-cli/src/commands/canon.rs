//! Canonicalize a transition list and print the resulting DFA transitions.

use std::path::PathBuf;

use cleave_automaton::{
    AlwaysMerge, Canonicalizer, ContiguousOnly, MergePolicy, NeverMerge, NfaTransitionSet,
    PrintTracer, PrioritySensitiveTransitionSet, TransitionList, TransitionSet, Verbosity, dump,
    dump_json,
};
use cleave_core::{Colors, CompilationBuffer};

use super::input_loader::load_transitions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeChoice {
    #[default]
    Always,
    Never,
    Contiguous,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhaseChoice {
    Disjoint,
    #[default]
    Full,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CanonArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub merge: MergeChoice,
    pub priority_sensitive: bool,
    pub phase: PhaseChoice,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: bool,
    /// `None` disables tracing.
    pub verbosity: Option<Verbosity>,
}

/// Rendered output plus the trace, if one was requested.
pub struct Rendered {
    pub output: String,
    pub trace: Option<String>,
}

pub fn run(args: CanonArgs) {
    let list = match load_transitions(args.input_path.as_deref(), args.input_text.as_deref()) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = render(&list, &args);
    if let Some(trace) = &rendered.trace {
        eprint!("{trace}");
    }
    print!("{}", rendered.output);
}

pub fn render(list: &TransitionList, args: &CanonArgs) -> Rendered {
    if args.priority_sensitive {
        render_with_set::<PrioritySensitiveTransitionSet>(list, args)
    } else {
        render_with_set::<NfaTransitionSet>(list, args)
    }
}

fn render_with_set<S: TransitionSet>(list: &TransitionList, args: &CanonArgs) -> Rendered {
    match args.merge {
        MergeChoice::Always => render_with::<S, _>(list, args, AlwaysMerge),
        MergeChoice::Never => render_with::<S, _>(list, args, NeverMerge),
        MergeChoice::Contiguous => render_with::<S, _>(list, args, ContiguousOnly),
    }
}

fn render_with<S: TransitionSet, P: MergePolicy<S>>(
    list: &TransitionList,
    args: &CanonArgs,
    policy: P,
) -> Rendered {
    let colors = Colors::new(args.color);
    let mut buf = CompilationBuffer::new();
    let mut canon = Canonicalizer::new(policy);
    let mut tracer = args
        .verbosity
        .map(|v| PrintTracer::new(list.names(), v, colors));

    let entries = match (args.phase, tracer.as_mut()) {
        (PhaseChoice::Disjoint, Some(t)) => canon.disjoint_traced(list.builders::<S>(), &mut buf, t),
        (PhaseChoice::Disjoint, None) => canon.disjoint(list.builders::<S>(), &mut buf),
        (PhaseChoice::Full, Some(t)) => canon.run_traced(list.builders::<S>(), &mut buf, t),
        (PhaseChoice::Full, None) => canon.run(list.builders::<S>(), &mut buf),
    };

    let output = match args.format {
        OutputFormat::Text => dump(&entries, list.names(), colors),
        OutputFormat::Json => {
            let mut json = dump_json(&entries, list.names(), !args.compact);
            json.push('\n');
            json
        }
    };

    Rendered {
        output,
        trace: tracer.map(PrintTracer::finish),
    }
}
