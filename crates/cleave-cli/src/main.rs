mod cli;
mod commands;

use cli::{CanonParams, CheckParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("canon", m)) => {
            let params = CanonParams::from_matches(m);
            commands::canon::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
