use std::path::PathBuf;

use cleave_automaton::TransitionList;
use cleave_core::Colors;

use super::input_loader::load_transitions;

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let list = match load_transitions(args.input_path.as_deref(), args.input_text.as_deref()) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if list.is_empty() {
        eprintln!("error: transition list cannot be empty");
        std::process::exit(1);
    }

    let colors = Colors::new(args.color);
    for warning in warnings(&list) {
        eprintln!("{}warning:{} {}", colors.dim, colors.reset, warning);
    }
}

/// Transitions that can never fire.
pub fn warnings(list: &TransitionList) -> Vec<String> {
    list.iter()
        .filter(|(_, guard)| guard.matches_nothing())
        .map(|(id, _)| {
            format!(
                "transition `{}` has an empty guard and never fires",
                list.names().label(id)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_guards_warn() {
        let list = TransitionList::from_json(
            r#"{ "transitions": [ { "name": "a", "guard": "[a]" }, { "name": "dead", "guard": "[]" } ] }"#,
        )
        .unwrap();

        assert_eq!(
            warnings(&list),
            vec!["transition `dead` has an empty guard and never fires".to_string()]
        );
    }

    #[test]
    fn clean_list_has_no_warnings() {
        let list =
            TransitionList::from_json(r#"{ "transitions": [ { "name": "a", "guard": "[a-z]" } ] }"#)
                .unwrap();
        assert!(warnings(&list).is_empty());
    }
}
