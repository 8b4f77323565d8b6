use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cleave_automaton::{InputError, TransitionList};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("transitions are required: use a positional file, '-' for stdin, or -t/--transitions")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: {source}")]
    Input {
        origin: String,
        #[source]
        source: InputError,
    },
}

pub fn load_transitions(
    input_path: Option<&Path>,
    input_text: Option<&str>,
) -> Result<TransitionList, LoadError> {
    if let Some(text) = input_text {
        return parse(text, "<inline>".to_owned());
    }

    if let Some(path) = input_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err(LoadError::Missing)
}

fn load_stdin() -> Result<TransitionList, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    parse(&buf, "<stdin>".to_owned())
}

fn load_file(path: &Path) -> Result<TransitionList, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })?;
    parse(&content, path.display().to_string())
}

fn parse(text: &str, origin: String) -> Result<TransitionList, LoadError> {
    TransitionList::from_json(text).map_err(|source| LoadError::Input { origin, source })
}
