use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::PatternArgs;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use a positional argument or --pattern-file")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A pattern and the name it is reported under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedPattern {
    pub text: String,
    /// File path, `<stdin>`, or `None` for inline patterns.
    pub origin: Option<String>,
}

pub fn load_pattern(args: &PatternArgs) -> Result<LoadedPattern, LoadError> {
    if let Some(text) = &args.pattern {
        return Ok(LoadedPattern {
            text: text.clone(),
            origin: None,
        });
    }

    if let Some(path) = &args.pattern_file {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err(LoadError::Missing)
}

fn load_stdin() -> Result<LoadedPattern, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedPattern {
        text: strip_line_ending(buf),
        origin: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedPattern, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedPattern {
        text: strip_line_ending(content),
        origin: Some(path.display().to_string()),
    })
}

/// Files and pipes end with a newline that is not part of the pattern.
fn strip_line_ending(mut text: String) -> String {
    let len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(len);
    text
}
