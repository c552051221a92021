pub mod check;
pub mod dfa;
pub mod nfa;
pub mod pattern_loader;
pub mod postfix;
pub mod run_common;

#[cfg(test)]
mod run_common_tests;

use std::path::PathBuf;

/// Where a command reads its pattern from.
#[derive(Clone, Debug, Default)]
pub struct PatternArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
}
