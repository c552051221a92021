//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into every command that needs it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ValueEnum, value_parser};

/// How `nfa` and `dfa` print the automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line per state, the format used in snapshots.
    #[default]
    Text,
    /// Graphviz DOT.
    Dot,
    /// Pretty-printed JSON.
    Json,
}

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .help("Regular expression over literals and ( ) | * + ?")
}

/// Read the pattern from a file (--pattern-file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('f')
        .long("pattern-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern")
        .help("Read the pattern from FILE ('-' for stdin)")
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

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(value_parser!(OutputFormat))
        .help("Output format")
}

/// Print the construction trace to stderr (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print each construction step to stderr")
}

/// DFA state limit (--max-states).
pub fn max_states_arg() -> Arg {
    Arg::new("max_states")
        .long("max-states")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Abort when the DFA would exceed N states")
}
