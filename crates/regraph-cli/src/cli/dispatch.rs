//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the unresolved
//! [`ColorChoice`]; the `Into<*Args>` impls resolve it.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use super::args::OutputFormat;
use crate::commands::PatternArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dfa::DfaArgs;
use crate::commands::nfa::NfaArgs;
use crate::commands::postfix::PostfixArgs;

pub struct CheckParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: PatternArgs {
                pattern: p.pattern,
                pattern_file: p.pattern_file,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct PostfixParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            input: PatternArgs {
                pattern: p.pattern,
                pattern_file: p.pattern_file,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct NfaParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub trace: bool,
    pub color: ColorChoice,
}

impl NfaParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            format: parse_format(m),
            trace: m.get_flag("trace"),
            color: parse_color(m),
        }
    }
}

impl From<NfaParams> for NfaArgs {
    fn from(p: NfaParams) -> Self {
        Self {
            input: PatternArgs {
                pattern: p.pattern,
                pattern_file: p.pattern_file,
            },
            format: p.format,
            trace: p.trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DfaParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub trace: bool,
    pub max_states: Option<usize>,
    pub color: ColorChoice,
}

impl DfaParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            format: parse_format(m),
            trace: m.get_flag("trace"),
            max_states: m.get_one::<usize>("max_states").copied(),
            color: parse_color(m),
        }
    }
}

impl From<DfaParams> for DfaArgs {
    fn from(p: DfaParams) -> Self {
        Self {
            input: PatternArgs {
                pattern: p.pattern,
                pattern_file: p.pattern_file,
            },
            format: p.format,
            trace: p.trace,
            max_states: p.max_states,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    m.get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default()
}
