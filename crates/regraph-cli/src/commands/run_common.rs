//! Shared logic for the pattern commands.

use regraph_lib::dot::{dfa_to_dot, nfa_to_dot};
use regraph_lib::{Colors, Dfa, Error, Nfa};

use super::PatternArgs;
use super::pattern_loader::{LoadedPattern, load_pattern};
use crate::cli::OutputFormat;

/// Load the pattern or exit with the loader's message.
pub fn load_or_exit(args: &PatternArgs) -> LoadedPattern {
    load_pattern(args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Render a compile error against the pattern and exit.
pub fn report_and_exit(error: &Error, loaded: &LoadedPattern, color: bool) -> ! {
    let mut printer = error.printer(&loaded.text).colored(color);
    if let Some(origin) = &loaded.origin {
        printer = printer.path(origin);
    }
    eprint!("{}", printer.render());
    std::process::exit(1)
}

pub fn render_nfa(nfa: &Nfa, format: OutputFormat, colors: Colors) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Text => nfa.printer().colors(colors).dump(),
        OutputFormat::Dot => nfa_to_dot(nfa),
        OutputFormat::Json => serde_json::to_string_pretty(nfa)? + "\n",
    })
}

pub fn render_dfa(dfa: &Dfa, format: OutputFormat, colors: Colors) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Text => dfa.printer().colors(colors).dump(),
        OutputFormat::Dot => dfa_to_dot(dfa),
        OutputFormat::Json => serde_json::to_string_pretty(dfa)? + "\n",
    })
}

/// Print rendered output, or exit if rendering failed.
pub fn print_or_exit(rendered: serde_json::Result<String>) {
    match rendered {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}
