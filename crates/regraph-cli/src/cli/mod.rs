mod args;
mod commands;
mod dispatch;


pub use args::OutputFormat;
pub use commands::build_cli;
pub use dispatch::{CheckParams, DfaParams, NfaParams, PostfixParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Traces and diagnostics go to stderr while automata go to stdout,
            // so both have to be terminals.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}
