//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Pattern input shared by every command.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("regraph")
        .about("Compile regular expressions to NFA and DFA graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(postfix_command())
        .subcommand(nfa_command())
        .subcommand(dfa_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  regraph check <PATTERN>
  regraph check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  regraph check '(a|b)*abb'        # silent on success
  regraph check -f pattern.txt     # pattern from file
  echo 'a|b' | regraph check -f -  # pattern from stdin"#,
        );

    with_pattern_args(cmd)
}

/// Show the formatted infix and postfix forms.
pub fn postfix_command() -> Command {
    let cmd = Command::new("postfix")
        .about("Show the pattern with explicit concatenation and in postfix order")
        .after_help(
            r#"EXAMPLES:
  regraph postfix 'a(b|c)*'        # infix a.(b|c)*, postfix abc|*."#,
        );

    with_pattern_args(cmd)
}

/// Show the Thompson NFA.
pub fn nfa_command() -> Command {
    let cmd = Command::new("nfa")
        .about("Show the NFA built by Thompson construction")
        .after_help(
            r#"EXAMPLES:
  regraph nfa 'a|b'                        # text dump
  regraph nfa 'a|b' --format dot | dot -Tsvg
  regraph nfa 'a|b' --trace                # construction steps on stderr"#,
        )
        .arg(format_arg())
        .arg(trace_arg());

    with_pattern_args(cmd)
}

/// Show the DFA.
pub fn dfa_command() -> Command {
    let cmd = Command::new("dfa")
        .about("Show the DFA built by subset construction")
        .after_help(
            r#"EXAMPLES:
  regraph dfa '(a|b)*abb'                  # text dump
  regraph dfa '(a|b)*abb' --format json    # machine-readable
  regraph dfa '(a|b)*abb' --max-states 16  # bounded construction"#,
        )
        .arg(format_arg())
        .arg(trace_arg())
        .arg(max_states_arg());

    with_pattern_args(cmd)
}
