mod cli;
mod commands;

use cli::{CheckParams, DfaParams, NfaParams, PostfixParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("postfix", m)) => {
            let params = PostfixParams::from_matches(m);
            commands::postfix::run(params.into());
        }
        Some(("nfa", m)) => {
            let params = NfaParams::from_matches(m);
            commands::nfa::run(params.into());
        }
        Some(("dfa", m)) => {
            let params = DfaParams::from_matches(m);
            commands::dfa::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
