use regraph_lib::Compiler;

use super::PatternArgs;
use super::run_common::{load_or_exit, report_and_exit};

pub struct CheckArgs {
    pub input: PatternArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = load_or_exit(&args.input);

    if let Err(e) = Compiler::new().compile(&loaded.text) {
        report_and_exit(&e, &loaded, args.color);
    }

    // Silent on success (like cargo check)
}
