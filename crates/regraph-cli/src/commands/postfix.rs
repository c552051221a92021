use regraph_lib::{Colors, Compiler, NoopTracer};

use super::PatternArgs;
use super::run_common::{load_or_exit, report_and_exit};

pub struct PostfixArgs {
    pub input: PatternArgs,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let loaded = load_or_exit(&args.input);

    let parsed = Compiler::new()
        .parse(&loaded.text, &mut NoopTracer)
        .unwrap_or_else(|e| report_and_exit(&e, &loaded, args.color));

    let c = Colors::new(args.color);
    println!("{}infix{}   {}", c.dim, c.reset, parsed.formatted());
    println!("{}postfix{} {}", c.dim, c.reset, parsed.postfix());
}
