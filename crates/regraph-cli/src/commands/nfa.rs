use regraph_lib::{Colors, Compiler, Nfa, NoopTracer, PrintTracer, Result, Tracer};

use super::PatternArgs;
use super::run_common::{load_or_exit, print_or_exit, render_nfa, report_and_exit};
use crate::cli::OutputFormat;

pub struct NfaArgs {
    pub input: PatternArgs,
    pub format: OutputFormat,
    pub trace: bool,
    pub color: bool,
}

pub fn run(args: NfaArgs) {
    let loaded = load_or_exit(&args.input);
    let colors = Colors::new(args.color);

    let result = if args.trace {
        let mut tracer = PrintTracer::new(colors);
        let result = build(&loaded.text, &mut tracer);
        eprint!("{}", tracer.render());
        result
    } else {
        build(&loaded.text, &mut NoopTracer)
    };

    let nfa = result.unwrap_or_else(|e| report_and_exit(&e, &loaded, args.color));
    print_or_exit(render_nfa(&nfa, args.format, colors));
}

fn build<T: Tracer>(pattern: &str, tracer: &mut T) -> Result<Nfa> {
    let compiler = Compiler::new();
    let parsed = compiler.parse(pattern, tracer)?;
    compiler.build_nfa(&parsed, tracer)
}
