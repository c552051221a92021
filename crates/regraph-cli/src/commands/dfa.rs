use regraph_lib::{Colors, Compiled, Compiler, Limits, NoopTracer, PrintTracer};

use super::PatternArgs;
use super::run_common::{load_or_exit, print_or_exit, render_dfa, report_and_exit};
use crate::cli::OutputFormat;

pub struct DfaArgs {
    pub input: PatternArgs,
    pub format: OutputFormat,
    pub trace: bool,
    pub max_states: Option<usize>,
    pub color: bool,
}

pub fn run(args: DfaArgs) {
    let loaded = load_or_exit(&args.input);
    let colors = Colors::new(args.color);
    let compiler = Compiler::with_limits(Limits {
        max_dfa_states: args.max_states,
    });

    let result = if args.trace {
        let mut tracer = PrintTracer::new(colors);
        let result = compiler.compile_traced(&loaded.text, &mut tracer);
        eprint!("{}", tracer.render());
        result
    } else {
        compiler.compile_traced(&loaded.text, &mut NoopTracer)
    };

    let compiled: Compiled = result.unwrap_or_else(|e| report_and_exit(&e, &loaded, args.color));
    print_or_exit(render_dfa(compiled.dfa(), args.format, colors));
}
