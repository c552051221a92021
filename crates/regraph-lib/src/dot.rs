//! Graphviz DOT emission.
//!
//! Both emitters walk the automaton breadth-first from its start state and
//! never mutate it. Turning the DOT text into an image is left to Graphviz.

use std::fmt::Write;

use crate::dfa::Dfa;
use crate::nfa::{Label, Nfa};

/// DOT graph of the NFA. Split edges are labeled `ε`.
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut out = String::new();
    write_nfa(&mut out, nfa).expect("String write never fails");
    out
}

/// DOT graph of the DFA, with accepting states drawn as double circles.
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut out = String::new();
    write_dfa(&mut out, dfa).expect("String write never fails");
    out
}

fn write_nfa(w: &mut String, nfa: &Nfa) -> std::fmt::Result {
    writeln!(w, "digraph nfa {{")?;
    writeln!(w, "    rankdir=LR;")?;
    writeln!(w, "    node [shape = doublecircle]; S{};", nfa.match_state())?;
    write_preamble(w, &format!("S{}", nfa.start()))?;

    for edge in nfa.edges() {
        let label = match edge.label {
            Label::Char(c) => escape(c),
            Label::Epsilon => "ε".to_string(),
        };
        writeln!(w, "    S{} -> S{} [label = \"{}\"];", edge.from, edge.to, label)?;
    }

    writeln!(w, "}}")
}

fn write_dfa(w: &mut String, dfa: &Dfa) -> std::fmt::Result {
    writeln!(w, "digraph dfa {{")?;
    writeln!(w, "    rankdir=LR;")?;

    let accepting: Vec<String> = dfa.accepting_states().map(|id| format!("D{id}")).collect();
    if !accepting.is_empty() {
        writeln!(w, "    node [shape = doublecircle]; {};", accepting.join(" "))?;
    }
    write_preamble(w, &format!("D{}", dfa.start()))?;

    for t in dfa.transitions() {
        writeln!(
            w,
            "    D{} -> D{} [label = \"{}\"];",
            t.from,
            t.to,
            escape(t.symbol)
        )?;
    }

    writeln!(w, "}}")
}

fn write_preamble(w: &mut String, start: &str) -> std::fmt::Result {
    writeln!(w, "    node [shape = circle];")?;
    writeln!(w, "    entry [style = invis];")?;
    writeln!(w, "    entry -> {start} [label = \"start\"];")
}

/// Escape a symbol for use inside a double-quoted DOT label.
fn escape(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn nfa_alternation() {
        let compiled = compile("a|b").unwrap();

        insta::assert_snapshot!(nfa_to_dot(compiled.nfa()), @r#"
        digraph nfa {
            rankdir=LR;
            node [shape = doublecircle]; S3;
            node [shape = circle];
            entry [style = invis];
            entry -> S2 [label = "start"];
            S2 -> S0 [label = "ε"];
            S2 -> S1 [label = "ε"];
            S0 -> S3 [label = "a"];
            S1 -> S3 [label = "b"];
        }
        "#);
    }

    #[test]
    fn dfa_star_loop() {
        let compiled = compile("a*").unwrap();

        insta::assert_snapshot!(dfa_to_dot(compiled.dfa()), @r#"
        digraph dfa {
            rankdir=LR;
            node [shape = doublecircle]; D0;
            node [shape = circle];
            entry [style = invis];
            entry -> D0 [label = "start"];
            D0 -> D0 [label = "a"];
        }
        "#);
    }

    #[test]
    fn labels_are_escaped() {
        let compiled = compile("\"\\").unwrap();
        let dot = dfa_to_dot(compiled.dfa());

        assert!(dot.contains(r#"[label = "\""]"#));
        assert!(dot.contains(r#"[label = "\\"]"#));
    }
}
