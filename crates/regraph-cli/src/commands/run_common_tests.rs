use regraph_lib::{Colors, compile};

use super::run_common::{render_dfa, render_nfa};
use crate::cli::OutputFormat;

#[test]
fn nfa_text() {
    let compiled = compile("a|b").unwrap();

    insta::assert_snapshot!(
        render_nfa(compiled.nfa(), OutputFormat::Text, Colors::OFF).unwrap(),
        @r"
    start = S2

    S0: 'a' → S3
    S1: 'b' → S3
    S2: ε → S0, S1
    S3: ✓
    "
    );
}

#[test]
fn dfa_dot() {
    let compiled = compile("ab").unwrap();

    insta::assert_snapshot!(
        render_dfa(compiled.dfa(), OutputFormat::Dot, Colors::OFF).unwrap(),
        @r#"
    digraph dfa {
        rankdir=LR;
        node [shape = doublecircle]; D2;
        node [shape = circle];
        entry [style = invis];
        entry -> D0 [label = "start"];
        D0 -> D1 [label = "a"];
        D1 -> D2 [label = "b"];
    }
    "#
    );
}

#[test]
fn dfa_json_is_parseable() {
    let compiled = compile("a*").unwrap();
    let text = render_dfa(compiled.dfa(), OutputFormat::Json, Colors::OFF).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["start"], 0);
    assert_eq!(value["states"][0]["accepting"], true);
    assert_eq!(value["states"][0]["transitions"]["a"], 0);
    assert!(text.ends_with('\n'));
}

#[test]
fn colored_text_has_escapes() {
    let compiled = compile("a").unwrap();

    let text = render_nfa(compiled.nfa(), OutputFormat::Text, Colors::ON).unwrap();

    assert!(text.contains("\x1b[34mS0\x1b[0m"), "{text:?}");
}
