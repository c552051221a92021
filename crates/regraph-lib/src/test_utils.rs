//! Test helpers: a minimal DFA walker and a reference matcher.

use rowan::TextRange;

use crate::dfa::Dfa;

pub fn span(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

/// Whether the DFA accepts the whole of `input`.
pub fn accepts(dfa: &Dfa, input: &str) -> bool {
    let mut state = dfa.start();
    for c in input.chars() {
        match dfa.next(state, c) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_accepting(state)
}

/// Every string over `alphabet` of length `0..=max_len`.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Full-match reference built with regex-automata.
pub fn reference(pattern: &str) -> regex_automata::meta::Regex {
    regex_automata::meta::Regex::new(&format!("^(?:{pattern})$"))
        .unwrap_or_else(|e| panic!("reference rejects {pattern:?}: {e}"))
}
