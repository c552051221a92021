//! Builder-pattern printer for rendering compile errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::Error;

/// Renders an [`Error`] as an annotated snippet of the pattern.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let message = self.error.to_string();

        let Some(span) = self.error.span() else {
            return writeln!(w, "error: {message}");
        };
        if self.source.is_empty() {
            return writeln!(w, "error: {message}");
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let label = annotation_label(self.error);
        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(span, self.source))
                .label(label),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }
}

fn annotation_label(error: &Error) -> &'static str {
    match error {
        Error::UnmatchedClosingParenthesis { .. } => "no `(` to close",
        Error::UnmatchedOpeningParenthesis { .. } => "this group is never closed",
        Error::MalformedExpression { .. } => "here",
        Error::EmptyPattern | Error::DfaStateLimitExceeded { .. } => "",
    }
}

/// Converts a span to a byte range, widening empty spans to one character.
fn adjust_range(range: TextRange, source: &str) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start != end {
        return start..end;
    }

    let width = source[start..].chars().next().map_or(0, char::len_utf8);
    if width == 0 {
        // Empty span at end of input: point at the last character instead.
        let last = source[..start].chars().next_back().map_or(0, char::len_utf8);
        return start - last..start;
    }
    start..start + width
}
