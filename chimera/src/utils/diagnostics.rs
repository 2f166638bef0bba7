use annotate_snippets::{Level, Renderer, Snippet};
use chimera_error::CompileError;
use chimera_types::Spanned;
use std::path::Path;

/// How many lines to show on each side of the highlighted one.
const NUM_LINES_BUFFER: usize = 2;

/// Logs `err` as a rendered, coloured source snippet.
pub fn format_err(path: Option<&Path>, err: &CompileError) {
    let rendered = render_diagnostic(path, err, Renderer::styled());
    tracing::error!("{}\n____\n", rendered);
}

/// Renders `err` with a window of source lines around the offending token.
pub fn render_diagnostic(path: Option<&Path>, err: &CompileError, renderer: Renderer) -> String {
    let span = err.span();
    let input = span.src();
    let origin = path.map(|path| path.to_string_lossy().into_owned());
    let title = err.to_string();
    let label = err.message();

    let line = err.line_col().line;
    let window = SourceWindow::around(input, line);
    let (start, end) = window.highlight(span.start(), span.end());

    let mut snippet = Snippet::source(window.text)
        .line_start(window.first_line)
        .fold(false)
        .annotation(Level::Error.span(start..end).label(&label));
    if let Some(origin) = &origin {
        snippet = snippet.origin(origin);
    }
    let message = Level::Error.title(&title).snippet(snippet);
    let rendered = renderer.render(message).to_string();
    rendered
}

/// A run of whole source lines, at most `NUM_LINES_BUFFER` either side of a given line.
struct SourceWindow<'a> {
    text: &'a str,
    /// Byte offset of `text` in the full input.
    offset: usize,
    /// 1-based number of the first line of `text`.
    first_line: usize,
}

impl<'a> SourceWindow<'a> {
    fn around(input: &'a str, line: usize) -> SourceWindow<'a> {
        let first_line = line.saturating_sub(NUM_LINES_BUFFER).max(1);
        let last_line = line + NUM_LINES_BUFFER;
        let line_starts = std::iter::once(0)
            .chain(input.match_indices('\n').map(|(ix, _)| ix + 1))
            .collect::<Vec<_>>();
        let start = line_starts.get(first_line - 1).copied().unwrap_or(input.len());
        let end = line_starts
            .get(last_line)
            .map(|ix| ix - 1)
            .unwrap_or(input.len());
        SourceWindow {
            text: &input[start..end.max(start)],
            offset: start,
            first_line,
        }
    }

    /// Translates a byte range of the full input into a character range of the window.
    ///
    /// Empty ranges, such as the end of input, are widened to one character so the marker
    /// still shows.
    fn highlight(&self, start: usize, end: usize) -> (usize, usize) {
        let to_chars = |ix: usize| {
            let ix = ix.saturating_sub(self.offset).min(self.text.len());
            self.text
                .get(..ix)
                .map_or(self.text.chars().count(), |prefix| prefix.chars().count())
        };
        let (start, end) = (to_chars(start), to_chars(end));
        if start < end {
            return (start, end);
        }
        let len = self.text.chars().count();
        if end < len {
            (start, end + 1)
        } else {
            (start.saturating_sub(1), end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn compile_err(src: &str) -> CompileError {
        match chimera_core::compile_to_ast(Arc::from(src)) {
            Ok(_) => panic!("expected an error"),
            Err(err) => err,
        }
    }

    #[test]
    fn window_keeps_two_lines_around() {
        let input = "a\nb\nc\nd\ne\nf\ng";
        let window = SourceWindow::around(input, 4);
        assert_eq!(window.text, "b\nc\nd\ne\nf");
        assert_eq!(window.first_line, 2);
        assert_eq!(window.offset, 2);

        let window = SourceWindow::around(input, 1);
        assert_eq!(window.text, "a\nb\nc");
        assert_eq!(window.first_line, 1);
    }

    #[test]
    fn highlight_is_window_relative() {
        let input = "a\nb\nc\nd\nexit;\nf";
        let window = SourceWindow::around(input, 5);
        assert_eq!(window.highlight(8, 12), (4, 8));
        assert_eq!(&window.text[4..8], "exit");
    }

    #[test]
    fn empty_span_at_end_still_points() {
        let input = "program";
        let window = SourceWindow::around(input, 1);
        assert_eq!(window.highlight(7, 7), (6, 7));
    }

    #[test]
    fn semantic_diagnostic_names_file_and_token() {
        let err = compile_err("program\n  exit;\nend;\n");
        let rendered = render_diagnostic(Some(Path::new("loop.chi")), &err, Renderer::plain());
        assert!(rendered.contains("Semantic error: Unexpected exit statement"));
        assert!(rendered.contains("loop.chi"));
        assert!(rendered.contains("  exit;"));
    }

    #[test]
    fn syntax_diagnostic_at_end_of_input() {
        let err = compile_err("program WrLn();");
        assert_eq!(err.token().kind, chimera_ast::TokenKind::Eof);
        let rendered = render_diagnostic(None, &err, Renderer::plain());
        assert!(rendered.contains("Syntax error: expected END, found end of input"));
    }
}
