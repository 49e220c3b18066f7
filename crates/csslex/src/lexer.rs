//! Comment/code segmentation.
//!
//! Splits stylesheet text into contiguous [`Segment`]s, each either a comment
//! or a run of code. Segments tile the input: concatenating their text in
//! order reproduces the source exactly.

use std::ops::Range;

/// What a segment contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// One or more consecutive lines that start with `//`, from the first
    /// `//` through the last line's terminator.
    LineComments,
    /// A `/* ... */` comment, delimiters included.
    BlockComment,
    /// Anything else.
    Code,
}

/// A byte range of the source and what it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Range<usize>,
}

impl Segment {
    /// Slices this segment's text out of the source it was lexed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    pub fn is_comment(&self) -> bool {
        self.kind != SegmentKind::Code
    }
}

/// Lexer over stylesheet comments.
///
/// # Examples
///
/// ```
/// use csslex::{Lexer, SegmentKind};
///
/// let source = ".a { b: c }\n/* note */\n";
/// let segments: Vec<_> = Lexer::new(source).collect();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1].kind, SegmentKind::BlockComment);
/// assert_eq!(segments[1].text(source), "/* note */");
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// Only horizontal whitespace lies between the last line start and `pos`.
    line_indent: bool,
    /// Open parentheses in code; `//` inside them (as in `url(http://...)`)
    /// is not a comment.
    paren_depth: usize,
    /// Offset of a `/*` that has no closing `*/` anywhere after it.
    unterminated_from: Option<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line_indent: true,
            paren_depth: 0,
            unterminated_from: None,
        }
    }

    /// If a comment starts exactly at `at`, returns its kind and end offset.
    fn comment_at(&mut self, at: usize, line_indent: bool) -> Option<(SegmentKind, usize)> {
        let input = self.input;
        let rest = &input[at..];
        if line_indent && rest.starts_with("//") {
            return Some((SegmentKind::LineComments, self.line_run_end(at)));
        }
        if !rest.starts_with("/*") {
            return None;
        }
        if self.unterminated_from.is_some_and(|from| at >= from) {
            return None;
        }
        match rest[2..].find("*/") {
            Some(close) => Some((SegmentKind::BlockComment, at + 2 + close + 2)),
            None => {
                log::trace!("unterminated block comment at {at}, treating as code");
                self.unterminated_from = Some(at);
                None
            }
        }
    }

    /// End of the line-comment run whose first `//` is at `start`.
    fn line_run_end(&self, start: usize) -> usize {
        let mut line = start;
        loop {
            let next_line = match self.input[line..].find('\n') {
                Some(nl) => line + nl + 1,
                None => return self.input.len(),
            };
            let rest = &self.input[next_line..];
            let indent = rest.len() - rest.trim_start_matches([' ', '\t']).len();
            if !rest[indent..].starts_with("//") {
                return next_line;
            }
            line = next_line + indent;
        }
    }

    /// Advances over code until the next comment or end of input.
    ///
    /// A trailing `//` comment stays part of the code, and so does anything
    /// after it on that line: a `/*` there opens nothing. String literals are
    /// skipped the same way.
    fn consume_code(&mut self) -> usize {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut quote: Option<u8> = None;
        let mut at = self.pos;
        while at < bytes.len() {
            let b = bytes[at];
            if let Some(q) = quote {
                match b {
                    b'\\' => at += 1,
                    b'\n' => {
                        quote = None;
                        self.line_indent = true;
                    }
                    _ if b == q => quote = None,
                    _ => {}
                }
                at += 1;
                continue;
            }
            match b {
                b'\n' => self.line_indent = true,
                b' ' | b'\t' | b'\r' => {}
                b'/' if self.comment_at(at, self.line_indent).is_some() => break,
                b'/' if self.paren_depth == 0 && bytes.get(at + 1) == Some(&b'/') => {
                    at += input[at..].find('\n').unwrap_or(input.len() - at);
                    continue;
                }
                _ => {
                    match b {
                        b'\\' => at += 1,
                        b'"' | b'\'' => quote = Some(b),
                        b'(' => self.paren_depth += 1,
                        b')' => self.paren_depth = self.paren_depth.saturating_sub(1),
                        b'{' | b'}' => self.paren_depth = 0,
                        _ => {}
                    }
                    self.line_indent = false;
                }
            }
            at += 1;
        }
        at.min(bytes.len())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        if start >= self.input.len() {
            return None;
        }

        let (kind, end) = match self.comment_at(start, self.line_indent) {
            Some((kind, end)) => {
                // A line run always stops right after a newline (or at EOF).
                self.line_indent = kind == SegmentKind::LineComments;
                (kind, end)
            }
            None => (SegmentKind::Code, self.consume_code()),
        };

        self.pos = end;
        Some(Segment {
            kind,
            span: start..end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<(SegmentKind, &str)> {
        Lexer::new(source)
            .map(|s| (s.kind, s.text(source)))
            .collect()
    }

    #[test]
    fn lex_empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn lex_plain_code() {
        assert_eq!(lex(".a { b: c }"), vec![(SegmentKind::Code, ".a { b: c }")]);
    }

    #[test]
    fn lex_line_run_includes_final_newline() {
        assert_eq!(
            lex("// one\n// two\n\n.a {}"),
            vec![
                (SegmentKind::LineComments, "// one\n// two\n"),
                (SegmentKind::Code, "\n.a {}"),
            ]
        );
    }

    #[test]
    fn lex_line_run_at_end_without_newline() {
        assert_eq!(
            lex("// one\n// two"),
            vec![(SegmentKind::LineComments, "// one\n// two")]
        );
    }

    #[test]
    fn lex_indented_line_run() {
        assert_eq!(
            lex("  // one\n    // two\nx"),
            vec![
                (SegmentKind::Code, "  "),
                (SegmentKind::LineComments, "// one\n    // two\n"),
                (SegmentKind::Code, "x"),
            ]
        );
    }

    #[test]
    fn lex_trailing_slashes_are_code() {
        assert_eq!(
            lex("a: b; // note\n"),
            vec![(SegmentKind::Code, "a: b; // note\n")]
        );
    }

    #[test]
    fn lex_block_opener_inside_trailing_comment_is_inert() {
        assert_eq!(
            lex(".a {} // see /* note\n// Styleguide 1\n\n.b {}"),
            vec![
                (SegmentKind::Code, ".a {} // see /* note\n"),
                (SegmentKind::LineComments, "// Styleguide 1\n"),
                (SegmentKind::Code, "\n.b {}"),
            ]
        );
    }

    #[test]
    fn lex_url_slashes_do_not_hide_block_comment() {
        assert_eq!(
            lex("a { b: url(http://x.png); } /* c */"),
            vec![
                (SegmentKind::Code, "a { b: url(http://x.png); } "),
                (SegmentKind::BlockComment, "/* c */"),
            ]
        );
    }

    #[test]
    fn lex_comment_openers_in_strings_are_code() {
        assert_eq!(
            lex("a { content: \"/* x\"; }\n/* y */"),
            vec![
                (SegmentKind::Code, "a { content: \"/* x\"; }\n"),
                (SegmentKind::BlockComment, "/* y */"),
            ]
        );
    }

    #[test]
    fn lex_block_comment_excludes_newline() {
        assert_eq!(
            lex("/* a\n * b\n */\n.x {}"),
            vec![
                (SegmentKind::BlockComment, "/* a\n * b\n */"),
                (SegmentKind::Code, "\n.x {}"),
            ]
        );
    }

    #[test]
    fn lex_inline_block_comment() {
        assert_eq!(
            lex("a /* b */ c"),
            vec![
                (SegmentKind::Code, "a "),
                (SegmentKind::BlockComment, "/* b */"),
                (SegmentKind::Code, " c"),
            ]
        );
    }

    #[test]
    fn lex_unterminated_block_is_code() {
        assert_eq!(
            lex("a /* b /* c"),
            vec![(SegmentKind::Code, "a /* b /* c")]
        );
    }

    #[test]
    fn lex_slashes_after_block_comment_are_code() {
        assert_eq!(
            lex("/* a */ // b\n"),
            vec![
                (SegmentKind::BlockComment, "/* a */"),
                (SegmentKind::Code, " // b\n"),
            ]
        );
    }

    #[test]
    fn segments_tile_the_source() {
        let source = "x\n// a\n/* b */ y /* c\n  // d\n";
        let joined: String = Lexer::new(source).map(|s| s.text(source)).collect();
        assert_eq!(joined, source);
    }
}
