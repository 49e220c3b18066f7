//! Splitting a stylesheet into documentation/code blocks.
//!
//! The splitter walks the comment segments produced by [`csslex::Lexer`]
//! and runs a two-state machine over them:
//!
//! - `SeekingMarker`: nothing captured yet; code is discarded.
//! - `InCode`: a documentation comment has been captured and its code runs
//!   until the next documentation comment or end of input.
//!
//! Comments that carry no `Styleguide` reference never change state, so
//! inside a code region they stay verbatim in the code text.

use std::ops::Range;

use csslex::{Lexer, Segment};

use crate::block::KssBlock;
use crate::reference::is_marker;

#[derive(Debug)]
enum State {
    SeekingMarker,
    InCode {
        documentation: Range<usize>,
        code_start: usize,
    },
}

/// Splits stylesheet source into KSS blocks, in source order.
///
/// Code before the first documentation comment is dropped. The newlines
/// directly following a documentation comment are not part of the code.
///
/// # Examples
///
/// ```
/// let blocks = kss::split("// Comment\n// Styleguide 1.0\n\n.a { b: c }");
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].kss, "// Comment\n// Styleguide 1.0\n");
/// assert_eq!(blocks[0].code, ".a { b: c }");
/// ```
pub fn split(source: &str) -> Vec<KssBlock> {
    let mut blocks = Vec::new();
    let mut state = State::SeekingMarker;

    for segment in Lexer::new(source).filter(Segment::is_comment) {
        if !is_marker(segment.text(source)) {
            continue;
        }
        log::trace!("documentation comment at {:?}", segment.span);

        if let State::InCode {
            documentation,
            code_start,
        } = state
        {
            blocks.push(KssBlock::new(
                &source[documentation],
                &source[code_start..segment.span.start],
            ));
        }

        state = State::InCode {
            code_start: skip_newlines(source, segment.span.end),
            documentation: segment.span,
        };
    }

    if let State::InCode {
        documentation,
        code_start,
    } = state
    {
        blocks.push(KssBlock::new(&source[documentation], &source[code_start..]));
    }

    log::debug!("split stylesheet into {} blocks", blocks.len());
    blocks
}

/// Offset of the first character at or after `from` that is not a newline.
fn skip_newlines(source: &str, from: usize) -> usize {
    let rest = &source[from..];
    from + (rest.len() - rest.trim_start_matches(['\n', '\r']).len())
}
