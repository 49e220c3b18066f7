//! `Styleguide <reference>` line recognition.
//!
//! A comment documents a style guide section when one of its lines reads
//! like `// Styleguide 1.2.3`, ` * Styleguide 4`, or `Styleguide 2.0 */`.
//! The match is case-sensitive and the reference is any number of dotted
//! digit groups.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{eof, opt, recognize},
    multi::many0,
    sequence::{pair, tuple},
};

/// Parses an optional comment-line prefix (`//`, `/*`, `*` and their
/// doubled variants).
pub(crate) fn comment_prefix(input: &str) -> IResult<&str, &str> {
    alt((tag("///"), tag("//"), tag("/**"), tag("/*"), tag("*")))(input)
}

/// Parses a dotted numeric reference such as `1`, `1.0` or `5.1.2.6`.
fn dotted_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, many0(pair(char('.'), digit1))))(input)
}

/// Parses a whole `Styleguide` line, returning the reference.
fn reference_line(line: &str) -> IResult<&str, &str> {
    let (input, _) = tuple((space0, opt(comment_prefix), space0, tag("Styleguide"), space0))(line)?;
    let (input, reference) = dotted_number(input)?;
    let (input, _) = tuple((space0, opt(tag("*/")), space0, eof))(input)?;
    Ok((input, reference))
}

/// Returns the first `Styleguide` reference found in a comment.
///
/// # Examples
///
/// ```
/// assert_eq!(kss::reference("// Buttons\n// Styleguide 2.1\n"), Some("2.1"));
/// assert_eq!(kss::reference("/* Comment\nStyleguide 1.0    */"), Some("1.0"));
/// assert_eq!(kss::reference("// styleguide 1.0"), None);
/// ```
pub fn reference(comment: &str) -> Option<&str> {
    comment
        .lines()
        .find_map(|line| reference_line(line).ok().map(|(_, reference)| reference))
}

/// Returns true if the comment contains a `Styleguide` reference line and
/// therefore starts a new documentation block.
pub fn is_marker(comment: &str) -> bool {
    reference(comment).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_with_line_prefix() {
        assert_eq!(reference("// Styleguide 1.0"), Some("1.0"));
        assert_eq!(reference("//Styleguide 1.0 "), Some("1.0"));
        assert_eq!(reference("  /// Styleguide 3"), Some("3"));
    }

    #[test]
    fn reference_without_space_before_number() {
        assert_eq!(reference("// Styleguide1.2"), Some("1.2"));
    }

    #[test]
    fn reference_any_depth() {
        assert_eq!(reference("// Styleguide 1"), Some("1"));
        assert_eq!(reference("// Styleguide 5.1.2.6"), Some("5.1.2.6"));
    }

    #[test]
    fn reference_in_block_comment_lines() {
        assert_eq!(reference("/* Comment\nStyleguide 1.0\n*/"), Some("1.0"));
        assert_eq!(reference("/* Comment\n * Styleguide 1.0\n*/"), Some("1.0"));
        assert_eq!(reference("/* Styleguide 4.2 */"), Some("4.2"));
        assert_eq!(reference("/** Styleguide 7 */"), Some("7"));
    }

    #[test]
    fn reference_ignores_crlf() {
        assert_eq!(reference("// Doc\r\n// Styleguide 2.0\r\n"), Some("2.0"));
    }

    #[test]
    fn rejects_other_case() {
        assert!(!is_marker("// styleguide 1.0"));
        assert!(!is_marker("// STYLEGUIDE 1.0"));
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(!is_marker("// Styleguide"));
        assert!(!is_marker("// Styleguide 1.0 extra"));
        assert!(!is_marker("// Styleguide 1..0"));
        assert!(!is_marker("// Styleguide x.1"));
        assert!(!is_marker("// See Styleguide 1.0"));
    }

    #[test]
    fn plain_comment_is_not_marker() {
        assert!(!is_marker("// Simple comment\n"));
        assert!(!is_marker("/* Simple comment */"));
    }
}
