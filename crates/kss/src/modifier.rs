//! KSS modifier entries.
//!
//! A documentation comment may list the variations of the documented code:
//!
//! ```text
//! // Buttons
//! //
//! // :hover           - Highlight on hover
//! // .primary         - Primary call to action
//! // $button-padding  - Inner spacing
//! //
//! // Styleguide 2.1
//! ```
//!
//! Entries are `<name> - <description>`, where the name starts with `.`,
//! `:`, `$` or `@` and contains no whitespace.

use csslex::Named;
use nom::{
    IResult,
    bytes::complete::take_till1,
    character::complete::{char, one_of, space0, space1},
    combinator::{opt, recognize, rest},
    sequence::{pair, tuple},
};

use crate::reference::comment_prefix;

/// A modifier listed in a documentation comment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifier {
    /// The modifier as written, e.g. `.primary` or `$button-padding`.
    pub name: String,
    pub description: String,
}

impl Named for Modifier {
    fn name(&self) -> &str {
        &self.name
    }
}

fn modifier_line(line: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = tuple((space0, opt(comment_prefix), space0))(line)?;
    let (input, name) = recognize(pair(
        one_of(".:$@"),
        take_till1(|c: char| c.is_whitespace()),
    ))(input)?;
    let (input, _) = tuple((space1, char('-'), space1))(input)?;
    let (input, description) = rest(input)?;
    Ok((input, (name, description)))
}

/// Parses the modifier entries of a documentation comment, in order.
///
/// # Examples
///
/// ```
/// let doc = "// Button\n//\n// .primary - Main action\n// $gap - Spacing\n//\n// Styleguide 1.0\n";
/// let modifiers = kss::parse_modifiers(doc);
/// assert_eq!(modifiers.len(), 2);
/// assert_eq!(modifiers[1].name, "$gap");
/// ```
pub fn parse_modifiers(documentation: &str) -> Vec<Modifier> {
    documentation
        .lines()
        .filter_map(|line| modifier_line(line).ok())
        .map(|(_, (name, description))| Modifier {
            name: name.to_string(),
            description: description.trim_end().trim_end_matches("*/").trim_end().to_string(),
        })
        .collect()
}
