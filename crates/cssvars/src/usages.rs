//! Variable usage finding.

use csslex::Dialect;

use crate::scanner::{Scanner, Site};

/// Returns the names of all variables referenced in `source`, in order of
/// appearance, without prefix.
///
/// Both `$` and `@` references are reported, so sources that mix the two
/// syntaxes are covered whichever `dialect` the caller works in. Not
/// reported:
///
/// - declaration targets and the references inside declaration values,
/// - at-rules such as `@media` or `@include`, except that in LESS an
///   `@name(` call of a detached ruleset is a usage,
/// - anything inside `//` or `/* */` comments.
///
/// Repeated references are all reported; the list is not deduplicated.
///
/// # Examples
///
/// ```
/// use csslex::Dialect;
///
/// let source = "$mycolor: #00ff00;\n.a {\n  color: rgba($mycolor, $alpha);\n}";
/// assert_eq!(cssvars::find_usages(source, Dialect::Scss), vec!["mycolor", "alpha"]);
/// ```
pub fn find_usages(source: &str, dialect: Dialect) -> Vec<String> {
    let usages: Vec<String> = Scanner::with_dialect(source, dialect)
        .filter_map(|site| match site {
            Site::Usage(usage) => Some(source[usage.name].to_string()),
            Site::Declaration(_) => None,
        })
        .collect();
    log::debug!("found {} variable usages ({dialect})", usages.len());
    usages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        assert!(find_usages("", Dialect::Scss).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(
            find_usages("a { b: $x; c: $x; }", Dialect::Scss),
            vec!["x", "x"]
        );
    }

    #[test]
    fn declarations_missing_semicolon_are_not_usages() {
        assert_eq!(
            find_usages("$a: 1px\n$b: 2px\n.x { c: $d; }", Dialect::Scss),
            vec!["d"]
        );
    }

    #[test]
    fn detached_ruleset_call_in_less() {
        assert_eq!(
            find_usages(".a {\n  @detached();\n}", Dialect::Less),
            vec!["detached"]
        );
        assert!(find_usages(".a {\n  @detached();\n}", Dialect::Scss).is_empty());
    }

    #[test]
    fn commented_usages_are_skipped() {
        assert_eq!(
            find_usages("a {\n  // b: $hidden;\n  c: $shown;\n}", Dialect::Scss),
            vec!["shown"]
        );
    }
}
