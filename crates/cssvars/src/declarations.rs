//! Variable declaration parsing.

use csslex::{Dialect, Prefixes};

use crate::scanner::{DeclarationSite, Scanner, Site};
use crate::variable::Variable;

/// Declaration sites of the given dialect, in source order.
pub(crate) fn declaration_sites(
    source: &str,
    dialect: Dialect,
) -> impl Iterator<Item = DeclarationSite> + '_ {
    let prefixes = Prefixes::from(dialect);
    Scanner::with_dialect(source, dialect).filter_map(move |site| match site {
        Site::Declaration(decl) if prefixes.matches(decl.prefix) => Some(decl),
        _ => None,
    })
}

/// Parses the `<prefix>name: value;` declarations of `source`.
///
/// Only declarations using the dialect's prefix are returned. Declarations
/// inside comments are skipped. Values are returned exactly as written,
/// minus the whitespace after the colon and the terminating semicolon.
///
/// # Examples
///
/// ```
/// use csslex::Dialect;
/// use cssvars::Variable;
///
/// let source = "$mycolor: #00ff00;\n// $color2: #00ff00;\n$color3: #0000ff;";
/// assert_eq!(
///     cssvars::parse_declarations(source, Dialect::Scss),
///     vec![Variable::new("mycolor", "#00ff00"), Variable::new("color3", "#0000ff")]
/// );
/// ```
pub fn parse_declarations(source: &str, dialect: Dialect) -> Vec<Variable> {
    let variables: Vec<Variable> = declaration_sites(source, dialect)
        .map(|decl| Variable::new(&source[decl.name], &source[decl.value]))
        .collect();
    log::debug!("parsed {} {dialect} declarations", variables.len());
    variables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_dialect_declarations_are_ignored() {
        let source = "$a: 1;\n@b: 2;";
        assert_eq!(
            parse_declarations(source, Dialect::Scss),
            vec![Variable::new("a", "1")]
        );
        assert_eq!(
            parse_declarations(source, Dialect::Less),
            vec![Variable::new("b", "2")]
        );
    }

    #[test]
    fn internal_spacing_is_kept() {
        assert_eq!(
            parse_declarations("$stack:   a ,  b  ;", Dialect::Scss),
            vec![Variable::new("stack", "a ,  b  ")]
        );
    }

    #[test]
    fn nested_declarations_are_found() {
        assert_eq!(
            parse_declarations(".a {\n  $local: 2px;\n  b: $local;\n}", Dialect::Scss),
            vec![Variable::new("local", "2px")]
        );
    }

    #[test]
    fn block_commented_declarations_are_skipped() {
        assert_eq!(
            parse_declarations("/* @a: 1; */\n@b: 2;", Dialect::Less),
            vec![Variable::new("b", "2")]
        );
    }

    #[test]
    fn no_declarations() {
        assert!(parse_declarations(".a { b: c; }", Dialect::Scss).is_empty());
    }
}
