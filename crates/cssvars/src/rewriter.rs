//! Format-preserving declaration rewriting.
//!
//! Rewrites splice new values into the byte ranges recorded by the scanner.
//! Text is never re-serialized, so indentation, alignment whitespace and
//! comments survive untouched.

use std::collections::HashMap;

use csslex::Dialect;

use crate::declarations::declaration_sites;
use crate::variable::Variable;

/// Replaces the values of the declarations named in `edits`.
///
/// Every declaration of a matching name is rewritten; only its value range
/// changes. Edits naming undeclared variables are ignored. When `edits`
/// names a variable twice, the later entry wins. New values are inserted
/// verbatim.
///
/// # Examples
///
/// ```
/// use csslex::Dialect;
/// use cssvars::Variable;
///
/// let source = "$mycolor: #00ff00;\n$mypadding: 3px;";
/// let edits = [Variable::new("mypadding", "5px")];
/// assert_eq!(
///     cssvars::set_declarations(source, Dialect::Scss, &edits),
///     "$mycolor: #00ff00;\n$mypadding: 5px;"
/// );
/// ```
pub fn set_declarations(source: &str, dialect: Dialect, edits: &[Variable]) -> String {
    let replacements: HashMap<&str, &str> = edits
        .iter()
        .map(|edit| (edit.name.as_str(), edit.value.as_str()))
        .collect();
    if replacements.is_empty() {
        return source.to_string();
    }

    let mut output = String::with_capacity(source.len());
    let mut copied = 0;
    let mut rewritten = 0usize;
    for decl in declaration_sites(source, dialect) {
        let Some(value) = replacements.get(&source[decl.name]) else {
            continue;
        };
        output.push_str(&source[copied..decl.value.start]);
        output.push_str(value);
        copied = decl.value.end;
        rewritten += 1;
    }
    output.push_str(&source[copied..]);

    log::debug!("rewrote {rewritten} {dialect} declarations");
    output
}
