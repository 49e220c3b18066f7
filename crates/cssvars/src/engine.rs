//! A dialect-bound facade over the free functions.

use csslex::Dialect;

use crate::variable::Variable;
use crate::{declarations, rewriter, usages};

/// Variable engine configured for one dialect.
///
/// # Examples
///
/// ```
/// use cssvars::{Variable, VariableParser};
///
/// let parser = VariableParser::for_extension("less");
/// let source = "@gutter: 10px;\n.col { padding: @gutter; }";
///
/// assert_eq!(parser.parse_declarations(source), vec![Variable::new("gutter", "10px")]);
/// assert_eq!(parser.find_usages(source), vec!["gutter"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariableParser {
    dialect: Dialect,
}

impl VariableParser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Picks the dialect from a file extension, defaulting to SCSS.
    pub fn for_extension(ext: &str) -> Self {
        Self::new(Dialect::from_extension(ext))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn find_usages(&self, source: &str) -> Vec<String> {
        usages::find_usages(source, self.dialect)
    }

    pub fn parse_declarations(&self, source: &str) -> Vec<Variable> {
        declarations::parse_declarations(source, self.dialect)
    }

    pub fn set_declarations(&self, source: &str, edits: &[Variable]) -> String {
        rewriter::set_declarations(source, self.dialect, edits)
    }
}

impl From<Dialect> for VariableParser {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}
