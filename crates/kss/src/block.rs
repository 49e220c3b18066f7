//! The documentation/code pair produced by the splitter.

use crate::modifier::{Modifier, parse_modifiers};
use crate::reference::reference;

/// A documentation comment and the code it documents.
///
/// Both strings are owned copies of the source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KssBlock {
    /// The documentation comment, verbatim.
    pub kss: String,
    /// The code following the comment up to the next documentation comment.
    pub code: String,
}

impl KssBlock {
    pub fn new(kss: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kss: kss.into(),
            code: code.into(),
        }
    }

    /// The dotted `Styleguide` reference of this block, e.g. `"1.2"`.
    pub fn reference(&self) -> Option<&str> {
        reference(&self.kss)
    }

    /// Modifier entries listed in the documentation comment.
    pub fn modifiers(&self) -> Vec<Modifier> {
        parse_modifiers(&self.kss)
    }

    /// Consumes the block, returning `(documentation, code)`.
    pub fn into_pair(self) -> (String, String) {
        (self.kss, self.code)
    }
}

impl From<KssBlock> for (String, String) {
    fn from(block: KssBlock) -> Self {
        block.into_pair()
    }
}
