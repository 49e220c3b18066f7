//! # styleguide - style guide extraction for SCSS and LESS
//!
//! Two independent engines over stylesheet text:
//!
//! - [`kss`]: splits a stylesheet into documentation/code blocks keyed by
//!   `Styleguide <reference>` comments.
//! - [`cssvars`]: finds variable usages, parses declarations and rewrites
//!   declaration values in place.
//!
//! Both share the lexical layer in [`csslex`].
//!
//! ```rust
//! use styleguide::{Dialect, Variable, split, parse_declarations};
//!
//! let source = "// Colors\n// Styleguide 1.0\n\n$brand: #c00;\n.brand { color: $brand; }\n";
//!
//! let blocks = split(source);
//! assert_eq!(blocks[0].code, "$brand: #c00;\n.brand { color: $brand; }\n");
//!
//! let vars = parse_declarations(&blocks[0].code, Dialect::Scss);
//! assert_eq!(vars, vec![Variable::new("brand", "#c00")]);
//! ```

pub use csslex::{self, CsslexError as Error, Dialect, Named, Prefixes, SourceText};
pub use cssvars::{
    self, Variable, VariableParser, filter_prefixed, find_usages, parse_declarations,
    set_declarations,
};
pub use kss::{self, KssBlock, Modifier, split};
