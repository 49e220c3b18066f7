//! # csslex - shared lexical layer for stylesheet dialects
//!
//! The documentation splitter and the variable engine are independent, but
//! both need to agree on two things:
//!
//! - **Dialects**: which prefix character marks a variable (`$` for SCSS,
//!   `@` for LESS). See [`Dialect`] and [`Prefixes`].
//! - **Comments**: where `//` line-comment runs and `/* */` block comments
//!   begin and end. See [`Lexer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use csslex::{Dialect, Lexer, SegmentKind};
//!
//! let source = "// Styleguide 1.0\n.a { b: c }";
//! let kinds: Vec<_> = Lexer::new(source).map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SegmentKind::LineComments, SegmentKind::Code]);
//!
//! assert_eq!(Dialect::from_name("less").prefix(), '@');
//! assert_eq!(Dialect::from_name("stylus"), Dialect::Scss);
//! ```
//!
//! ## Modules
//!
//! - [`dialect`]: Dialect selection and prefix sets
//! - [`lexer`]: Comment/code segmentation
//! - [`named`]: The [`Named`] trait for name-bearing entries
//! - [`source`]: Decoding raw bytes into source text
//! - [`error`]: Error types

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod named;
pub mod source;

pub use dialect::{Dialect, Prefixes};
pub use error::CsslexError;
pub use lexer::{Lexer, Segment, SegmentKind};
pub use named::Named;
pub use source::SourceText;

/// Returns true for characters that may appear in a variable identifier.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
