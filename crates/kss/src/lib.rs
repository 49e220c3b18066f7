//! # kss - KSS documentation block splitter
//!
//! Splits stylesheet source into `(documentation, code)` pairs. A
//! documentation comment is any `//` run or `/* */` comment containing a
//! `Styleguide <reference>` line:
//!
//! ```scss
//! // Buttons
//! //
//! // .primary - Main action
//! //
//! // Styleguide 2.1
//!
//! .button { padding: $button-padding; }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let source = "\
//! // Comment1
//! // Styleguide 1.0
//!
//! .a { b: c }
//!
//! // Comment2
//! // Styleguide 2.0
//!
//! .x { y: z }";
//!
//! let blocks = kss::split(source);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].code, ".a { b: c }\n\n");
//! assert_eq!(blocks[1].reference(), Some("2.0"));
//! ```
//!
//! ## Modules
//!
//! - [`splitter`]: The block splitter state machine
//! - [`reference`]: `Styleguide` line recognition
//! - [`block`]: The [`KssBlock`] pair type
//! - [`modifier`]: Modifier entries listed in documentation comments

pub mod block;
pub mod modifier;
pub mod reference;
pub mod splitter;

pub use block::KssBlock;
pub use modifier::{Modifier, parse_modifiers};
pub use reference::{is_marker, reference};
pub use splitter::split;
