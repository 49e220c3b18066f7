//! # cssvars - SCSS/LESS variable extraction and rewriting
//!
//! Finds variable usages, parses variable declarations and rewrites
//! declaration values in stylesheet source, without disturbing anything
//! else in the text.
//!
//! ```scss
//! $primary-color: blue;
//! $spacing: 10px; // base unit
//!
//! .button {
//!     color: $primary-color;
//!     margin: $spacing;
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use csslex::Dialect;
//! use cssvars::{Variable, find_usages, parse_declarations, set_declarations};
//!
//! let source = "$primary: blue;\n$spacing:   10px; // base unit\n.button { margin: $spacing; }";
//!
//! assert_eq!(find_usages(source, Dialect::Scss), vec!["spacing"]);
//! assert_eq!(parse_declarations(source, Dialect::Scss)[1], Variable::new("spacing", "10px"));
//!
//! let edited = set_declarations(source, Dialect::Scss, &[Variable::new("spacing", "12px")]);
//! assert_eq!(edited, "$primary: blue;\n$spacing:   12px; // base unit\n.button { margin: $spacing; }");
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: The single-pass site scanner all operations share
//! - [`usages`]: [`find_usages`]
//! - [`declarations`]: [`parse_declarations`]
//! - [`rewriter`]: [`set_declarations`]
//! - [`modifiers`]: [`filter_prefixed`]
//! - [`engine`]: [`VariableParser`], a dialect-bound facade

pub mod declarations;
pub mod engine;
pub mod modifiers;
pub mod rewriter;
pub mod scanner;
pub mod usages;
mod variable;

pub use declarations::parse_declarations;
pub use engine::VariableParser;
pub use modifiers::filter_prefixed;
pub use rewriter::set_declarations;
pub use usages::find_usages;
pub use variable::Variable;
