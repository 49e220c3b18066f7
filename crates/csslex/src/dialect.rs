//! Stylesheet dialects and the variable prefixes they use.
//!
//! SCSS marks variables with `$` (`$primary: blue;`), LESS with `@`
//! (`@primary: blue;`). Everything else about the two syntaxes that the
//! extractors care about (comments, statement separators) is shared.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::CsslexError;

/// Which variable syntax a stylesheet uses.
///
/// The default is [`Dialect::Scss`]. Strict parsing goes through
/// [`FromStr`]; [`Dialect::from_name`] is the permissive variant that falls
/// back to the default for unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `$name` variables (SCSS and indented Sass).
    #[default]
    Scss,
    /// `@name` variables.
    Less,
}

impl Dialect {
    /// The character that introduces a variable in this dialect.
    pub fn prefix(self) -> char {
        match self {
            Dialect::Scss => '$',
            Dialect::Less => '@',
        }
    }

    /// The canonical lowercase name of the dialect.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Scss => "scss",
            Dialect::Less => "less",
        }
    }

    /// Selects a dialect by name, falling back to the default when the name
    /// is not recognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csslex::Dialect;
    ///
    /// assert_eq!(Dialect::from_name("LESS"), Dialect::Less);
    /// assert_eq!(Dialect::from_name(""), Dialect::Scss);
    /// ```
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unrecognized dialect {name:?}, using {}", Dialect::default());
            Dialect::default()
        })
    }

    /// Selects a dialect from a file extension such as `"less"` or `".scss"`.
    pub fn from_extension(ext: &str) -> Self {
        Self::from_name(ext.trim_start_matches('.'))
    }
}

impl FromStr for Dialect {
    type Err = CsslexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scss" | "sass" => Ok(Dialect::Scss),
            "less" => Ok(Dialect::Less),
            _ => Err(CsslexError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of recognized variable prefix characters.
    ///
    /// Call sites that may see either syntax (KSS modifier lists, mixed
    /// sources) use [`Prefixes::ALL`]; single-dialect call sites convert from
    /// a [`Dialect`].
    ///
    /// # Example
    ///
    /// ```
    /// use csslex::{Dialect, Prefixes};
    ///
    /// let scss = Prefixes::from(Dialect::Scss);
    /// assert!(scss.matches('$'));
    /// assert!(!scss.matches('@'));
    /// assert_eq!(Prefixes::ALL.strip("@gutter"), Some("gutter"));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Prefixes: u8 {
        /// `$` (SCSS)
        const DOLLAR = 0b01;
        /// `@` (LESS)
        const AT     = 0b10;
        /// Either prefix
        const ALL    = Self::DOLLAR.bits() | Self::AT.bits();
    }
}

impl Prefixes {
    /// Returns the flag for a prefix character, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '$' => Some(Prefixes::DOLLAR),
            '@' => Some(Prefixes::AT),
            _ => None,
        }
    }

    /// Returns true if `c` is one of the prefixes in this set.
    pub fn matches(self, c: char) -> bool {
        Self::from_char(c).is_some_and(|flag| self.contains(flag))
    }

    /// Strips one leading prefix from `name` if it belongs to this set.
    pub fn strip(self, name: &str) -> Option<&str> {
        let first = name.chars().next()?;
        if self.matches(first) {
            Some(&name[first.len_utf8()..])
        } else {
            None
        }
    }
}

impl From<Dialect> for Prefixes {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Scss => Prefixes::DOLLAR,
            Dialect::Less => Prefixes::AT,
        }
    }
}
