//! Single-pass variable site scanner.
//!
//! Walks stylesheet text once with a cursor and reports every variable
//! *site*: either a declaration (`$name: value;` at the start of a
//! statement) or a usage (any other `$name` / `@name`). Sites carry byte
//! ranges into the source so callers can slice names and values out, or
//! splice new values in without touching anything else.
//!
//! The scanner tracks just enough context to classify sites locally:
//!
//! - whether the cursor is at the start of a statement (after `;`, `{` or
//!   `}`, ignoring whitespace and comments),
//! - open string literals, where comment markers are plain text,
//! - parenthesis depth, so `url(http://...)` is not a line comment and
//!   `url(data:...;base64,...)` does not end a statement,
//! - `#{...}` interpolation, which is not a block.
//!
//! A `<prefix>name:` that never reaches its `;` is dropped, and the next line
//! starts a fresh statement so the declarations below it still classify.

use std::ops::Range;

use csslex::{Dialect, is_ident_char};

/// CSS at-rules that may be written glued to a parenthesis, such as
/// `@media(min-width: 10px)`. Any other `@name(` in LESS calls a detached
/// ruleset or mixin held in a variable.
const PAREN_AT_RULES: &[&str] = &["media", "supports", "container", "import", "document"];

/// A `<prefix>name: value;` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationSite {
    pub prefix: char,
    /// The identifier, without prefix.
    pub name: Range<usize>,
    /// From the first non-whitespace character after the colon up to (not
    /// including) the terminating semicolon.
    pub value: Range<usize>,
}

/// A variable reference outside of any declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageSite {
    pub prefix: char,
    /// The identifier, without prefix.
    pub name: Range<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Site {
    Declaration(DeclarationSite),
    Usage(UsageSite),
}

/// Iterator over the variable sites of a stylesheet, in source order.
///
/// # Examples
///
/// ```
/// use cssvars::scanner::{Scanner, Site};
///
/// let source = "$gap: 4px;\n.a { margin: $gap; }";
/// let sites: Vec<_> = Scanner::new(source).collect();
/// assert!(matches!(sites[0], Site::Declaration(_)));
/// assert!(matches!(sites[1], Site::Usage(_)));
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    dialect: Dialect,
    pos: usize,
    statement_start: bool,
    /// Set after an abandoned declaration: the next newline outside
    /// parentheses starts a statement.
    restart_at_newline: bool,
    paren_depth: usize,
    interpolation_depth: usize,
    quote: Option<char>,
    /// Offset of a `/*` that has no closing `*/` anywhere after it.
    unterminated_from: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_dialect(input, Dialect::default())
    }

    /// Scanner that classifies dialect-specific forms, such as LESS
    /// detached-ruleset calls, the way `dialect` reads them.
    pub fn with_dialect(input: &'a str, dialect: Dialect) -> Self {
        Self {
            input,
            dialect,
            pos: 0,
            statement_start: true,
            restart_at_newline: false,
            paren_depth: 0,
            interpolation_depth: 0,
            quote: None,
            unterminated_from: None,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Moves the cursor to the end of the line without consuming the newline.
    fn skip_line_comment(&mut self) {
        self.pos = match self.remaining().find('\n') {
            Some(nl) => self.pos + nl,
            None => self.input.len(),
        };
    }

    /// End offset of the block comment opening at `at`, if it is closed.
    fn block_comment_end(&mut self, at: usize) -> Option<usize> {
        if self.unterminated_from.is_some_and(|from| at >= from) {
            return None;
        }
        match self.input[at + 2..].find("*/") {
            Some(close) => Some(at + 2 + close + 2),
            None => {
                self.unterminated_from = Some(at);
                None
            }
        }
    }

    /// If the next non-whitespace character at or after `from` is a colon,
    /// returns the offset just past it.
    fn colon_after(&self, from: usize) -> Option<usize> {
        let rest = &self.input[from..];
        let trimmed = rest.trim_start();
        trimmed
            .starts_with(':')
            .then(|| from + (rest.len() - trimmed.len()) + 1)
    }

    /// Whether the line starting at `at` opens with `<prefix>name:`, after
    /// horizontal whitespace.
    fn declaration_line_at(&self, at: usize) -> bool {
        let line = self.input[at..].trim_start_matches([' ', '\t']);
        let Some(name) = line.strip_prefix(['$', '@']) else {
            return false;
        };
        let ident = name.len() - name.trim_start_matches(is_ident_char).len();
        ident > 0 && name[ident..].trim_start().starts_with(':')
    }

    /// Scans a declaration value starting right after its colon.
    ///
    /// Returns `None` if a block brace, the end of input, or a line opening
    /// another declaration comes before the terminating semicolon, in which
    /// case the statement is not a declaration. Braces end the look-ahead even inside parentheses, so it
    /// never runs past a point where the main scan starts a new statement.
    fn declaration_value(&mut self, after_colon: usize) -> Option<Range<usize>> {
        let input = self.input;
        let bytes = input.as_bytes();
        let rest = &input[after_colon..];
        let start = after_colon + (rest.len() - rest.trim_start().len());

        let mut quote: Option<u8> = None;
        let mut parens = 0usize;
        let mut interpolation = 0usize;
        let mut at = start;
        while at < bytes.len() {
            let b = bytes[at];
            if let Some(q) = quote {
                match b {
                    b'\\' => at += 1,
                    b'\n' => quote = None,
                    _ if b == q => quote = None,
                    _ => {}
                }
                at += 1;
                continue;
            }
            match b {
                b'\\' => at += 1,
                b'"' | b'\'' => quote = Some(b),
                b'(' => parens += 1,
                b')' => parens = parens.saturating_sub(1),
                b'#' if bytes.get(at + 1) == Some(&b'{') => {
                    interpolation += 1;
                    at += 1;
                }
                b'}' if interpolation > 0 => interpolation -= 1,
                b'{' | b'}' => return None,
                b';' if parens == 0 => return Some(start..at),
                b'\n'
                    if parens == 0 && interpolation == 0 && self.declaration_line_at(at + 1) =>
                {
                    return None;
                }
                b'/' if bytes.get(at + 1) == Some(&b'*') => {
                    if let Some(end) = self.block_comment_end(at) {
                        at = end;
                        continue;
                    }
                }
                b'/' if parens == 0 && bytes.get(at + 1) == Some(&b'/') => {
                    at += input[at..].find('\n').unwrap_or(input.len() - at);
                    continue;
                }
                _ => {}
            }
            at += 1;
        }
        None
    }

    /// Classifies the `$`/`@` at the cursor. Always consumes the prefix and
    /// any identifier following it.
    fn variable(&mut self, prefix: char) -> Option<Site> {
        let at = self.pos;
        let glued = self.input[..at].chars().next_back().is_some_and(is_ident_char);
        self.advance();

        let name_start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.advance();
        }
        let name = name_start..self.pos;

        let statement_start = std::mem::replace(&mut self.statement_start, false);
        if glued || name.is_empty() {
            return None;
        }

        if self.quote.is_none() && statement_start {
            if let Some(after_colon) = self.colon_after(self.pos) {
                let Some(value) = self.declaration_value(after_colon) else {
                    log::trace!("abandoned declaration {prefix}{}", &self.input[name]);
                    self.restart_at_newline = true;
                    return None;
                };
                log::trace!(
                    "declaration {prefix}{} = {:?}",
                    &self.input[name.clone()],
                    &self.input[value.clone()]
                );
                self.pos = value.end + 1;
                self.statement_start = true;
                return Some(Site::Declaration(DeclarationSite {
                    prefix,
                    name,
                    value,
                }));
            }
            if prefix == '@' && !self.ruleset_call(name.clone()) {
                // At-rule such as `@media`, `@include` or `@import`.
                return None;
            }
        }

        log::trace!("usage {prefix}{}", &self.input[name.clone()]);
        Some(Site::Usage(UsageSite { prefix, name }))
    }

    /// `@name(` at statement start in LESS, other than a CSS at-rule.
    fn ruleset_call(&self, name: Range<usize>) -> bool {
        self.dialect == Dialect::Less
            && self.peek() == Some('(')
            && !PAREN_AT_RULES.contains(&self.input[name].to_ascii_lowercase().as_str())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Site;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.peek() {
            if let Some(q) = self.quote {
                match c {
                    '\\' => {
                        self.advance();
                    }
                    '\n' => self.quote = None,
                    '$' | '@' => {
                        if let Some(site) = self.variable(c) {
                            return Some(site);
                        }
                        continue;
                    }
                    _ if c == q => self.quote = None,
                    _ => {}
                }
                self.advance();
                continue;
            }

            let rest = self.remaining();
            match c {
                '$' | '@' => {
                    if let Some(site) = self.variable(c) {
                        return Some(site);
                    }
                    continue;
                }
                '/' if rest.starts_with("//") && self.paren_depth == 0 => {
                    self.skip_line_comment();
                    continue;
                }
                '/' if rest.starts_with("/*") => {
                    if let Some(end) = self.block_comment_end(self.pos) {
                        self.pos = end;
                        continue;
                    }
                    self.statement_start = false;
                }
                '\\' => {
                    self.advance();
                    self.statement_start = false;
                }
                '"' | '\'' => {
                    self.quote = Some(c);
                    self.statement_start = false;
                }
                '(' => {
                    self.paren_depth += 1;
                    self.statement_start = false;
                }
                ')' => self.paren_depth = self.paren_depth.saturating_sub(1),
                '#' if rest.starts_with("#{") => {
                    self.interpolation_depth += 1;
                    self.statement_start = false;
                    self.advance();
                }
                '}' if self.interpolation_depth > 0 => self.interpolation_depth -= 1,
                '{' | '}' => {
                    self.paren_depth = 0;
                    self.statement_start = true;
                    self.restart_at_newline = false;
                }
                ';' if self.paren_depth == 0 => {
                    self.statement_start = true;
                    self.restart_at_newline = false;
                }
                '\n' if self.restart_at_newline && self.paren_depth == 0 => {
                    self.statement_start = true;
                    self.restart_at_newline = false;
                }
                c if c.is_whitespace() => {}
                _ => self.statement_start = false,
            }
            self.advance();
        }
        None
    }
}
