//! Decoding raw bytes into stylesheet text.
//!
//! The extractors operate on `&str`. Callers that read files hand over
//! bytes, and binary input is the one case that is reported as an error
//! rather than producing an empty result.

use std::ops::Deref;

use crate::error::CsslexError;

/// Stylesheet source text, borrowed from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceText<'a>(&'a str);

impl<'a> SourceText<'a> {
    /// Wraps text that is already known to be valid.
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }

    /// Decodes UTF-8 bytes, skipping a leading byte order mark.
    ///
    /// # Errors
    ///
    /// Returns [`CsslexError::NotText`] if the bytes are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csslex::SourceText;
    ///
    /// let text = SourceText::from_bytes(b"\xEF\xBB\xBF$a: 1;").unwrap();
    /// assert_eq!(text.as_str(), "$a: 1;");
    /// assert!(SourceText::from_bytes(&[0xff, 0xfe, 0x00]).is_err());
    /// ```
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, CsslexError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self(text.strip_prefix('\u{feff}').unwrap_or(text)))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Deref for SourceText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for SourceText<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_utf8() {
        let text = SourceText::from_bytes("$c: #fff;".as_bytes()).unwrap();
        assert_eq!(&*text, "$c: #fff;");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = SourceText::from_bytes(&[b'$', 0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, CsslexError::NotText(_)));
    }
}
