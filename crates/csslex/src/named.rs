//! Name-bearing entries.
//!
//! Lists handed to the extractors are heterogeneous: KSS modifier entries,
//! parsed variables, or plain strings. All that matters to a filter is the
//! entry's name.

/// An entry with a name, such as `$var1` or `.modifier`.
pub trait Named {
    /// The entry's name as written in the source, prefix included.
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}
