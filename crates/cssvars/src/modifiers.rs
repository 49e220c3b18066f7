//! Variables among KSS modifier entries.

use csslex::{Named, Prefixes};

/// Returns the prefix-stripped names of the entries that are variables.
///
/// Entries whose name starts with `$` or `@` are variables, whichever
/// dialect the caller otherwise uses; everything else (`.modifier`,
/// `:hover`) is skipped. `None` yields an empty list.
///
/// # Examples
///
/// ```
/// let entries = ["$var1", ".modifier", "@var2"];
/// assert_eq!(cssvars::filter_prefixed(Some(entries)), vec!["var1", "var2"]);
/// assert!(cssvars::filter_prefixed(None::<Vec<String>>).is_empty());
/// ```
pub fn filter_prefixed<I>(entries: Option<I>) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Named,
{
    entries
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            Prefixes::ALL
                .strip(entry.name())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_of_mixed_prefixes() {
        let entries = vec!["@b".to_string(), "$a".to_string(), ".c".to_string()];
        assert_eq!(filter_prefixed(Some(&entries)), vec!["b", "a"]);
    }

    #[test]
    fn no_variables() {
        assert!(filter_prefixed(Some([".modifier"])).is_empty());
    }

    #[test]
    fn bare_prefix_is_skipped() {
        assert!(filter_prefixed(Some(["$", "@"])).is_empty());
    }
}
