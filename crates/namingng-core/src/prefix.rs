//! Type-based name prefix requirements.

use std::collections::HashMap;

/// Maps a canonical type spelling to the prefix a name of that type must carry.
///
/// Lookups are exact: the symbol model canonicalises type spellings before
/// they reach this table (see [`crate::canonical_type`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    prefixes: HashMap<String, String>,
}

impl PrefixTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the prefix required for `type_spelling`.
    pub fn insert(&mut self, type_spelling: impl Into<String>, prefix: impl Into<String>) {
        self.prefixes.insert(type_spelling.into(), prefix.into());
    }

    /// Returns the prefix required for `type_spelling`, if any.
    #[must_use]
    pub fn prefix_for(&self, type_spelling: &str) -> Option<&str> {
        self.prefixes.get(type_spelling).map(String::as_str)
    }

    /// Returns the required prefix when `name` lacks it.
    #[must_use]
    pub fn missing_prefix(&self, type_spelling: &str, name: &str) -> Option<&str> {
        self.prefix_for(type_spelling)
            .filter(|prefix| !name.starts_with(prefix))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PrefixTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            prefixes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_type_match_only() {
        let table: PrefixTable = [("uint32_t", "ui32")].into_iter().collect();
        assert_eq!(table.prefix_for("uint32_t"), Some("ui32"));
        assert_eq!(table.prefix_for("uint32_t*"), None);
        assert_eq!(table.prefix_for("int"), None);
    }

    #[test]
    fn missing_prefix_reports_required_prefix() {
        let table: PrefixTable = [("uint32_t", "ui32")].into_iter().collect();
        assert_eq!(table.missing_prefix("uint32_t", "invalid_arg32"), Some("ui32"));
        assert_eq!(table.missing_prefix("uint32_t", "ui32_valid_arg"), None);
        assert_eq!(table.missing_prefix("int", "anything"), None);
    }
}
