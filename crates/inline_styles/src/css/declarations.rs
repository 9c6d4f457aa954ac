//! Ordered css property declarations

use indexmap::IndexMap;

use super::IntoCss;

/// A insertion ordered map of css properties to their values.
///
/// The order properties are first set in is the order they are emitted in.
/// Setting a property a second time replaces the value but keeps the original position, so
/// `color: red` followed by `padding: 4px` and `color: blue` serializes as
/// `color: blue; padding: 4px;`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Declarations {
    /// The properties, in emit order.
    properties: IndexMap<String, String>,
}

impl Declarations {
    /// Create a empty declaration block
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property
    #[inline]
    pub fn set(mut self, property: impl Into<String>, value: impl IntoCss) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property if the value is `Some`, does nothing for `None`.
    #[inline]
    pub fn set_opt<V: IntoCss>(self, property: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    /// Set a property in place, returning the value it replaced (if any).
    pub fn insert(&mut self, property: impl Into<String>, value: impl IntoCss) -> Option<String> {
        let property = property.into();
        let value = value.into_css();
        let previous = self.properties.insert(property, value);
        if previous.is_some() {
            log::trace!("Overwrote existing css property");
        }
        previous
    }

    /// Get the value of a property
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// The amount of distinct properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Are there no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate the properties in emit order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }
}

// `IndexMap` equality ignores order, but order is observable in the output.
impl PartialEq for Declarations {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Declarations {}

impl<K: Into<String>, V: IntoCss> FromIterator<(K, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<K: Into<String>, V: IntoCss> Extend<(K, V)> for Declarations {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (property, value) in iter {
            self.insert(property, value);
        }
    }
}

impl<K: Into<String>, V: IntoCss, const N: usize> From<[(K, V); N]> for Declarations {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let styles = Declarations::new()
            .set("padding", "4px")
            .set("color", "red")
            .set("margin", 0);

        let properties: Vec<_> = styles.iter().map(|(property, _)| property).collect();
        assert_eq!(properties, ["padding", "color", "margin"]);
    }

    // Duplicate keys: the later value wins, the first position is kept.
    #[test]
    fn later_value_overrides_in_place() {
        let mut styles = Declarations::from([("color", "red"), ("padding", "4px")]);
        let previous = styles.insert("color", "blue");

        assert_eq!(previous.as_deref(), Some("red"));
        assert_eq!(styles.len(), 2);
        assert_eq!(
            styles.iter().collect::<Vec<_>>(),
            [("color", "blue"), ("padding", "4px")]
        );
    }

    #[test]
    fn set_opt_skips_none() {
        let styles = Declarations::new()
            .set_opt("color", Some("red"))
            .set_opt::<&str>("padding", None);

        assert_eq!(styles.get("color"), Some("red"));
        assert_eq!(styles.get("padding"), None);
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn equality_respects_order() {
        let first = Declarations::from([("color", "red"), ("margin", "0")]);
        let second = Declarations::from([("margin", "0"), ("color", "red")]);

        assert_ne!(first, second);
        assert_eq!(first, first.clone().set("color", "red"));
    }

    #[test]
    fn empty_by_default() {
        let styles = Declarations::default();
        assert!(styles.is_empty());
        assert_eq!(styles.iter().count(), 0);
    }

    proptest! {
        #[test]
        fn order_matches_first_insertion(
            keys in proptest::collection::vec("[a-z]{1,6}", 0..16)
        ) {
            let styles: Declarations = keys.iter().map(|key| (key.as_str(), "x")).collect();

            let mut expected: Vec<&str> = Vec::new();
            for key in &keys {
                if !expected.contains(&key.as_str()) {
                    expected.push(key);
                }
            }

            let actual: Vec<&str> = styles.iter().map(|(property, _)| property).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
