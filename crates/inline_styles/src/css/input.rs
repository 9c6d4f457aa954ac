//! The style description handed to the serializer

use super::IntoCss;
use super::declarations::Declarations;

/// A conditional group of styles, such as a `@media` or `@container` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct QueryBlock {
    /// The condition, without the at-keyword. For example `(min-width: 40em)`.
    pub query: String,
    /// The styles applied to the selector while the condition holds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: Declarations,
}

impl QueryBlock {
    /// Create a new query block
    #[must_use]
    pub fn new(query: impl Into<String>, styles: Declarations) -> Self {
        Self {
            query: query.into(),
            styles,
        }
    }
}

/// Styles for a single selector, with optional media and container query overrides.
///
/// ```
/// use inline_styles::css::prelude::*;
///
/// let input = StylesInput::new(".btn")
///     .style("color", "red")
///     .style("padding", "4px")
///     .media("(max-width: 40em)", Declarations::new().set("padding", "2px"));
///
/// assert_eq!(input.styles.len(), 2);
/// assert_eq!(input.media.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
#[must_use]
pub struct StylesInput {
    /// The selector every rule is emitted for.
    pub selector: String,
    /// The unconditional styles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: Declarations,
    /// `@media` blocks, emitted in order after the base rule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media: Vec<QueryBlock>,
    /// `@container` blocks, emitted in order after the media blocks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub container: Vec<QueryBlock>,
}

impl StylesInput {
    /// Create a input with no styles
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Set a base style property
    pub fn style(mut self, property: impl Into<String>, value: impl IntoCss) -> Self {
        self.styles.insert(property, value);
        self
    }

    /// Replace the base styles
    pub fn styles(mut self, styles: Declarations) -> Self {
        self.styles = styles;
        self
    }

    /// Add a `@media` block
    pub fn media(mut self, query: impl Into<String>, styles: Declarations) -> Self {
        self.media.push(QueryBlock::new(query, styles));
        self
    }

    /// Add a `@container` block
    pub fn container(mut self, query: impl Into<String>, styles: Declarations) -> Self {
        self.container.push(QueryBlock::new(query, styles));
        self
    }
}

#[cfg(all(test, feature = "serde"))]
#[expect(clippy::expect_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_property_order() {
        let input: StylesInput = serde_json::from_str(
            r#"{
                "selector": ".btn",
                "styles": {"padding": "4px", "color": "red"},
                "media": [{"query": "(max-width: 40em)", "styles": {"padding": "2px"}}]
            }"#,
        )
        .expect("Input to be valid");

        assert_eq!(input.selector, ".btn");
        assert_eq!(
            input.styles.iter().collect::<Vec<_>>(),
            [("padding", "4px"), ("color", "red")]
        );
        assert_eq!(input.media.len(), 1);
        assert!(input.container.is_empty());
    }

    #[test]
    fn deserialize_duplicate_property_keeps_last_value() {
        let input: StylesInput = serde_json::from_str(
            r#"{"selector": "a", "styles": {"color": "red", "margin": "0", "color": "blue"}}"#,
        )
        .expect("Input to be valid");

        assert_eq!(
            input.styles.iter().collect::<Vec<_>>(),
            [("color", "blue"), ("margin", "0")]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<StylesInput>(r#"{"selector": "a", "colour": "red"}"#);
        assert!(result.is_err());
    }
}
