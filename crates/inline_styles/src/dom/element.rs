//! The `<style>` node produced for a style input.

use std::borrow::Cow;
use std::fmt;

use inline_styles_shared::{MARKER_ATTRIBUTE, MARKER_VALUE, NONCE_ATTRIBUTE, STYLE_TAG};

use super::attributes::{ToAttribute, escape_attribute, is_valid_attribute_name};
use crate::css::input::StylesInput;
use crate::css::serialize::{Formatting, serialize_with};
use crate::css::trusted::TrustedCss;
use crate::error_handling::log_or_panic_assert;
use crate::nonce::{Nonce, NonceSource};

/// A `<style>` node, tagged with the marker attribute and optionally a nonce.
///
/// The body is emitted without any escaping, see [`TrustedCss`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct StyleElement {
    /// The nonce, if the source had one.
    nonce: Option<Nonce>,
    /// Extra attributes, in the order they were set.
    attributes: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// The raw body
    css: TrustedCss,
}

/// Build the `<style>` node for the input with the default formatting.
///
/// ```
/// use inline_styles::css::prelude::*;
/// use inline_styles::nonce::Nonce;
///
/// let input = StylesInput::new(".btn").style("color", "red");
/// let element = inline_styles::inline_styles(&input, &Nonce::from("r4nd0m"));
///
/// assert_eq!(
///     element.to_html(),
///     r#"<style data-inline-styles="inline" nonce="r4nd0m">.btn { color: red; }</style>"#
/// );
/// ```
pub fn inline_styles(input: &StylesInput, nonce: &impl NonceSource) -> StyleElement {
    inline_styles_with(input, nonce, Formatting::default())
}

/// Build the `<style>` node for the input with the given formatting.
pub fn inline_styles_with(
    input: &StylesInput,
    nonce: &impl NonceSource,
    formatting: Formatting,
) -> StyleElement {
    StyleElement::new(serialize_with(input, formatting)).nonce(nonce.nonce())
}

impl StyleElement {
    /// Create a style node without a nonce
    pub fn new(css: TrustedCss) -> Self {
        Self {
            nonce: None,
            attributes: Vec::new(),
            css,
        }
    }

    /// Set (or clear) the nonce
    pub fn nonce(mut self, nonce: Option<Nonce>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set a extra attribute, values converting to `None` are left off.
    ///
    /// The marker and nonce attributes are managed by this type and can not be set this way.
    /// Names are matched case insensitively, and names that are not valid html attribute names
    /// are ignored.
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl ToAttribute) -> Self {
        let name = name.into();
        let valid = is_valid_attribute_name(&name);
        log_or_panic_assert!(valid, "Attribute name {name:?} is not a valid html attribute name");
        if !valid {
            return self;
        }

        let reserved = name.eq_ignore_ascii_case(MARKER_ATTRIBUTE)
            || name.eq_ignore_ascii_case(NONCE_ATTRIBUTE);
        log_or_panic_assert!(!reserved, "Attribute `{name}` is reserved");
        if reserved {
            return self;
        }

        self.attributes.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        if let Some(value) = value.to_attribute() {
            self.attributes.push((name, value));
        }
        self
    }

    /// The nonce this node is tagged with
    #[must_use]
    pub fn get_nonce(&self) -> Option<&Nonce> {
        self.nonce.as_ref()
    }

    /// The css body
    #[must_use]
    pub fn css(&self) -> &TrustedCss {
        &self.css
    }

    /// All attributes in emit order, the marker first and the nonce second (if any).
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        let marker = std::iter::once((MARKER_ATTRIBUTE, MARKER_VALUE));
        let nonce = self
            .nonce
            .as_ref()
            .map(|nonce| (NONCE_ATTRIBUTE, nonce.as_str()));
        let extra = self
            .attributes
            .iter()
            .map(|(name, value)| (&**name, &**value));

        marker.chain(nonce).chain(extra)
    }

    /// Render as a html string.
    ///
    /// Attribute values are escaped, the css body is not.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{STYLE_TAG}")?;
        for (name, value) in self.attributes() {
            write!(f, " {name}=\"{}\"", escape_attribute(value))?;
        }
        write!(f, ">{}</{STYLE_TAG}>", self.css)
    }
}
