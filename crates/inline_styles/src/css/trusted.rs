//! Css text that is allowed to be injected verbatim

use std::fmt;

/// Css text that is trusted to be injected into a `<style>` node without escaping.
///
/// The serializer is the normal way to get one of these. It does not sanitize anything, so
/// whoever builds the `StylesInput` is responsible for not passing untrusted text into it.
/// In particular a value containing `</style>` would close the node early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct TrustedCss(String);

impl TrustedCss {
    /// Create a empty css text
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark arbitrary text as trusted css.
    ///
    /// Only use this for text that is already known to be safe, for example css embedded in the
    /// binary.
    pub fn assume_trusted(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Constructor for the serializer
    pub(crate) fn from_serializer(css: String) -> Self {
        Self(css)
    }

    /// Get the css text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this css empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the css text out
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TrustedCss {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrustedCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TrustedCss> for String {
    fn from(value: TrustedCss) -> Self {
        value.0
    }
}
