//! Content security policy nonces
//!
//! There is no global nonce. Whatever renders the `<style>` node is handed a `NonceSource`
//! explicitly, and asks it for a nonce once per render.

use std::fmt;
use std::sync::Arc;

/// A content security policy nonce.
///
/// The value is emitted as is (attribute escaped) in the `nonce` attribute, it is not validated.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Nonce(Arc<str>);

impl Nonce {
    /// Wrap a nonce value
    #[must_use]
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    /// Get the nonce value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Nonces end up in logs, dont print the value.
impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce(..)")
    }
}

impl From<&str> for Nonce {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Nonce {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Something that can provide a nonce at render time.
///
/// A source without a nonce returns `None`, this is not a error.
pub trait NonceSource {
    /// Get the nonce to tag the current render with
    fn nonce(&self) -> Option<Nonce>;
}

/// A source that never has a nonce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoNonce;

impl NonceSource for NoNonce {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        None
    }
}

impl NonceSource for Nonce {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        Some(self.clone())
    }
}

impl<T: NonceSource> NonceSource for Option<T> {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        self.as_ref().and_then(NonceSource::nonce)
    }
}

impl<T: NonceSource + ?Sized> NonceSource for &T {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        (**self).nonce()
    }
}

impl<T: NonceSource + ?Sized> NonceSource for Box<T> {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        (**self).nonce()
    }
}

impl<T: NonceSource + ?Sized> NonceSource for Arc<T> {
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        (**self).nonce()
    }
}

/// A nonce provider function, called on every render.
///
/// This mirrors providers that hand out a fresh nonce per request.
#[derive(Clone, Copy)]
pub struct NonceFn<F>(pub F);

impl<F> NonceSource for NonceFn<F>
where
    F: Fn() -> Option<Nonce>,
{
    #[inline]
    fn nonce(&self) -> Option<Nonce> {
        (self.0)()
    }
}
