#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![forbid(unsafe_code)]

pub mod css;
pub mod dom;
mod error_handling;
pub mod nonce;
mod type_macros;

/// Commonly used types and traits.
pub mod prelude {
    pub use super::css::prelude::*;
    pub use super::dom::{StyleElement, ToAttribute, inline_styles, inline_styles_with};
    pub use super::nonce::{NoNonce, Nonce, NonceFn, NonceSource};
}

pub use css::serialize::{Formatting, serialize, serialize_with};
pub use css::{Declarations, StylesInput, TrustedCss};
pub use dom::{StyleElement, inline_styles, inline_styles_with};
pub use inline_styles_shared::{MARKER_ATTRIBUTE, MARKER_VALUE};
pub use nonce::{Nonce, NonceSource};

/// Log to the browser console.
///
/// # Errors
/// If a logger was already installed.
#[cfg(feature = "console_log")]
pub fn init_console_log(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(level)
}
