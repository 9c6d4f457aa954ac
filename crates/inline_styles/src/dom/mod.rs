//! The markup node carrying the generated css.

pub mod attributes;
pub mod element;
#[cfg(feature = "web")]
pub mod web;

pub use attributes::ToAttribute;
pub use element::{StyleElement, inline_styles, inline_styles_with};
