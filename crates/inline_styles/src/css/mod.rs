//! Turn style descriptions into css text

// NOTE:
// Nothing in here validates css. Selectors, property names, values and queries are copied into
// the output as is.

pub mod declarations;
pub mod input;
pub mod serialize;
pub mod stylesheet;
pub mod trusted;

pub use declarations::Declarations;
pub use input::{QueryBlock, StylesInput};
pub use trusted::TrustedCss;

use crate::type_macros;

/// Css prelude
pub mod prelude {
    pub use super::declarations::Declarations;
    pub use super::input::{QueryBlock, StylesInput};
    pub use super::serialize::{Formatting, serialize, serialize_with};
    pub use super::stylesheet::StyleSheet;
    pub use super::trusted::TrustedCss;
    pub use super::IntoCss;
}

/// Convert a value to css
pub trait IntoCss {
    /// Convert a value to a css value string
    fn into_css(self) -> String;
}

/// generate `IntoCss` for a string type
macro_rules! impl_strings {
    ($t:ty, $cow:expr) => {
        impl IntoCss for $t {
            #[inline]
            fn into_css(self) -> String {
                let cow: ::std::borrow::Cow<'static, str> = ($cow)(self);
                cow.into_owned()
            }
        }
    };
}
type_macros::strings_cow!(impl_strings);

impl IntoCss for &String {
    #[inline]
    fn into_css(self) -> String {
        self.clone()
    }
}

impl IntoCss for char {
    #[inline]
    fn into_css(self) -> String {
        self.to_string()
    }
}

/// generate `IntoCss` for a numeric
macro_rules! impl_numerics {
    ($t:ident, $fmt:ident) => {
        impl IntoCss for $t {
            #[inline]
            fn into_css(self) -> String {
                let mut buffer = $fmt::Buffer::new();
                let result = buffer.format(self);
                result.to_string()
            }
        }
    };
}
type_macros::numerics!(impl_numerics);

/// Check if a string is valid css
#[cfg(all(test, not(target_arch = "wasm32")))]
#[expect(clippy::panic, clippy::expect_used, reason = "This is meant for tests")]
pub(crate) fn assert_valid_css(string: &str) {
    let warnings = std::sync::Arc::default();
    let result = lightningcss::stylesheet::StyleSheet::parse(
        string,
        lightningcss::stylesheet::ParserOptions {
            warnings: Some(std::sync::Arc::clone(&warnings)),
            error_recovery: false,
            ..Default::default()
        },
    );

    match result {
        Err(error) => {
            panic!("The following code was not valid css\n{string}\nerror: {error}");
        }

        Ok(stylesheet) => {
            let warnings = warnings.read().expect("Failed to get lock");
            if !warnings.is_empty() {
                for warning in warnings.iter() {
                    eprintln!("{warning}");
                }
                panic!("The following code produced warnings\n{string}");
            }

            let debug_reps = format!("{stylesheet:?}");
            assert!(
                !debug_reps.contains("Unparsed"),
                "Found indications of invalid css\n{string}\n{stylesheet:?}"
            );
        }
    }
}
