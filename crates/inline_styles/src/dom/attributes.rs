//! Convert various values to html attributes

use std::borrow::Cow;

use crate::nonce::Nonce;
use crate::type_macros;

/// A trait for using a arbitrary type as a attribute value.
///
/// `None` means the attribute is left off entirely.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid attribute value.",
    note = "Try converting the value to a string"
)]
pub trait ToAttribute {
    /// Return the attribute value, or `None` to omit the attribute.
    fn to_attribute(self) -> Option<Cow<'static, str>>;
}

/// generate a `ToAttribute` implementation for a string type
macro_rules! attribute_string {
    ($t:ty, $cow:expr) => {
        impl ToAttribute for $t {
            #[inline]
            fn to_attribute(self) -> Option<Cow<'static, str>> {
                Some(($cow)(self))
            }
        }
    };
}

type_macros::strings_cow!(attribute_string);

/// generate `ToAttribute` for a numeric
macro_rules! attribute_numeric {
    ($t:ident, $fmt:ident) => {
        impl ToAttribute for $t {
            #[inline]
            fn to_attribute(self) -> Option<Cow<'static, str>> {
                let mut buffer = $fmt::Buffer::new();
                let result = buffer.format(self);

                Some(Cow::from(result.to_string()))
            }
        }
    };
}

type_macros::numerics!(attribute_numeric);

impl ToAttribute for char {
    #[inline]
    fn to_attribute(self) -> Option<Cow<'static, str>> {
        Some(Cow::from(self.to_string()))
    }
}

impl ToAttribute for bool {
    #[inline]
    fn to_attribute(self) -> Option<Cow<'static, str>> {
        self.then(|| Cow::from(""))
    }
}

impl ToAttribute for Nonce {
    #[inline]
    fn to_attribute(self) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(self.as_str().to_owned()))
    }
}

impl<T: ToAttribute> ToAttribute for Option<T> {
    #[inline]
    fn to_attribute(self) -> Option<Cow<'static, str>> {
        self.and_then(ToAttribute::to_attribute)
    }
}

impl<T: ToAttribute, E: ToAttribute> ToAttribute for Result<T, E> {
    #[inline]
    fn to_attribute(self) -> Option<Cow<'static, str>> {
        match self {
            Ok(inner) => inner.to_attribute(),
            Err(inner) => inner.to_attribute(),
        }
    }
}

/// Can this be written as a html attribute name without breaking the markup.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_ascii_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

/// Escape a value for use inside a double quoted html attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut result = String::with_capacity(value.len().saturating_add(8));
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn simple_values() {
        assert_eq!(true.to_attribute().as_deref(), Some(""));
        assert_eq!(false.to_attribute(), None);
        assert_eq!("hello".to_attribute().as_deref(), Some("hello"));
        assert_eq!(Some("hello").to_attribute().as_deref(), Some("hello"));
        assert_eq!(None::<u8>.to_attribute(), None);
        assert_eq!(12u8.to_attribute().as_deref(), Some("12"));
        assert_eq!(
            Err::<&'static str, u8>(4).to_attribute().as_deref(),
            Some("4")
        );
        assert_eq!(Nonce::from("abc").to_attribute().as_deref(), Some("abc"));
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_attribute("plain"), Cow::Borrowed("plain"));
        assert_eq!(escape_attribute(r#"a"b<c>&d"#), "a&quot;b&lt;c&gt;&amp;d");
    }

    #[test]
    fn attribute_names() {
        assert!(is_valid_attribute_name("media"));
        assert!(is_valid_attribute_name("data-theme"));
        assert!(is_valid_attribute_name("aria-label"));

        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("two words"));
        assert!(!is_valid_attribute_name("tab\tname"));
        assert!(!is_valid_attribute_name("x\"><script>"));
        assert!(!is_valid_attribute_name("it's"));
        assert!(!is_valid_attribute_name("a/b"));
        assert!(!is_valid_attribute_name("a=b"));
    }

    proptest! {
        #[test]
        fn escaped_never_closes_quote(value: String) {
            let escaped = escape_attribute(&value);
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('<'));
        }

        #[test]
        fn valid_names_never_break_out(name: String) {
            if is_valid_attribute_name(&name) {
                prop_assert!(!name.contains(['"', '\'', '>', '=', ' ']));
            }
        }
    }
}
