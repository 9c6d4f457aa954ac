//! Several style inputs combined into one css text

use super::input::StylesInput;
use super::serialize::{Formatting, serialize_with};
use super::trusted::TrustedCss;

/// A css stylesheet, the sections are emitted in the order they were added.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// The formatting used for new sections
    formatting: Formatting,
    /// Already serialized sections of css, with the formatting they were added under
    pub(crate) sections: Vec<(Formatting, TrustedCss)>,
}

impl StyleSheet {
    /// Create a new stylesheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatting used for sections added after this call.
    ///
    /// Earlier sections keep their own formatting. Two sections are put on separate lines if
    /// either of them is `Spaced`.
    pub fn formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    /// Add a already trusted section to the css
    pub fn raw(mut self, raw: TrustedCss) -> Self {
        self.sections.push((self.formatting, raw));
        self
    }

    /// Serialize and add a style input to the stylesheet
    pub fn styles(mut self, input: &StylesInput) -> Self {
        let css = serialize_with(input, self.formatting);
        self.sections.push((self.formatting, css));
        self
    }

    /// Convert this to css
    pub fn to_css(&self) -> TrustedCss {
        let mut result = String::new();
        let mut previous: Option<Formatting> = None;
        for (formatting, css) in &self.sections {
            if let Some(previous) = previous {
                result.push_str(joining_separator(previous, *formatting));
            }
            result.push_str(css.as_str());
            previous = Some(*formatting);
        }
        TrustedCss::from_serializer(result)
    }
}

/// The separator between two neighbouring sections
fn joining_separator(previous: Formatting, next: Formatting) -> &'static str {
    let separator = previous.separator();
    if separator.is_empty() {
        next.separator()
    } else {
        separator
    }
}

impl<'a> FromIterator<&'a StylesInput> for StyleSheet {
    fn from_iter<T: IntoIterator<Item = &'a StylesInput>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), StyleSheet::styles)
    }
}
