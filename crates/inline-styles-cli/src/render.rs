//! Turn the inputs into the final output

use inline_styles::css::stylesheet::StyleSheet;
use inline_styles::{StyleElement, StylesInput, TrustedCss};

use crate::options::Settings;

/// What to print
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Output {
    /// The full `<style>` node
    Element,
    /// Only the css
    Css,
}

/// Render every input into a single stylesheet
pub(crate) fn render(inputs: &[StylesInput], settings: &Settings, output: Output) -> String {
    let css = stylesheet(inputs, settings);
    match output {
        Output::Css => css.into_string(),
        Output::Element => element(css, settings).to_html(),
    }
}

/// Serialize all inputs into one css text
fn stylesheet(inputs: &[StylesInput], settings: &Settings) -> TrustedCss {
    let sheet = StyleSheet::new().formatting(settings.formatting);
    inputs.iter().fold(sheet, StyleSheet::styles).to_css()
}

/// Wrap the css in the `<style>` node
fn element(css: TrustedCss, settings: &Settings) -> StyleElement {
    settings
        .attributes
        .iter()
        .fold(
            StyleElement::new(css).nonce(settings.nonce.clone()),
            |element, (name, value)| element.attr(name.clone(), value.clone()),
        )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use inline_styles::{Declarations, Formatting, Nonce};
    use insta::assert_snapshot;

    use super::*;

    fn inputs() -> Vec<StylesInput> {
        vec![
            StylesInput::new(".a").style("color", "red"),
            StylesInput::new(".b")
                .style("margin", 0)
                .media("print", Declarations::new().set("display", "none")),
        ]
    }

    fn settings(formatting: Formatting, nonce: Option<&str>) -> Settings {
        Settings {
            formatting,
            nonce: nonce.map(Nonce::from),
            attributes: BTreeMap::new(),
        }
    }

    #[test]
    fn css_only() {
        let output = render(&inputs(), &settings(Formatting::Spaced, None), Output::Css);
        assert_snapshot!(output, @r"
        .a { color: red; }
        .b { margin: 0; }
        @media print { .b { display: none; } }
        ");
    }

    #[test]
    fn element_with_nonce() {
        let output = render(
            &inputs(),
            &settings(Formatting::Compact, Some("abc")),
            Output::Element,
        );
        assert_snapshot!(
            output,
            @r#"<style data-inline-styles="inline" nonce="abc">.a{color:red;}.b{margin:0;}@media print{.b{display:none;}}</style>"#
        );
    }

    #[test]
    fn element_with_attributes() {
        let mut settings = settings(Formatting::Compact, None);
        settings.attributes.insert("media".to_owned(), "screen".to_owned());
        settings.attributes.insert("id".to_owned(), "theme".to_owned());

        let output = render(
            &[StylesInput::new(".a").style("color", "red")],
            &settings,
            Output::Element,
        );
        assert_snapshot!(
            output,
            @r#"<style data-inline-styles="inline" id="theme" media="screen">.a{color:red;}</style>"#
        );
    }
}
