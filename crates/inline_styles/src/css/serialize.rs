//! Convert a `StylesInput` to css text
//!
//! The base rule is always emitted, followed by every `@media` block and then every
//! `@container` block, in the order they were given.
//!
//! ```
//! use inline_styles::css::prelude::*;
//!
//! let input = StylesInput::new(".btn")
//!     .style("color", "red")
//!     .style("padding", "4px");
//!
//! assert_eq!(serialize(&input).as_str(), ".btn { color: red; padding: 4px; }");
//! ```

use std::fmt::{self, Write};

use super::declarations::Declarations;
use super::input::{QueryBlock, StylesInput};
use super::trusted::TrustedCss;
use crate::error_handling::log_or_panic_result;

/// How much whitespace to put in the generated css
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Formatting {
    /// `.btn { color: red; }`, top level rules on their own line.
    #[default]
    Spaced,
    /// `.btn{color:red;}`, no optional whitespace at all.
    Compact,
}

/// The separators used by a `Formatting`
struct Tokens {
    /// Between selector and the first declaration
    open: &'static str,
    /// After the last declaration
    close: &'static str,
    /// Between property and value
    colon: &'static str,
    /// After each value
    terminator: &'static str,
    /// Between a at-rule query and the nested rule
    at_open: &'static str,
    /// After the nested rule of a at-rule
    at_close: &'static str,
    /// Between top level rules
    separator: &'static str,
}

impl Formatting {
    /// Get the separators for this formatting
    const fn tokens(self) -> Tokens {
        match self {
            Formatting::Spaced => Tokens {
                open: " { ",
                close: "}",
                colon: ": ",
                terminator: "; ",
                at_open: " { ",
                at_close: " }",
                separator: "\n",
            },
            Formatting::Compact => Tokens {
                open: "{",
                close: "}",
                colon: ":",
                terminator: ";",
                at_open: "{",
                at_close: "}",
                separator: "",
            },
        }
    }

    /// The string put between top level rules
    pub(crate) const fn separator(self) -> &'static str {
        self.tokens().separator
    }
}

/// Serialize the input with the default formatting
pub fn serialize(input: &StylesInput) -> TrustedCss {
    serialize_with(input, Formatting::default())
}

/// Serialize the input with the given formatting
pub fn serialize_with(input: &StylesInput, formatting: Formatting) -> TrustedCss {
    log::trace!(
        "Serializing styles for {:?} ({} properties, {} media, {} container)",
        input.selector,
        input.styles.len(),
        input.media.len(),
        input.container.len()
    );

    if input.selector.trim().is_empty() {
        log::warn!("Serializing styles with an empty selector, the generated css will be invalid");
    }

    let mut result = String::new();
    let res = write_input(&mut result, input, &formatting.tokens());
    log_or_panic_result!(res, "Failed to write to string (???).");

    TrustedCss::from_serializer(result)
}

/// Write the base rule followed by all the at-rules
fn write_input(out: &mut String, input: &StylesInput, tokens: &Tokens) -> fmt::Result {
    write_rule(out, &input.selector, &input.styles, tokens)?;

    let media = input.media.iter().map(|block| ("media", block));
    let container = input.container.iter().map(|block| ("container", block));
    for (keyword, block) in media.chain(container) {
        out.push_str(tokens.separator);
        write_at_rule(out, keyword, block, &input.selector, tokens)?;
    }

    Ok(())
}

/// Write `@keyword query { selector { .. } }`
fn write_at_rule(
    out: &mut String,
    keyword: &str,
    block: &QueryBlock,
    selector: &str,
    tokens: &Tokens,
) -> fmt::Result {
    write!(out, "@{keyword} {}{}", block.query, tokens.at_open)?;
    write_rule(out, selector, &block.styles, tokens)?;
    out.push_str(tokens.at_close);
    Ok(())
}

/// Write `selector { property: value; .. }`
fn write_rule(
    out: &mut String,
    selector: &str,
    body: &Declarations,
    tokens: &Tokens,
) -> fmt::Result {
    out.push_str(selector);
    out.push_str(tokens.open);
    for (property, value) in body.iter() {
        write!(out, "{property}{}{value}{}", tokens.colon, tokens.terminator)?;
    }
    out.push_str(tokens.close);
    Ok(())
}
