//! Define cli and config options

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use inline_styles::dom::attributes::is_valid_attribute_name;
use inline_styles::{Formatting, Nonce};
use inline_styles_shared::{MARKER_ATTRIBUTE, NONCE_ATTRIBUTE};
use serde::Deserialize;

use crate::prelude::*;

/// The json config file
#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// The formatting of the generated css
    pub(crate) formatting: Formatting,
    /// The nonce to tag the `<style>` node with
    pub(crate) nonce: Option<Nonce>,
    /// Extra attributes to put on the `<style>` node
    pub(crate) attributes: BTreeMap<String, String>,
}

impl Config {
    /// Read a config file
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config json
    pub(crate) fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        for name in config.attributes.keys() {
            if !is_valid_attribute_name(name) {
                return Err(anyhow!("Attribute name {name:?} is not a valid html attribute name"));
            }
            if name.eq_ignore_ascii_case(MARKER_ATTRIBUTE)
                || name.eq_ignore_ascii_case(NONCE_ATTRIBUTE)
            {
                return Err(anyhow!(
                    "Attribute `{name}` is reserved, use the `nonce` setting for nonces"
                ));
            }
        }
        Ok(config)
    }
}

/// Inline styles CLI
#[derive(Parser)]
#[clap(version, about, author)]
pub(crate) struct Cli {
    /// What to output
    #[command(subcommand)]
    pub(crate) command: Command,
    /// More logging, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
}

/// The subcommands
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the full `<style>` node
    Render(RenderArguments),
    /// Print only the css
    Css(RenderArguments),
}

/// Arguments shared by every subcommand
#[derive(Parser)]
pub(crate) struct RenderArguments {
    /// Json file with a style input (or a list of them), `-` reads stdin
    #[arg(default_value = "-")]
    pub(crate) input: PathBuf,
    /// Nonce to tag the node with, overrides the config file
    #[arg(short, long)]
    pub(crate) nonce: Option<String>,
    /// Emit css without optional whitespace
    #[arg(short, long)]
    pub(crate) compact: bool,
    /// Json config file
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

/// The resolved settings for a render
pub(crate) struct Settings {
    /// The formatting of the generated css
    pub(crate) formatting: Formatting,
    /// The nonce, if any
    pub(crate) nonce: Option<Nonce>,
    /// Extra attributes
    pub(crate) attributes: BTreeMap<String, String>,
}

impl Cli {
    /// The log level selected by `--verbose`
    pub(crate) fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Warn,
            1 => log::Level::Info,
            2 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

impl RenderArguments {
    /// Merge the config file (if any) with the command line flags, flags win.
    pub(crate) fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => Config::read(path)
                .with_context(|| format!("Reading config {}", path.display()))?,
            None => Config::default(),
        };
        Ok(self.merge(config))
    }

    /// Apply the command line flags on top of a config
    fn merge(&self, config: Config) -> Settings {
        let formatting = if self.compact {
            Formatting::Compact
        } else {
            config.formatting
        };
        let nonce = self
            .nonce
            .as_deref()
            .map(Nonce::from)
            .or(config.nonce);

        Settings {
            formatting,
            nonce,
            attributes: config.attributes,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("inline-styles").chain(args.iter().copied())).unwrap()
    }

    fn arguments(cli: &Cli) -> &RenderArguments {
        match &cli.command {
            Command::Render(arguments) | Command::Css(arguments) => arguments,
        }
    }

    #[test]
    fn defaults() {
        let cli = parse(&["render"]);
        assert_eq!(cli.log_level(), log::Level::Warn);

        let settings = arguments(&cli).settings().unwrap();
        assert_eq!(settings.formatting, Formatting::Spaced);
        assert_eq!(settings.nonce, None);
        assert_eq!(arguments(&cli).input, PathBuf::from("-"));
    }

    #[test]
    fn verbosity_is_counted() {
        assert_eq!(parse(&["css", "-vv"]).log_level(), log::Level::Debug);
        assert_eq!(parse(&["-vvvv", "css"]).log_level(), log::Level::Trace);
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["render", "styles.json", "--compact", "--nonce", "flag"]);
        let config = Config::parse(r#"{"formatting": "spaced", "nonce": "config"}"#).unwrap();

        let settings = arguments(&cli).merge(config);
        assert_eq!(settings.formatting, Formatting::Compact);
        assert_eq!(settings.nonce, Some(Nonce::from("flag")));
    }

    #[test]
    fn config_is_used_without_flags() {
        let cli = parse(&["render"]);
        let config = Config::parse(
            r#"{"formatting": "compact", "nonce": "config", "attributes": {"media": "screen"}}"#,
        )
        .unwrap();

        let settings = arguments(&cli).merge(config);
        assert_eq!(settings.formatting, Formatting::Compact);
        assert_eq!(settings.nonce, Some(Nonce::from("config")));
        assert_eq!(settings.attributes.get("media").map(String::as_str), Some("screen"));
    }

    #[test]
    fn config_rejects_reserved_attributes() {
        assert!(Config::parse(r#"{"attributes": {"nonce": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"attributes": {"data-inline-styles": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn config_rejects_invalid_attribute_names() {
        assert!(Config::parse(r#"{"attributes": {"": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"attributes": {"two words": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"attributes": {"x\"><script>": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"attributes": {"a=b": "x"}}"#).is_err());
        assert!(Config::parse(r#"{"attributes": {"data-theme": "dark"}}"#).is_ok());
    }
}
