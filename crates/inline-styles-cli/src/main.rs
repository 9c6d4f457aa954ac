//! Command line front end for `inline_styles`

use std::process::ExitCode;

use clap::Parser;

/// Reusable imports
mod prelude {
    pub use anyhow::{Context, Result, anyhow};
    pub use owo_colors::OwoColorize;
}

use prelude::*;

mod input;
mod options;
mod render;

fn main() -> ExitCode {
    let cli = options::Cli::parse();

    if let Err(err) = simple_logger::init_with_level(cli.log_level()) {
        eprintln!("Failed to setup logger {err}");
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:?}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Run the selected subcommand, returning what should be printed
fn run(cli: &options::Cli) -> Result<String> {
    let (arguments, mode) = match &cli.command {
        options::Command::Render(arguments) => (arguments, render::Output::Element),
        options::Command::Css(arguments) => (arguments, render::Output::Css),
    };

    let settings = arguments.settings().context("Loading settings")?;
    let inputs = input::read_inputs(&arguments.input)
        .with_context(|| format!("Reading {}", arguments.input.display()))?;

    log::info!("Rendering {} style inputs", inputs.len());
    Ok(render::render(&inputs, &settings, mode))
}
