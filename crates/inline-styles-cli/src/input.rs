//! Read style inputs from json

use std::io::Read;
use std::path::Path;

use inline_styles::StylesInput;

use crate::prelude::*;

/// Read the inputs from a file, or stdin if the path is `-`
pub(crate) fn read_inputs(path: &Path) -> Result<Vec<StylesInput>> {
    let content = if path == Path::new("-") {
        log::debug!("Reading input from stdin");
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        log::debug!("Reading input from {}", path.display());
        std::fs::read_to_string(path)?
    };

    parse_inputs(&content)
}

/// Parse either a single input object or a list of them.
///
/// Properties keep the order they have in the json.
pub(crate) fn parse_inputs(content: &str) -> Result<Vec<StylesInput>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(anyhow!("Input is empty"));
    }

    let inputs = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).context("Parsing list of style inputs")?
    } else {
        vec![serde_json::from_str(trimmed).context("Parsing style input")?]
    };
    Ok(inputs)
}
