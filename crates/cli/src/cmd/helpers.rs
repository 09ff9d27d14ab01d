use anyhow::{Context, Result};
use std::path::Path;

/// Accepts either a path to a JSON file or inline JSON.
pub fn read_json_input(data: &str) -> Result<String> {
    if Path::new(data).exists() {
        std::fs::read_to_string(data).with_context(|| format!("reading {data}"))
    } else {
        Ok(data.to_string())
    }
}
