//! Reading JSON input

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read and parse a JSON document; `-` reads stdin
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Type names of a variety input
///
/// Accepts an array of components (their `type` field) or of plain type
/// names.
pub fn type_sequence(document: &serde_json::Value) -> Result<Vec<String>> {
    let items = document
        .as_array()
        .context("variety input must be a JSON array")?;
    Ok(items
        .iter()
        .map(|item| match item {
            serde_json::Value::String(name) => name.clone(),
            other => other
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mixed_sequence() {
        let doc = json!(["a2ui.TLDR", {"type": "a2ui.StatCard"}, {"id": "x"}]);
        assert_eq!(type_sequence(&doc).unwrap(), vec!["a2ui.TLDR", "a2ui.StatCard", ""]);
        assert!(type_sequence(&json!({"type": "a2ui.TLDR"})).is_err());
    }

    #[test]
    fn reports_file_in_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_json(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
