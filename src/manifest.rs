//! `package.json` patching
//!
//! The manifest is deserialized leniently: every field this tool does not
//! touch is captured in a flattened map and written back unchanged.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const START_SCRIPT: &str = "node index.js";
const DEV_SCRIPT: &str = "nodemon index.js";

/// A leniently parsed `package.json`
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Module-mode flag (`"module"` for ECMAScript module semantics)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    /// npm script entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Map<String, Value>>,
    /// All other manifest fields, preserved verbatim
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Manifest {
    /// Read `package.json` under `root`, set the module-mode flag and the
    /// `start`/`dev` scripts, and write it back in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing, malformed, or cannot
    /// be written.
    pub fn patch(root: &Path) -> Result<()> {
        let path = root.join("package.json");

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let mut manifest: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;

        manifest.module_type = Some("module".to_string());

        let mut scripts = Map::new();
        scripts.insert("start".to_string(), Value::String(START_SCRIPT.to_string()));
        scripts.insert("dev".to_string(), Value::String(DEV_SCRIPT.to_string()));
        manifest.scripts = Some(scripts);

        let serialized =
            serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
        fs::write(&path, serialized)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, contents: &str) {
        fs::write(root.join("package.json"), contents).unwrap();
    }

    fn read_manifest(root: &Path) -> Value {
        let raw = fs::read_to_string(root.join("package.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_patch_sets_module_type_and_scripts() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), r#"{"name": "mydb", "version": "1.0.0"}"#);

        Manifest::patch(temp_dir.path()).unwrap();

        let patched = read_manifest(temp_dir.path());
        assert_eq!(patched["type"], "module");
        assert_eq!(patched["scripts"]["start"], "node index.js");
        assert_eq!(patched["scripts"]["dev"], "nodemon index.js");
        assert_eq!(patched["scripts"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_patch_preserves_unrelated_fields() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{
                "name": "mydb",
                "version": "1.0.0",
                "author": "Jamie Example",
                "license": "ISC",
                "dependencies": {"express": "^4.18.0"}
            }"#,
        );

        Manifest::patch(temp_dir.path()).unwrap();

        let patched = read_manifest(temp_dir.path());
        assert_eq!(patched["author"], "Jamie Example");
        assert_eq!(patched["license"], "ISC");
        assert_eq!(patched["dependencies"]["express"], "^4.18.0");
        assert_eq!(patched["type"], "module");
    }

    #[test]
    fn test_patch_replaces_existing_scripts() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{"scripts": {"test": "echo \"Error: no test specified\" && exit 1"}}"#,
        );

        Manifest::patch(temp_dir.path()).unwrap();

        let patched = read_manifest(temp_dir.path());
        let scripts = patched["scripts"].as_object().unwrap();
        assert_eq!(scripts.len(), 2);
        assert!(!scripts.contains_key("test"));
    }

    #[test]
    fn test_patch_fails_when_manifest_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = Manifest::patch(temp_dir.path());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read manifest"));
    }

    #[test]
    fn test_patch_fails_on_malformed_manifest() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "not json at all {");

        let result = Manifest::patch(temp_dir.path());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse manifest"));
    }
}
