//! Project template generation

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub mod files;
pub use files::{ENV_FILE, SERVER_INDEX, USER_CONTROLLER, USER_MODEL, USER_ROUTES};

/// Fixed (relative path, content) pairs written on every run
///
/// The directories these paths live in must already exist; directory
/// creation happens earlier in the setup sequence.
pub const TEMPLATE_FILES: [(&str, &str); 5] = [
    (".env", ENV_FILE),
    ("index.js", SERVER_INDEX),
    ("models/user.model.js", USER_MODEL),
    ("controllers/user.controller.js", USER_CONTROLLER),
    ("routes/user.routes.js", USER_ROUTES),
];

/// Project template generator
pub struct ProjectTemplate;

impl ProjectTemplate {
    /// Create a new project template
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Write every template file under `output_dir`
    ///
    /// An existing file at any of these paths is replaced in full, with no
    /// diffing or merging. Running twice yields identical contents.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    pub fn generate(&self, output_dir: &Path) -> Result<()> {
        for (relative_path, content) in TEMPLATE_FILES {
            Self::write_file(output_dir, relative_path, content)?;
        }

        Ok(())
    }

    /// Write a single template file verbatim
    fn write_file(output_dir: &Path, relative_path: &str, content: &str) -> Result<()> {
        let path = output_dir.join(relative_path);

        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self::new()
    }
}
