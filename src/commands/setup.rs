//! Project setup command
//!
//! Runs the full scaffolding sequence in the current working directory:
//! package initialization, dependency installation, manifest patching,
//! directory creation, and template file generation. The steps run strictly
//! in order; the first failure aborts the run, leaving whatever the
//! completed steps already produced on disk.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::manifest::Manifest;
use crate::templates::{ProjectTemplate, TEMPLATE_FILES};

/// Runtime dependencies installed into the generated project
pub const DEPENDENCIES: [&str; 8] = [
    "express",
    "mongoose",
    "cors",
    "bcryptjs",
    "jsonwebtoken",
    "dotenv",
    "cookie-parser",
    "zod",
];

/// Development-only dependencies installed into the generated project
pub const DEV_DEPENDENCIES: [&str; 1] = ["nodemon"];

/// Directories created for the generated project, if absent
pub const PROJECT_DIRS: [&str; 3] = ["models", "controllers", "routes"];

/// Scaffold an Express + MongoDB API project in the current directory
pub struct SetupCommand {
    project_dir: PathBuf,
}

impl SetupCommand {
    /// Create a new command instance rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        let project_dir =
            std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { project_dir })
    }

    /// Execute the full setup sequence
    ///
    /// # Errors
    ///
    /// Returns an error if any external command exits non-zero, the
    /// manifest is missing or malformed, or any file or directory cannot
    /// be written. Nothing is rolled back on failure.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {}",
            style("Setting up").green().bold(),
            style("Express + MongoDB API project...").bold()
        );
        println!();

        self.run_npm_init()?;
        self.install_dependencies()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Patching package.json...");
        Manifest::patch(&self.project_dir)?;

        spinner.set_message("Creating project structure...");
        let created = create_structure(&self.project_dir)?;
        for dir in created {
            spinner.println(format!(
                "  {} Created folder: {}",
                style("✓").green(),
                style(dir).cyan()
            ));
        }

        spinner.set_message("Generating project files...");
        self.generate_files()?;
        for (relative_path, _) in TEMPLATE_FILES {
            spinner.println(format!(
                "  {} Created file: {}",
                style("✓").green(),
                style(relative_path).cyan()
            ));
        }

        spinner.finish_and_clear();

        Self::print_success();

        Ok(())
    }

    /// Run `npm init -y`, inheriting the terminal's streams
    fn run_npm_init(&self) -> Result<()> {
        println!("{}", style("Initializing package manifest...").bold());

        let status = Command::new("npm")
            .args(["init", "-y"])
            .current_dir(&self.project_dir)
            .status()
            .context("Failed to run npm init")?;

        if !status.success() {
            anyhow::bail!("npm init exited with {status}");
        }

        Ok(())
    }

    /// Install the runtime set, then the development set, sequentially
    fn install_dependencies(&self) -> Result<()> {
        println!("{}", style("Installing dependencies...").bold());

        let status = Command::new("npm")
            .arg("install")
            .args(DEPENDENCIES)
            .current_dir(&self.project_dir)
            .status()
            .context("Failed to run npm install")?;

        if !status.success() {
            anyhow::bail!("npm install exited with {status}");
        }

        let status = Command::new("npm")
            .args(["install", "--save-dev"])
            .args(DEV_DEPENDENCIES)
            .current_dir(&self.project_dir)
            .status()
            .context("Failed to run npm install --save-dev")?;

        if !status.success() {
            anyhow::bail!("npm install --save-dev exited with {status}");
        }

        Ok(())
    }

    /// Write the template files into the project directory
    fn generate_files(&self) -> Result<()> {
        let template = ProjectTemplate::new();
        template.generate(&self.project_dir)
    }

    /// Print success message with next steps
    fn print_success() {
        println!("{}", style("✓ Setup complete!").green().bold());
        println!();
        println!("{}", style("Installed modules:").bold());
        println!(
            "  Dependencies: {}",
            style(DEPENDENCIES.join(", ")).cyan()
        );
        println!(
            "  Dev dependencies: {}",
            style(DEV_DEPENDENCIES.join(", ")).cyan()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Start the development server:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("npm run dev").cyan()
        );
        println!();
        println!("  {} Create a user:", style("2.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("curl -X POST http://localhost:5000/api/user").cyan()
        );
        println!();
        println!(
            "{}",
            style("Happy building! 🚀").green().bold()
        );
    }
}

/// Create the project directories, skipping any that already exist
///
/// Returns the names of the directories actually created. Existing
/// directories and their contents are left untouched; this is the only
/// idempotent step in the setup sequence.
///
/// # Errors
///
/// Returns an error if a missing directory cannot be created.
pub fn create_structure(root: &Path) -> Result<Vec<&'static str>> {
    let mut created = Vec::new();

    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        if !path.exists() {
            fs::create_dir(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            created.push(dir);
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure_creates_all_dirs() {
        let temp_dir = TempDir::new().unwrap();

        let created = create_structure(temp_dir.path()).unwrap();

        assert_eq!(created, vec!["models", "controllers", "routes"]);
        for dir in PROJECT_DIRS {
            let path = temp_dir.path().join(dir);
            assert!(path.is_dir(), "Directory should exist: {}", path.display());
        }
    }

    #[test]
    fn test_create_structure_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();

        create_structure(temp_dir.path()).unwrap();
        let created_again = create_structure(temp_dir.path()).unwrap();

        assert!(created_again.is_empty());
    }

    #[test]
    fn test_create_structure_preserves_existing_contents() {
        let temp_dir = TempDir::new().unwrap();
        let models = temp_dir.path().join("models");
        fs::create_dir(&models).unwrap();
        let existing = models.join("keep.js");
        fs::write(&existing, "// hand-written model").unwrap();

        let created = create_structure(temp_dir.path()).unwrap();

        assert_eq!(created, vec!["controllers", "routes"]);
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "// hand-written model"
        );
    }
}
