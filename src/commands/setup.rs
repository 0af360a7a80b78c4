//! Redux setup orchestration

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::inject::{inject_provider, InjectOutcome};
use crate::{install, project, SetupMode, TemplateBundle};

static FOLDER: Emoji = Emoji("📁 ", "");
static FILE: Emoji = Emoji("📄 ", "");
static PACKAGE: Emoji = Emoji("📦 ", "");
static SUCCESS: Emoji = Emoji("✓", "√");
static WARNING: Emoji = Emoji("⚠", "!");

/// Set up Redux wiring in an existing project
pub struct SetupCommand {
    root: PathBuf,
}

impl SetupCommand {
    /// Create a new command instance rooted at the target project directory
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Execute the command: prompt, classify, generate, install, inject.
    ///
    /// Install failures and injection misses degrade to warnings; the run
    /// only fails on prompt or file-system errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read, template rendering
    /// fails, or generated files cannot be written.
    pub fn execute(&self) -> Result<()> {
        let mode = prompt_mode()?;

        let project_type = project::classify(&self.root);
        println!(
            "{} {} project",
            style("Detected").green().bold(),
            style(project_type.label()).cyan().bold()
        );
        println!();

        let bundle = TemplateBundle::generate(mode)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating store files...");

        let report = bundle.materialize(&self.root)?;

        spinner.finish_and_clear();

        for dir in &report.created_dirs {
            println!("  {FOLDER}Created directory: {}", style(dir.display()).green());
        }
        for file in &report.created_files {
            println!("  {FILE}Created file: {}", style(file.display()).green());
        }
        for file in &report.skipped_files {
            println!("  {} Kept existing file: {}", SUCCESS, style(file.display()).dim());
        }
        println!();

        println!("{PACKAGE}Installing dependencies...");
        match install::install(&self.root, bundle.packages()) {
            Ok(()) => println!("{} {}", SUCCESS, style("Dependencies installed.").green()),
            Err(err) => println!(
                "{} {} {err:#}",
                WARNING,
                style("Failed to install dependencies:").yellow()
            ),
        }
        println!();

        self.wrap_entry_file(project_type)?;

        println!();
        println!(
            "{} {} setup complete for {} project.",
            style(SUCCESS).green().bold(),
            style(mode.label()).bold(),
            style(project_type.label()).cyan()
        );

        Ok(())
    }

    /// Locate the entry file and wrap its root return in a `<Provider>`
    fn wrap_entry_file(&self, project_type: project::ProjectType) -> Result<()> {
        let Some(entry) = project::locate_entry_file(&self.root, project_type) else {
            println!(
                "{} {}",
                WARNING,
                style("Could not detect an app entry file to wrap <Provider>.").yellow()
            );
            return Ok(());
        };

        let entry_path = self.root.join(&entry);
        match inject_provider(&entry_path, project_type)? {
            InjectOutcome::Injected => println!(
                "{} <Provider> wrapped in {}",
                SUCCESS,
                style(entry.display()).green()
            ),
            InjectOutcome::AlreadyPresent => println!(
                "{} Provider already present in {}",
                SUCCESS,
                style(entry.display()).dim()
            ),
            InjectOutcome::FileMissing => println!(
                "{} {}",
                WARNING,
                style("App entry file disappeared before injection.").yellow()
            ),
            InjectOutcome::AnchorMissing => println!(
                "{} {} {}",
                WARNING,
                style(entry.display()).bold(),
                style("has no parenthesized return block; left untouched.").yellow()
            ),
            InjectOutcome::AnchorAmbiguous => println!(
                "{} {} {}",
                WARNING,
                style(entry.display()).bold(),
                style("has multiple return blocks; left untouched.").yellow()
            ),
        }

        Ok(())
    }
}

/// Ask the user which Redux setup to generate
fn prompt_mode() -> Result<SetupMode> {
    let modes = [SetupMode::RtkQuery, SetupMode::NormalReducer];
    let labels: Vec<&str> = modes.iter().map(|mode| mode.label()).collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose Redux setup")
        .items(&labels)
        .default(0)
        .interact()
        .context("Setup prompt failed")?;

    Ok(modes[index])
}
