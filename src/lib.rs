pub mod config;
pub mod error;
pub mod license;
pub mod render;

use std::path::PathBuf;

use console::style;

use crate::config::{discover_owner, load_user_config, Config};
use crate::error::{QuineError, Result};
use crate::render::{execute_plan, plan_render, select_formatter, GeneratedProject, GenerationPlan};

/// Command-line settings for a generation run; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct GenerateOptions {
    /// Project directory. If None, uses the current directory.
    pub path: Option<PathBuf>,
    /// Application name, when it differs from the directory name.
    pub app: Option<String>,
    /// License name or SPDX short identifier.
    pub license: Option<String>,
    /// Directory holding license templates.
    pub license_dir: Option<PathBuf>,
    /// Root of quine resources; relative license directories sit under it.
    pub quine_path: Option<PathBuf>,
    /// Copyright owner.
    pub owner: Option<String>,
    /// Copyright year.
    pub year: Option<String>,
    /// Put the entry point in `cmd/<app>`.
    pub cmd_dir: bool,
    /// Skip rustfmt.
    pub no_fmt: bool,
}

/// Everything needed to execute a generation that has been planned but not yet written.
pub struct FullGenerationPlan {
    pub render_plan: GenerationPlan,
    pub config: Config,
}

/// Plan a generation: resolve settings and the license, render everything in memory.
///
/// Nothing is written to disk.
pub fn plan_generation(options: GenerateOptions) -> Result<FullGenerationPlan> {
    let user = load_user_config()?;
    let config = Config::from_options(options, user.as_ref(), discover_owner)?;

    if config.owner.is_empty() && !config.license.is_none() {
        eprintln!(
            "{} {}",
            style("warning:").yellow().bold(),
            style("no copyright owner found; pass --owner to fill in the license placeholder")
                .yellow()
        );
    }

    let (formatter, rustfmt_missing) = select_formatter(config.format_sources);
    if rustfmt_missing {
        eprintln!(
            "{} {}",
            style("warning:").yellow().bold(),
            style("rustfmt not found; writing sources unformatted").yellow()
        );
    }

    let render_plan = plan_render(&config, formatter.as_ref())?;

    Ok(FullGenerationPlan {
        render_plan,
        config,
    })
}

/// Execute a previously planned generation.
pub fn execute_generation(plan: FullGenerationPlan) -> Result<GeneratedProject> {
    let output_dir = &plan.config.output_dir;
    std::fs::create_dir_all(output_dir).map_err(|e| QuineError::Io {
        context: format!("creating output directory {}", output_dir.display()),
        source: e,
    })?;

    let result = execute_plan(&plan.render_plan, output_dir)?;

    for (path, bytes) in &result.files_written {
        println!(
            "  {} bytes were written to {}",
            bytes,
            style(output_dir.join(path).display()).cyan()
        );
    }
    for path in &result.files_kept {
        println!(
            "  {} {} already exists",
            style("kept").dim(),
            output_dir.join(path).display()
        );
    }

    println!(
        "\n{} {} scaffolded at {}",
        style("✓").green().bold(),
        style(&plan.config.app).bold(),
        style(output_dir.display()).cyan()
    );
    if !plan.config.license.is_none() {
        println!("  license: {}", plan.config.license);
    }

    Ok(result)
}

/// Generate the application skeleton.
pub fn generate(options: GenerateOptions) -> Result<GeneratedProject> {
    let plan = plan_generation(options)?;
    execute_generation(plan)
}
