use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{QuineError, Result};
use crate::license::{placeholder, substitute, Variant};
use crate::render::comment::{line_comment, COMMENT_WIDTH};
use crate::render::context::build_context;
use crate::render::format::Formatter;
use crate::render::skeleton::{render_skeleton, APP_TEMPLATE, MAIN_TEMPLATE};

/// Name of the entry point file.
pub const MAIN_FILE: &str = "main.rs";

/// Name the full license text is written under.
pub const LICENSE_FILE: &str = "LICENSE";

/// How a planned file treats an existing file at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace whatever is there.
    Overwrite,
    /// Leave an existing file alone; it may hold user code.
    KeepExisting,
}

/// What executing the plan would do to one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Overwrite,
    Keep,
}

/// A file that would be written during generation.
#[derive(Debug)]
pub struct PlannedFile {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    pub content: Vec<u8>,
    pub mode: WriteMode,
}

impl PlannedFile {
    pub fn action(&self, output_dir: &Path) -> FileAction {
        let exists = output_dir.join(&self.relative_path).exists();
        match (exists, self.mode) {
            (false, _) => FileAction::Create,
            (true, WriteMode::Overwrite) => FileAction::Overwrite,
            (true, WriteMode::KeepExisting) => FileAction::Keep,
        }
    }
}

/// The result of planning a generation without writing to disk.
#[derive(Debug)]
pub struct GenerationPlan {
    pub files: Vec<PlannedFile>,
}

pub struct GeneratedProject {
    pub output_dir: PathBuf,
    /// Written files with the number of bytes written.
    pub files_written: Vec<(PathBuf, usize)>,
    /// Files left alone because they already existed.
    pub files_kept: Vec<PathBuf>,
}

/// Render the license, entry point and application stub into memory.
pub fn plan_render(config: &Config, formatter: &dyn Formatter) -> Result<GenerationPlan> {
    let mut files = Vec::new();

    if let Some(text) = license_text(config, Variant::Full)? {
        files.push(PlannedFile {
            relative_path: PathBuf::from(LICENSE_FILE),
            content: text,
            mode: WriteMode::Overwrite,
        });
    }

    let context = build_context(config);

    let mut main = String::new();
    if let Some(header) = license_text(config, Variant::Header)? {
        main.push_str(&line_comment(
            &String::from_utf8_lossy(&header),
            COMMENT_WIDTH,
        ));
        main.push('\n');
    }
    main.push_str(&render_skeleton(MAIN_FILE, MAIN_TEMPLATE, &context)?);
    files.push(PlannedFile {
        relative_path: PathBuf::from(MAIN_FILE),
        content: formatter.format(MAIN_FILE, main)?.into_bytes(),
        mode: WriteMode::Overwrite,
    });

    let app_file = config.app_file_name();
    let app = render_skeleton(&app_file, APP_TEMPLATE, &context)?;
    files.push(PlannedFile {
        content: formatter.format(&app_file, app)?.into_bytes(),
        relative_path: PathBuf::from(app_file),
        mode: WriteMode::KeepExisting,
    });

    Ok(GenerationPlan { files })
}

/// Load a license text and fill in the owner and year.
fn license_text(config: &Config, variant: Variant) -> Result<Option<Vec<u8>>> {
    let Some(template) = config.templates.load(config.license, variant)? else {
        return Ok(None);
    };

    let filling = !(config.owner.is_empty() && config.year.is_empty());
    if let Some(layout) = placeholder::layout(config.license, variant) {
        if filling && !layout.matches(&template) {
            return Err(QuineError::PlaceholderMismatch {
                license: config.license,
                file: config.templates.location(config.license, variant),
            });
        }
    }

    let text = substitute(
        config.license,
        variant,
        &template,
        &config.owner,
        &config.year,
    );
    Ok(Some(text.into_owned()))
}

/// Write the files from a generation plan to disk.
pub fn execute_plan(plan: &GenerationPlan, output_dir: &Path) -> Result<GeneratedProject> {
    let mut files_written = Vec::new();
    let mut files_kept = Vec::new();

    for file in &plan.files {
        if file.action(output_dir) == FileAction::Keep {
            files_kept.push(file.relative_path.clone());
            continue;
        }

        let dest_path = output_dir.join(&file.relative_path);
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| QuineError::Io {
                context: format!("creating directory {}", parent.display()),
                source: e,
            })?;
        }
        std::fs::write(&dest_path, &file.content).map_err(|e| QuineError::Io {
            context: format!("writing {}", dest_path.display()),
            source: e,
        })?;
        files_written.push((file.relative_path.clone(), file.content.len()));
    }

    Ok(GeneratedProject {
        output_dir: output_dir.to_path_buf(),
        files_written,
        files_kept,
    })
}
