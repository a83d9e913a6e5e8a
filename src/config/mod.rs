pub mod owner;
pub mod user;

use std::path::{Path, PathBuf};

use chrono::Datelike;
use regex_lite::Regex;

use crate::error::{QuineError, Result};
use crate::license::{self, License, TemplateStore};
use crate::GenerateOptions;

pub use owner::discover_owner;
pub use user::{load_user_config, UserConfig};

/// License directory looked up under `--quine-path` when `--license-dir` is not given.
pub const DEFAULT_LICENSE_DIR: &str = "license";

/// Settings for one generation run, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name as given or taken from the output directory.
    pub app: String,
    /// `app` as a Rust identifier, used for the application module.
    pub module: String,
    /// Directory the skeleton is written to.
    pub output_dir: PathBuf,
    pub license: License,
    /// Copyright owner; empty leaves the owner placeholder in place.
    pub owner: String,
    /// Copyright year; empty leaves the year placeholder in place.
    pub year: String,
    pub templates: TemplateStore,
    /// Run generated sources through rustfmt.
    pub format_sources: bool,
}

impl Config {
    /// Merge command-line options with the user config and discovered defaults.
    ///
    /// Options win over the user config; `discover_owner` is only consulted
    /// when neither names an owner.
    pub fn from_options(
        options: GenerateOptions,
        user: Option<&UserConfig>,
        discover_owner: impl FnOnce() -> Option<String>,
    ) -> Result<Config> {
        let base = match options.path {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| QuineError::Io {
                context: "getting current directory".into(),
                source: e,
            })?,
        };

        let app = match options.app {
            Some(app) => app,
            None => dir_name(&base)?,
        };
        let module = module_name(&app)?;

        let output_dir = if options.cmd_dir {
            base.join("cmd").join(&app)
        } else {
            base
        };

        let license_name = options
            .license
            .or_else(|| user.and_then(|u| u.license.clone()))
            .unwrap_or_default();
        let license = license::resolve(&license_name)?;

        let license_dir = options
            .license_dir
            .or_else(|| user.and_then(|u| u.license_dir.clone()));
        let templates = template_store(license_dir, options.quine_path)?;

        let owner = match options.owner.or_else(|| user.and_then(|u| u.owner.clone())) {
            Some(owner) => owner,
            None => discover_owner().unwrap_or_default(),
        };

        let year = options.year.unwrap_or_else(current_year);

        Ok(Config {
            app,
            module,
            output_dir,
            license,
            owner,
            year,
            templates,
            format_sources: !options.no_fmt,
        })
    }

    /// File name of the application stub, e.g. `hello_main.rs`.
    pub fn app_file_name(&self) -> String {
        format!("{}_main.rs", self.module)
    }
}

fn dir_name(path: &Path) -> Result<String> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| QuineError::InvalidAppName {
            name: path.display().to_string(),
        })
}

/// Turn an application name into a snake_case Rust identifier.
pub fn module_name(app: &str) -> Result<String> {
    let re = Regex::new(r"[^a-z0-9]+").expect("valid regex");
    let lowered = app.to_lowercase();
    let snake = re.replace_all(&lowered, "_");
    let snake = snake.trim_matches('_');

    if snake.is_empty() {
        return Err(QuineError::InvalidAppName {
            name: app.to_string(),
        });
    }

    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{snake}"))
    } else {
        Ok(snake.to_string())
    }
}

/// Pick the template store: an explicit license directory (relative paths
/// sit under the quine path), the quine path's `license` directory, or the
/// built-in texts.
fn template_store(
    license_dir: Option<PathBuf>,
    quine_path: Option<PathBuf>,
) -> Result<TemplateStore> {
    let dir = match (license_dir, quine_path) {
        (Some(dir), Some(root)) if dir.is_relative() => root.join(dir),
        (Some(dir), _) => dir,
        (None, Some(root)) => root.join(DEFAULT_LICENSE_DIR),
        (None, None) => return Ok(TemplateStore::Builtin),
    };

    if !dir.is_dir() {
        return Err(QuineError::LicenseDirMissing { path: dir });
    }
    Ok(TemplateStore::Directory(dir))
}

fn current_year() -> String {
    chrono::Local::now().year().to_string()
}
