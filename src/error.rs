#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::license::{License, UnsupportedLicense};

#[derive(Debug, Error, Diagnostic)]
pub enum QuineError {
    #[error(transparent)]
    #[diagnostic(help(
        "Use an SPDX short identifier or full license name (see `quine licenses`), or omit --license"
    ))]
    UnsupportedLicense(#[from] UnsupportedLicense),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}")]
    #[diagnostic(help("Check the TOML syntax in your quine config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid application name: '{name}'")]
    #[diagnostic(help("The name must contain a letter or digit; set it explicitly with --app"))]
    InvalidAppName { name: String },

    #[error("License directory not found: {path}")]
    #[diagnostic(help(
        "Point --license-dir (or --quine-path) at a directory of license files, or omit both to use the built-in licenses"
    ))]
    LicenseDirMissing { path: PathBuf },

    #[error("{} does not match the {license} placeholder layout", file.display())]
    #[diagnostic(help(
        "Owner and year can only be filled into the shipped license wording; use the built-in licenses or pass --owner \"\" --year \"\""
    ))]
    PlaceholderMismatch { license: License, file: PathBuf },

    #[error("Failed to render {file}")]
    #[diagnostic(help("Check the skeleton template syntax"))]
    Render {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to format {file}: {message}")]
    #[diagnostic(help("Fix the generated source or pass --no-fmt to skip rustfmt"))]
    Format { file: String, message: String },
}

pub type Result<T> = std::result::Result<T, QuineError>;
