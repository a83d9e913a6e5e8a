//! Tera sources of the generated entry point and application stub.

use tera::{Context, Tera};

use crate::error::{QuineError, Result};

/// Entry point: configuration, the executable name, and `main`.
pub const MAIN_TEMPLATE: &str = r##"mod {{ module }}_main;

use std::fs::File;
use std::path::Path;
use std::process;

/// Runtime configuration, filled in by `{{ module }}_main::parse_flags`.
#[derive(Debug, Default)]
pub struct Config {
    /// Output destination for logs; stderr is the default.
    pub log_file: Option<String>,
    /// Handle of the log file; `None` while logging to stderr.
    pub log: Option<File>,
}

/// Name of the running executable.
pub fn app_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "{{ app | addslashes }}".to_string())
}

fn main() {
    let cfg = {{ module }}_main::parse_flags();
    process::exit({{ module }}_main::run(cfg));
}
"##;

/// Application stub: usage, flag parsing, and `run`.
pub const APP_TEMPLATE: &str = r##"use std::fs::OpenOptions;
use std::io::Write;
use std::process;

use crate::{app_name, Config};

/// Prints usage information to stderr.
pub fn usage() {
    let app = app_name();
    eprintln!("Usage:");
    eprintln!("  {app} [FLAGS]");
    eprintln!();
    eprintln!("Insert information about {app} here");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --logfile <PATH>  output destination for logs (default: stderr)");
    eprintln!("  -h, --help        print this message");
}

/// Handles flag parsing, validation, and any side effects of flag states.
/// Errors or invalid states print a message to stderr and exit with a
/// non-zero status.
pub fn parse_flags() -> Config {
    let mut cfg = Config::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--logfile" => match args.next() {
                Some(path) => cfg.log_file = Some(path),
                None => {
                    eprintln!("{}: --logfile needs a value", app_name());
                    process::exit(2);
                }
            },
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            other => {
                eprintln!("{}: unknown flag: {other}", app_name());
                usage();
                process::exit(2);
            }
        }
    }

    if let Some(path) = cfg.log_file.as_deref().filter(|p| *p != "stderr") {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => cfg.log = Some(f),
            Err(e) => {
                eprintln!("{}: open logfile: {e}", app_name());
                process::exit(1);
            }
        }
    }

    cfg
}

/// Runs {{ app }}; the return value is the process exit status.
pub fn run(cfg: Config) -> i32 {
    if let Some(mut log) = cfg.log {
        let _ = writeln!(log, "{}: started", app_name());
    }

    println!("{}: hello, world", app_name());

    0
}
"##;

/// Render a skeleton source through Tera.
pub fn render_skeleton(name: &str, source: &str, context: &Context) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, source)
        .map_err(|e| QuineError::Render {
            file: name.to_string(),
            source: e,
        })?;

    tera.render(name, context).map_err(|e| QuineError::Render {
        file: name.to_string(),
        source: e,
    })
}
