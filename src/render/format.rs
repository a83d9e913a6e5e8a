use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{QuineError, Result};

/// Pretty-prints generated source before it is written.
pub trait Formatter {
    /// Format `source`; `file` names it in error messages.
    fn format(&self, file: &str, source: String) -> Result<String>;
}

/// Leaves source exactly as rendered.
pub struct Verbatim;

impl Formatter for Verbatim {
    fn format(&self, _file: &str, source: String) -> Result<String> {
        Ok(source)
    }
}

/// Formats source with the `rustfmt` binary on `PATH`.
pub struct Rustfmt {
    edition: &'static str,
}

impl Rustfmt {
    /// Returns `None` when rustfmt cannot be run.
    pub fn detect() -> Option<Rustfmt> {
        let status = Command::new("rustfmt")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .ok()?;
        status.success().then_some(Rustfmt { edition: "2021" })
    }
}

impl Formatter for Rustfmt {
    fn format(&self, file: &str, source: String) -> Result<String> {
        let mut child = Command::new("rustfmt")
            .args(["--edition", self.edition, "--emit", "stdout", "--quiet"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| QuineError::Io {
                context: format!("running rustfmt on {file}"),
                source: e,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| QuineError::Io {
                    context: format!("piping {file} to rustfmt"),
                    source: e,
                })?;
        }

        let output = child.wait_with_output().map_err(|e| QuineError::Io {
            context: format!("waiting for rustfmt on {file}"),
            source: e,
        })?;

        if !output.status.success() {
            return Err(QuineError::Format {
                file: file.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| QuineError::Format {
            file: file.to_string(),
            message: format!("rustfmt produced invalid UTF-8: {e}"),
        })
    }
}

/// The formatter for a run: rustfmt when asked for and installed.
///
/// The flag says whether rustfmt was wanted but could not be found.
pub fn select_formatter(format_sources: bool) -> (Box<dyn Formatter>, bool) {
    if !format_sources {
        return (Box::new(Verbatim), false);
    }
    match Rustfmt::detect() {
        Some(rustfmt) => (Box::new(rustfmt), false),
        None => (Box::new(Verbatim), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_returns_source() {
        let out = Verbatim.format("main.rs", "fn main(){}".to_string()).unwrap();
        assert_eq!(out, "fn main(){}");
    }

    #[test]
    fn no_fmt_selects_verbatim() {
        let (formatter, missing) = select_formatter(false);
        assert!(!missing);
        assert_eq!(formatter.format("x.rs", "a  b".into()).unwrap(), "a  b");
    }

    #[test]
    fn rustfmt_formats_when_installed() {
        let Some(rustfmt) = Rustfmt::detect() else {
            return;
        };
        let out = rustfmt.format("main.rs", "fn main(){let x=1;}".into()).unwrap();
        assert_eq!(out, "fn main() {\n    let x = 1;\n}\n");
    }

    #[test]
    fn rustfmt_reports_syntax_errors() {
        let Some(rustfmt) = Rustfmt::detect() else {
            return;
        };
        let err = rustfmt.format("broken.rs", "fn main( {".into()).unwrap_err();
        assert!(matches!(err, QuineError::Format { .. }));
    }
}
