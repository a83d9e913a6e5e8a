use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quine",
    about = "Scaffold a new command-line application with a license-aware entry point",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the entry point, application stub and LICENSE
    New {
        /// Project directory (default: current directory)
        path: Option<String>,

        /// Name of the application; only needed when it differs from the directory name
        #[arg(long)]
        app: Option<String>,

        /// License for the project: SPDX short identifier or full name (https://spdx.org/licenses/)
        #[arg(short, long)]
        license: Option<String>,

        /// Directory holding the license templates; a relative path is joined onto --quine-path
        #[arg(long)]
        license_dir: Option<String>,

        /// Root directory of quine resources such as license templates
        #[arg(long, env = "QUINE_PATH")]
        quine_path: Option<String>,

        /// Copyright owner (default: git config github.user or user.name)
        #[arg(long)]
        owner: Option<String>,

        /// Copyright year (default: the current year)
        #[arg(long, value_name = "YYYY")]
        year: Option<String>,

        /// Put the entry point in cmd/<app>
        #[arg(long)]
        cmd: bool,

        /// Write sources without running rustfmt
        #[arg(long)]
        no_fmt: bool,

        /// Show the files that would be written without writing anything
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print file contents and diffs
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the supported licenses
    Licenses,

    /// Show which license a name resolves to
    Resolve {
        /// License name or SPDX short identifier
        name: String,
    },
}
