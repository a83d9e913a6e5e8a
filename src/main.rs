mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::New {
            path,
            app,
            license,
            license_dir,
            quine_path,
            owner,
            year,
            cmd,
            no_fmt,
            dry_run,
            verbose,
        } => commands::new::run(
            quine::GenerateOptions {
                path: path.map(Into::into),
                app,
                license,
                license_dir: license_dir.map(Into::into),
                quine_path: quine_path.map(Into::into),
                owner,
                year,
                cmd_dir: cmd,
                no_fmt,
            },
            dry_run,
            verbose,
        ),
        Commands::Licenses => commands::licenses::run(),
        Commands::Resolve { name } => commands::resolve::run(name),
    }
}
