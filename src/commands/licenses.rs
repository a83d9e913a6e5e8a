use console::style;
use miette::Result;

use quine::license::placeholder::layout;
use quine::license::store::builtin;
use quine::license::{License, Variant};

pub fn run() -> Result<()> {
    println!(
        "{} ({} licenses)\n",
        style("Supported licenses").bold(),
        License::ALL.len()
    );

    for license in License::ALL {
        let header = builtin(license, Variant::Header).is_some();
        let placeholders = [Variant::Full, Variant::Header]
            .into_iter()
            .any(|variant| layout(license, variant).is_some());

        let mut notes = Vec::new();
        if header {
            notes.push("source header");
        }
        if placeholders {
            notes.push("owner/year");
        }

        println!(
            "  {:<14} {}",
            style(license.canonical_id()).cyan(),
            license.name()
        );
        if !notes.is_empty() {
            println!("  {:<14} {}", "", style(notes.join(", ")).dim());
        }
    }

    println!(
        "\nNames are matched case-insensitively; see '{}' for a single name.",
        style("quine resolve <NAME>").cyan()
    );

    Ok(())
}
