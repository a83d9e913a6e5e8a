use console::style;
use miette::Result;

use quine::error::QuineError;
use quine::license;

pub fn run(name: String) -> Result<()> {
    let license = license::resolve(&name).map_err(QuineError::from)?;

    if license.is_none() {
        println!("{} no license", style("✓").green().bold());
        return Ok(());
    }

    println!(
        "{} {} ({})",
        style("✓").green().bold(),
        style(license.canonical_id()).cyan(),
        license.name()
    );
    let synonyms: Vec<&str> = license.synonyms().collect();
    println!(
        "  {} {}",
        style("also accepted:").dim(),
        synonyms.join(", ")
    );

    Ok(())
}
