use console::style;
use miette::Result;
use quine::render::diff::unified_diff;
use quine::render::FileAction;
use quine::GenerateOptions;

pub fn run(options: GenerateOptions, dry_run: bool, verbose: bool) -> Result<()> {
    if !dry_run {
        quine::generate(options)?;
        return Ok(());
    }

    let plan = quine::plan_generation(options)?;
    let output_dir = &plan.config.output_dir;

    println!(
        "\n{} Dry run \u{2014} files that would be generated in {}:",
        style("==>").cyan().bold(),
        style(output_dir.display()).cyan()
    );

    for file in &plan.render_plan.files {
        let action = file.action(output_dir);
        let label = match action {
            FileAction::Create => style("create   ").green(),
            FileAction::Overwrite => style("overwrite").yellow(),
            FileAction::Keep => style("keep     ").dim(),
        };
        println!("  {} {}", label, file.relative_path.display());

        if !verbose || action == FileAction::Keep {
            continue;
        }

        let content = String::from_utf8_lossy(&file.content);
        println!("  {}", style("──────").dim());
        if action == FileAction::Overwrite {
            let current = std::fs::read(output_dir.join(&file.relative_path)).unwrap_or_default();
            let current = String::from_utf8_lossy(&current);
            if current == content {
                println!("  {}", style("(unchanged)").dim());
            } else {
                for line in unified_diff(&current, &content, &file.relative_path).lines() {
                    println!("  {}", line);
                }
            }
        } else {
            for line in content.lines() {
                println!("  {}", line);
            }
        }
        println!("  {}", style("──────").dim());
        println!();
    }

    println!(
        "\n{} Dry run \u{2014} no files written.",
        style("\u{2139}").blue().bold()
    );

    Ok(())
}
