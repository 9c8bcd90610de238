use anyhow::Context;
use clap::Parser;
use git_owner::blame::BlameStats;
use git_owner::BlameAnalyzer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version,
    about = "Shows per-committer ownership statistics for a file using git blame",
    long_about = None
)]
struct Cli {
    /// Path to the file to analyze
    file: PathBuf,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let analyzer = BlameAnalyzer::new();
    let stats = analyzer
        .analyze(&cli.file)
        .with_context(|| format!("Failed to analyze {}", cli.file.display()))?;

    match cli.format.to_lowercase().as_str() {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats.committers)
                    .context("Failed to serialize to JSON")?
            );
        }
        "text" => print_table(&stats),
        _ => anyhow::bail!("Unsupported output format: {}", cli.format),
    }

    Ok(())
}

/// コミッターを行数の降順で並べた表を出力します
///
/// 割合の列は最も長い値に合わせて右揃えになります。
fn print_table(stats: &BlameStats) {
    let mut committers: Vec<_> = stats.committers.iter().collect();
    committers.sort_by(|a, b| b.lines.cmp(&a.lines));

    let width = committers
        .iter()
        .map(|committer| format!("{:.1}", committer.percentage * 100.0).len())
        .max()
        .unwrap_or(0);

    for committer in &committers {
        println!(
            "{:>width$.1}% {}",
            committer.percentage * 100.0,
            committer.email,
            width = width
        );
    }

    println!();
    if stats.paired_lines > 0 {
        println!("{} lines, {} paired.", stats.total_lines, stats.paired_lines);
    } else {
        println!("{} lines.", stats.total_lines);
    }
}
