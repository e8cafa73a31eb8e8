mod logging;

use clap::{Parser, Subcommand};
use notediff_core::{
    comparison_rows, BatchReport, ComparisonRun, ComparisonSession, ExtractorSettings,
    FootnoteExtractor, Result,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "notediff")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Compare footnotes of .docx variants against a base document", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// JSON file with extractor settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the footnotes of one document
    Extract {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Compare every document in a directory against a base document
    Compare {
        #[arg(short, long)]
        base: PathBuf,

        #[arg(short, long)]
        dir: PathBuf,

        #[arg(long)]
        json: bool,

        /// List the extra-footnote pool alphabetically
        #[arg(long)]
        sorted: bool,
    },
    /// Print MATCH/MISSING rows for each base footnote against one variant
    Rows {
        #[arg(short, long)]
        base: PathBuf,

        #[arg(short, long)]
        variant: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    generated_at: String,
    data: &'a T,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let profile = if cli.log_json {
        logging::Profile::Production
    } else {
        logging::Profile::Development
    };
    logging::init(profile, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.settings.as_deref())?;
    debug!(?settings, "extractor settings");

    match cli.command {
        Commands::Extract { file, json } => {
            let footnotes = FootnoteExtractor::extract(&file, Some(&settings))?;
            if json {
                print_json(&footnotes);
            } else {
                for footnote in &footnotes {
                    println!("{}", footnote);
                }
            }
        }
        Commands::Compare {
            base,
            dir,
            json,
            sorted,
        } => {
            let mut session = ComparisonSession::new(settings);
            session.select_base(base);
            let report = session.compare_directory(&dir)?;
            if json {
                print_json(&report);
            } else {
                print_report(&report, sorted);
            }
        }
        Commands::Rows {
            base,
            variant,
            json,
        } => {
            let run = ComparisonRun::new(base, Some(&settings))?;
            let footnotes = FootnoteExtractor::extract(&variant, Some(&settings))?;
            let rows = comparison_rows(run.base(), &footnotes);
            if json {
                print_json(&rows);
            } else {
                for row in &rows {
                    println!("{}\t{}", row.status.as_str(), row.base_footnote);
                }
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<ExtractorSettings> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| notediff_core::NotediffError::io(path, e))?;
            ExtractorSettings::from_json(&json)
        }
        None => Ok(ExtractorSettings::default()),
    }
}

fn print_json<T: Serialize>(body: &T) {
    let envelope = JsonEnvelope {
        generated_at: chrono::Utc::now().to_rfc3339(),
        data: body,
    };
    println!("{}", serde_json::to_string_pretty(&envelope).unwrap_or_default());
}

fn print_report(report: &BatchReport, sorted: bool) {
    println!(
        "Base document: {} ({} footnotes)",
        report.base_filename, report.base_footnote_count
    );
    println!();
    println!("Filename\tAmount of Footnotes\tDifference to base document\tExtra footnotes");
    for result in &report.results {
        println!(
            "{}\t{}\t{}\t{}",
            result.filename,
            result.footnote_count,
            result.extra_count,
            result.extra_footnotes_display()
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!("Failed documents:");
        for failure in &report.failures {
            println!("  {}: {}", failure.filename, failure.error);
        }
    }

    println!();
    println!("Unique extra footnotes ({}):", report.pool.len());
    let texts = if sorted {
        report.pool.sorted()
    } else {
        report.pool.iter().collect()
    };
    for text in texts {
        println!("  [ ] {}", text);
    }
}
