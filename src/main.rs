use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use docmatch::config::Config;
use docmatch::matching::matcher::{match_documents, Algorithm, Candidate};
use docmatch::matching::tokenize::word_frequencies;
use docmatch::output::terminal;

/// docmatch: document similarity scoring and ranking.
///
/// Scores a source document against a set of candidate documents using one
/// of three algorithms (frequency overlap, cosine, Levenshtein) and ranks
/// the candidates by similarity.
#[derive(Parser)]
#[command(name = "docmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a source document against candidate files and rank the results
    Match {
        /// The source document to match from
        source: PathBuf,

        /// Candidate files or directories (directories expand to their files)
        #[arg(long = "against", required = true, num_args = 1..)]
        against: Vec<PathBuf>,

        /// Similarity algorithm (default: frequency, or DOCMATCH_ALGORITHM)
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Hide results below this similarity (0.0 - 1.0)
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Keep only the N best matches
        #[arg(long)]
        top: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a single pair of documents
    Compare {
        /// First document
        a: PathBuf,

        /// Second document
        b: PathBuf,

        /// Similarity algorithm (default: frequency, or DOCMATCH_ALGORITHM)
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Report all three algorithms side by side
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the word-frequency profile of a document
    Tokens {
        /// The document to tokenize
        file: PathBuf,

        /// How many of the most frequent words to show
        #[arg(long, default_value = "20")]
        top: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging. Logs go to stderr so --json output on
    // stdout stays machine-parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docmatch=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Match {
            source,
            against,
            algorithm,
            min_similarity,
            top,
            json,
        } => {
            let algorithm = algorithm.unwrap_or(config.default_algorithm);
            let min_similarity = min_similarity.unwrap_or(config.min_similarity);

            let source_text = read_document(&source)?;
            if source_text.is_empty() {
                warn!(path = %source.display(), "Source document is empty — nothing to match");
            }

            let candidates = collect_candidates(&against)?;
            info!(
                candidates = candidates.len(),
                %algorithm,
                "Scoring candidates"
            );

            let mut results = match_documents(&source_text, &candidates, algorithm);
            if let Some(top) = top {
                results.truncate(top);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                terminal::display_match_results(
                    &display_name(&source),
                    algorithm,
                    &results,
                    min_similarity,
                );
            }
        }

        Commands::Compare {
            a,
            b,
            algorithm,
            all,
            json,
        } => {
            let text_a = read_document(&a)?;
            let text_b = read_document(&b)?;

            let algorithms: Vec<Algorithm> = if all {
                vec![Algorithm::Frequency, Algorithm::Cosine, Algorithm::Levenshtein]
            } else {
                vec![algorithm.unwrap_or(config.default_algorithm)]
            };

            let scores: Vec<(Algorithm, f64)> = algorithms
                .into_iter()
                .map(|alg| (alg, alg.score(&text_a, &text_b)))
                .collect();

            if json {
                let entries: Vec<serde_json::Value> = scores
                    .iter()
                    .map(|(alg, score)| {
                        serde_json::json!({ "algorithm": alg, "similarity": score })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                terminal::display_comparison(&display_name(&a), &display_name(&b), &scores);
            }
        }

        Commands::Tokens { file, top, json } => {
            let text = read_document(&file)?;

            let mut frequencies: Vec<(String, u32)> = word_frequencies(&text).into_iter().collect();
            // Highest count first; ties alphabetical so output is deterministic
            frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            frequencies.truncate(top);

            if json {
                let entries: Vec<serde_json::Value> = frequencies
                    .iter()
                    .map(|(word, count)| serde_json::json!({ "word": word, "count": count }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                terminal::display_frequencies(&display_name(&file), &frequencies);
            }
        }
    }

    Ok(())
}

/// Read a document file as UTF-8 text.
fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Expand the --against paths into matcher candidates.
///
/// Files are used directly; directories contribute their immediate files,
/// sorted by name so candidate order (and therefore tie-breaking) is
/// deterministic. The candidate id is the file stem.
fn collect_candidates(paths: &[PathBuf]) -> Result<Vec<Candidate>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("Failed to read directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            if entries.is_empty() {
                warn!(path = %path.display(), "Candidate directory is empty");
            }
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut candidates = Vec::with_capacity(files.len());
    for file in &files {
        let content = read_document(file)?;
        candidates.push(Candidate {
            id: display_name(file),
            content,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if candidates.is_empty() {
        println!("{}", "No candidate documents found.".yellow());
    }

    Ok(candidates)
}

/// Human-readable name for a path — the file stem, falling back to the
/// full path display.
fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
