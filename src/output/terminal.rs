// Colored terminal output for ranked match lists.
//
// This module handles all terminal-specific formatting: colors, bars,
// summaries. The main.rs display code delegates here.

use colored::Colorize;

use crate::matching::matcher::{Algorithm, MatchResult};

use super::truncate_chars;

/// Column width for candidate ids; longer ids are truncated so the bars
/// stay aligned.
const ID_WIDTH: usize = 32;

/// Display a ranked match list in the terminal.
///
/// Results below `min_similarity` are hidden from the table but still
/// counted in the summary line.
pub fn display_match_results(
    source_name: &str,
    algorithm: Algorithm,
    results: &[MatchResult],
    min_similarity: f64,
) {
    if results.is_empty() {
        // An empty source short-circuits to zero results even when
        // candidates were supplied, so keep the wording neutral.
        println!("No results.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Matches for '{source_name}' ({algorithm}, {} candidates) ===",
            results.len()
        )
        .bold()
    );
    println!();

    let bar_width: usize = 20;
    let mut hidden = 0usize;

    for (i, result) in results.iter().enumerate() {
        if result.similarity < min_similarity {
            hidden += 1;
            continue;
        }

        // Build the bar: filled portion + empty portion
        let filled = (result.similarity.clamp(0.0, 1.0) * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        println!(
            "  {:>3}. {:<width$} {} {}",
            i + 1,
            truncate_chars(&result.id, ID_WIDTH).bold(),
            colorize_bar(&bar, result.similarity),
            format_percent(result.similarity),
            width = ID_WIDTH,
        );
    }

    println!();

    let strong = results.iter().filter(|r| r.similarity >= 0.8).count();
    let moderate = results
        .iter()
        .filter(|r| r.similarity >= 0.5 && r.similarity < 0.8)
        .count();

    if strong > 0 {
        println!("  {} {} strong matches (>= 80%)", "!!".red().bold(), strong);
    }
    if moderate > 0 {
        println!("  {} {} moderate matches (50-80%)", "~".yellow(), moderate);
    }
    if hidden > 0 {
        println!(
            "  {}",
            format!("({hidden} results below {:.0}% hidden)", min_similarity * 100.0).dimmed()
        );
    }
}

/// Display a single pairwise comparison.
pub fn display_comparison(a: &str, b: &str, scores: &[(Algorithm, f64)]) {
    println!("\n{}", format!("=== '{a}' vs '{b}' ===").bold());
    for (algorithm, score) in scores {
        println!("  {:<12} {}", algorithm.to_string(), format_percent(*score));
    }
}

/// Display the top word frequencies of a document.
pub fn display_frequencies(name: &str, frequencies: &[(String, u32)]) {
    if frequencies.is_empty() {
        println!("No word tokens found in '{name}'.");
        return;
    }

    println!("\n{}", format!("=== Word frequencies for '{name}' ===").bold());
    for (word, count) in frequencies {
        println!("  {:<24} {}", word, count.to_string().dimmed());
    }
}

fn format_percent(similarity: f64) -> String {
    let text = format!("{:>6.1}%", similarity * 100.0);
    if similarity >= 0.8 {
        text.red().bold().to_string()
    } else if similarity >= 0.5 {
        text.yellow().to_string()
    } else {
        text.normal().to_string()
    }
}

fn colorize_bar(bar: &str, similarity: f64) -> String {
    if similarity >= 0.8 {
        bar.bright_red().to_string()
    } else if similarity >= 0.5 {
        bar.bright_yellow().to_string()
    } else {
        bar.bright_blue().to_string()
    }
}
