//! Display functions for command results

use super::formatters::{format_word_list, pluralize, render_grid, sort_by_length_desc};
use crate::commands::{BatchStatistics, FindResult, GridResult, MatchResult};
use colored::Colorize;

/// Print the result of an anagram search
///
/// Anagrams are listed longest first; template matches keep dictionary order.
pub fn print_find_result(result: &FindResult, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        result.letters.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nFound {} possible words (of {} in dictionary)",
        result.anagrams.len().to_string().bright_green().bold(),
        result.dictionary_size
    );
    let sorted = sort_by_length_desc(&result.anagrams);
    println!("{}", format_word_list(&sorted, limit));

    if let Some((template, matching)) = &result.matches {
        println!(
            "\nFound {} matching words for {}",
            matching.len().to_string().bright_green().bold(),
            template.to_string().bright_yellow()
        );
        println!("{}", format_word_list(matching, limit));
    }

    if !result.hints.is_empty() {
        println!("\n💡 {}", "Hints:".bright_cyan().bold());
        for hint in &result.hints {
            println!("  • {}", hint.to_uppercase());
        }
    }
}

/// Print the result of a template match
pub fn print_match_result(result: &MatchResult, limit: Option<usize>) {
    let pool = match &result.letters {
        Some(letters) => format!(
            "{} formable from {}",
            pluralize(result.pool_size, "word", "words"),
            letters.to_uppercase().bright_yellow()
        ),
        None => format!("{} in dictionary", pluralize(result.pool_size, "word", "words")),
    };

    println!(
        "\nTemplate {} against {pool}",
        result.template.to_string().bright_yellow().bold()
    );
    println!(
        "Found {} matching words",
        result.matches.len().to_string().bright_green().bold()
    );
    println!("{}", format_word_list(&result.matches, limit));
}

/// Print a puzzle grid and the candidates for each crossing word
pub fn print_grid_result(result: &GridResult, reveal: bool, limit: Option<usize>) {
    let layout = &result.layout;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({}×{})",
        "PUZZLE:".bright_cyan().bold(),
        layout.base_word().bright_yellow().bold(),
        layout.rows(),
        layout.cols()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (row, line) in render_grid(layout, reveal).iter().enumerate() {
        let mut spaced = String::with_capacity(line.len() * 2);
        for ch in line.chars() {
            spaced.push(ch);
            spaced.push(' ');
        }
        if row == layout.base_row() {
            println!("   {}", spaced.bright_yellow().bold());
        } else {
            println!("   {spaced}");
        }
    }

    println!(
        "\n📊 {} anagrams of {}",
        result.anagram_count,
        layout.base_word()
    );

    for fit in &result.fits {
        let marker = if fit.is_anagram {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "\n  {} {} column {} template {}: {}",
            marker,
            fit.placement.word().bright_white().bold(),
            fit.placement.column(),
            fit.template.to_string().bright_yellow(),
            pluralize(fit.candidates.len(), "candidate", "candidates")
        );
        if !fit.candidates.is_empty() {
            println!("    {}", format_word_list(&fit.candidates, limit));
        }
    }
}

/// Print batch statistics as a table
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    let template_header = stats
        .template
        .as_ref()
        .map_or_else(String::new, |template| {
            let name = template.to_string();
            format!("{name:>10}")
        });

    println!(
        "\n  {:<16} {:>8} {template_header}  {}",
        "Letters".bright_cyan().bold(),
        "Words".bright_cyan().bold(),
        "Longest".bright_cyan().bold()
    );

    for entry in &stats.entries {
        let matches = entry
            .match_count
            .map_or_else(String::new, |count| format!("{count:>10}"));
        println!(
            "  {:<16} {:>8} {matches}  {}",
            entry.letters,
            entry.anagram_count,
            entry.longest.as_deref().unwrap_or("-")
        );
    }

    println!("\n📊 {}", "Summary".bright_cyan().bold());
    println!("  Base words:        {}", stats.entries.len());
    println!("  Total anagrams:    {}", stats.total_anagrams);
    println!(
        "  Average per word:  {}",
        format!("{:.1}", stats.average_anagrams).bright_yellow().bold()
    );
    if stats.template.is_some() {
        println!("  Template matches:  {}", stats.total_matches);
    }
    if let Some((letters, count)) = &stats.richest {
        println!(
            "  Richest letters:   {} ({})",
            letters.bright_green(),
            pluralize(*count, "word", "words")
        );
    }
    println!(
        "  Total time:        {:.2}s",
        stats.total_time.as_secs_f64()
    );
}
