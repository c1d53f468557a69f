//! Batch anagram search
//!
//! Runs both filters for every base word in a list against the same
//! dictionary and collects summary statistics.

use crate::core::Template;
use crate::finder::{find_matching_words, find_subset_words};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a batch run
pub struct BatchConfig {
    pub template: Option<Template>,
    pub show_progress: bool,
}

/// Result for a single base word
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub letters: String,
    pub anagram_count: usize,
    pub match_count: Option<usize>,
    /// Longest anagram, first in dictionary order on ties
    pub longest: Option<String>,
}

/// Statistics over a batch run
#[derive(Debug)]
pub struct BatchStatistics {
    pub entries: Vec<BatchEntry>,
    pub template: Option<Template>,
    pub total_anagrams: usize,
    pub total_matches: usize,
    pub average_anagrams: f64,
    pub richest: Option<(String, usize)>,
    pub total_time: Duration,
}

/// Run both filters for each base word in `base_words`
///
/// Blank lines and `#` comments in the input should already be removed; any
/// remaining blank entries are skipped.
#[must_use]
pub fn run_batch(base_words: &[String], config: BatchConfig, words: &WordList) -> BatchStatistics {
    let targets: Vec<&str> = base_words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();
    let mut entries = Vec::with_capacity(targets.len());

    for letters in targets {
        let anagrams = find_subset_words(letters, words);
        let match_count = config
            .template
            .as_ref()
            .map(|template| find_matching_words(&anagrams, template).len());

        let longest = anagrams
            .iter()
            .rev()
            .max_by_key(|word| word.chars().count())
            .cloned();

        pb.set_message(letters.to_string());
        pb.inc(1);

        entries.push(BatchEntry {
            letters: letters.to_string(),
            anagram_count: anagrams.len(),
            match_count,
            longest,
        });
    }

    pb.finish_with_message("Complete!");

    let total_anagrams: usize = entries.iter().map(|e| e.anagram_count).sum();
    let total_matches: usize = entries.iter().filter_map(|e| e.match_count).sum();
    let average_anagrams = if entries.is_empty() {
        0.0
    } else {
        total_anagrams as f64 / entries.len() as f64
    };

    let richest = entries
        .iter()
        .rev()
        .max_by_key(|e| e.anagram_count)
        .map(|e| (e.letters.clone(), e.anagram_count));

    BatchStatistics {
        entries,
        template: config.template,
        total_anagrams,
        total_matches,
        average_anagrams,
        richest,
        total_time: total_start.elapsed(),
    }
}
