//! Anagram Finder - CLI
//!
//! Finds words formable from a set of letters, filters them by a positional
//! template, and lays out crossword puzzles around a base word.

use anagram_finder::{
    commands::{
        BatchConfig, FindConfig, MatchConfig, build_grid, find_words, match_words, prompt_letters,
        run_batch,
    },
    core::Template,
    layout::Placement,
    output::{print_batch_statistics, print_find_result, print_grid_result, print_match_result},
    wordlists::{WordList, source_from_name},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find words formable from a set of letters and match them against crossword templates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'builtin' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all words formable from the given letters (prompts when omitted)
    Find {
        /// Available letters, e.g. a base word
        letters: Option<String>,

        /// Template to filter the results, e.g. '_n' ('_', '?', '.', '*' are wildcards)
        #[arg(short, long)]
        template: Option<Template>,

        /// Maximum number of words to print per list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show this many randomly chosen words as hints
        #[arg(long, default_value = "0")]
        hints: usize,
    },

    /// Match a template against the dictionary
    Match {
        /// Template, e.g. 'c_t'
        template: Template,

        /// Only consider words formable from these letters
        #[arg(short = 'L', long)]
        letters: Option<String>,

        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Lay out crossing words over a base word
    Grid {
        /// Base word, written across
        base: String,

        /// Crossing words as WORD@COLUMN:OVERLAP, optionally +I,J for revealed letters
        placements: Vec<Placement>,

        /// Show every letter instead of blanks
        #[arg(short, long)]
        reveal: bool,

        /// Maximum number of candidates to print per crossing
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run the search for every base word in a file
    Batch {
        /// File with one base word per line
        file: PathBuf,

        /// Template applied to each word's results
        #[arg(short, long)]
        template: Option<Template>,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let source = source_from_name(&cli.wordlist);
    debug!("using word source {}", source.name());
    let words = source
        .load()
        .with_context(|| format!("Failed to load word list '{}'", source.name()))?;

    match cli.command {
        Commands::Find {
            letters,
            template,
            limit,
            hints,
        } => run_find_command(letters, template, limit, hints, &words),
        Commands::Match {
            template,
            letters,
            limit,
        } => {
            run_match_command(template, letters, limit, &words);
            Ok(())
        }
        Commands::Grid {
            base,
            placements,
            reveal,
            limit,
        } => run_grid_command(&base, placements, reveal, limit, &words),
        Commands::Batch { file, template } => run_batch_command(&file, template, &words),
    }
}

fn run_find_command(
    letters: Option<String>,
    template: Option<Template>,
    limit: Option<usize>,
    hints: usize,
    words: &WordList,
) -> Result<()> {
    let letters = match letters {
        Some(letters) => letters,
        None => prompt_letters().map_err(|e| anyhow::anyhow!(e))?,
    };

    let mut config = FindConfig::new(letters).with_hints(hints);
    if let Some(template) = template {
        config = config.with_template(template);
    }

    let result = find_words(config, words, &mut rand::rng());
    print_find_result(&result, limit);
    Ok(())
}

fn run_match_command(
    template: Template,
    letters: Option<String>,
    limit: Option<usize>,
    words: &WordList,
) {
    let result = match_words(MatchConfig { template, letters }, words);
    print_match_result(&result, limit);
}

fn run_grid_command(
    base: &str,
    placements: Vec<Placement>,
    reveal: bool,
    limit: Option<usize>,
    words: &WordList,
) -> Result<()> {
    let result = build_grid(base, placements, words).map_err(|e| anyhow::anyhow!(e))?;
    print_grid_result(&result, reveal, limit);
    Ok(())
}

fn run_batch_command(file: &Path, template: Option<Template>, words: &WordList) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read base words from {}", file.display()))?;
    let base_words = WordList::from_lines(&content);

    println!("\n{}", "═".repeat(70));
    println!(" Batch Anagram Search ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSearching {} base words against {} dictionary words",
        base_words.len(),
        words.len()
    );
    if let Some(template) = &template {
        println!("Template: {template}");
    }
    println!();

    let config = BatchConfig {
        template,
        show_progress: true,
    };
    let stats = run_batch(base_words.as_slice(), config, words);
    print_batch_statistics(&stats);
    Ok(())
}
