//! Command-line interface for fuzzy matching and word-list search.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fuzztrie::prelude::*;

#[derive(Parser)]
#[command(name = "fuzztrie")]
#[command(about = "Fuzzy string matching with Levenshtein automata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a query is within edit distance of a pattern
    Match {
        /// Pattern to compile the automaton from
        pattern: String,

        /// Query term to test
        query: String,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,
    },

    /// Search a word list for fuzzy matches
    Search {
        /// Query term
        query: String,

        /// Word list file, one term per line
        #[arg(short, long)]
        dict: PathBuf,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,

        /// Result limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compute the exact edit distance between two terms
    Distance {
        /// First term
        a: String,

        /// Second term
        b: String,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Match {
            pattern,
            query,
            max_distance,
        } => cmd_match(&pattern, &query, max_distance),
        Commands::Search {
            query,
            dict,
            max_distance,
            limit,
        } => cmd_search(&query, &dict, max_distance, limit),
        Commands::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
            Ok(())
        }
    }
}

fn cmd_match(pattern: &str, query: &str, max_distance: usize) -> Result<()> {
    let dfa = CharAutomaton::from_pattern(pattern, max_distance);
    if dfa.matches(query) {
        println!(
            "{} ({} is within distance {} of {})",
            "match".green().bold(),
            query,
            max_distance,
            pattern
        );
    } else {
        println!(
            "{} ({} is more than {} edits from {})",
            "no match".red().bold(),
            query,
            max_distance,
            pattern
        );
    }
    Ok(())
}

fn cmd_search(query: &str, dict: &Path, max_distance: usize, limit: Option<usize>) -> Result<()> {
    let contents = fs::read_to_string(dict)
        .with_context(|| format!("Failed to read word list: {}", dict.display()))?;

    let index: CharIndex<String> = CharIndex::from_pairs(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|word| (word, word.to_string())),
    );

    let mut count = 0;
    for word in index
        .retrieve(query, max_distance)
        .take(limit.unwrap_or(usize::MAX))
    {
        println!("{}", word.cyan());
        count += 1;
    }

    eprintln!(
        "{} match(es) for '{}' within distance {} over {} term(s)",
        count,
        query,
        max_distance,
        index.len()
    );
    Ok(())
}
