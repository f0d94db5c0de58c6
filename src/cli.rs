// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - check: one URL
// - batch: many URLs, from arguments and/or a list file
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "url-404-checker",
    version,
    about = "Check a batch of URLs for 404s and other HTTP failures",
    long_about = "url-404-checker requests every URL you give it, classifies the answer \
                  (OK, Not Found, redirects, client/server errors, timeouts, connection \
                  failures) and summarizes the results. Use it to find dead pages before \
                  your users do."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single URL
    ///
    /// Example: url-404-checker check example.com/page-to-check
    Check {
        /// URL to check; http:// is added when no scheme is given
        url: String,

        /// Request timeout in seconds (1-30)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=30))]
        timeout: u64,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check many URLs concurrently
    ///
    /// Example: url-404-checker batch --file urls.txt --concurrency 10 --report report.json
    Batch {
        /// URLs to check (can be combined with --file)
        urls: Vec<String>,

        /// Text file with one URL per line
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Concurrent connections (1-20); higher is faster but heavier
        #[arg(long, short, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=20))]
        concurrency: u16,

        /// Request timeout in seconds (1-30)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=30))]
        timeout: u64,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Write the full report (All URLs / 404 Errors / Summary) to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_defaults() {
        let cli = Cli::try_parse_from(["url-404-checker", "batch", "a.com", "b.com"]).unwrap();
        match cli.command {
            Commands::Batch { urls, concurrency, timeout, json, report, file } => {
                assert_eq!(urls, vec!["a.com", "b.com"]);
                assert_eq!(concurrency, 5);
                assert_eq!(timeout, 10);
                assert!(!json);
                assert!(report.is_none());
                assert!(file.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_concurrency_out_of_range() {
        assert!(Cli::try_parse_from(["url-404-checker", "batch", "-c", "0", "a.com"]).is_err());
        assert!(Cli::try_parse_from(["url-404-checker", "batch", "-c", "21", "a.com"]).is_err());
        assert!(Cli::try_parse_from(["url-404-checker", "batch", "-c", "20", "a.com"]).is_ok());
    }

    #[test]
    fn test_timeout_out_of_range() {
        assert!(Cli::try_parse_from(["url-404-checker", "check", "a.com", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["url-404-checker", "check", "a.com", "--timeout", "31"]).is_err());
    }
}
