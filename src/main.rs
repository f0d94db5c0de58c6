// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Collect results, print them, optionally write the report
// 4. Exit with proper code (0 = all OK, 1 = some URLs not OK, 2 = error)
//
// The checking itself lives in the library (src/lib.rs); this file is only
// the thin front-end around it.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::path::Path;
use std::time::Duration;

use cli::{Cli, Commands};
use url_404_checker::input::{load_urls, validate_batch};
use url_404_checker::{
    check_many, check_one, encode_report, summarize, CheckResult, ProgressEvent, StatusLabel,
    Summary,
};

#[tokio::main]
async fn main() {
    // Log level comes from RUST_LOG, e.g. RUST_LOG=debug shows every probe
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every URL answered 200 OK
//   Ok(1) = at least one URL did not
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { url, timeout, json } => handle_single_check(&url, timeout, json).await,
        Commands::Batch {
            urls,
            file,
            concurrency,
            timeout,
            json,
            report,
        } => {
            let urls = load_urls(&urls, file.as_deref())?;
            validate_batch(&urls)?;
            handle_batch_check(urls, concurrency.into(), timeout, json, report.as_deref()).await
        }
    }
}

// Handles the 'check' subcommand
async fn handle_single_check(url: &str, timeout: u64, json: bool) -> Result<i32> {
    println!("🔍 Checking URL: {}", url);

    let result = check_one(url, Duration::from_secs(timeout)).await?;

    match (result.status_code, &result.error_message) {
        (Some(200), _) => println!("✅ URL is working! Status: 200 - {}", result.status_label),
        (Some(404), _) => println!("❌ URL is broken! Status: 404 - {}", result.status_label),
        (Some(code), _) => println!("⚠️  URL returned status: {} - {}", code, result.status_label),
        (None, message) => println!(
            "❌ Error checking URL: {}",
            message.as_deref().unwrap_or("unknown error")
        ),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(if result.is_ok() { 0 } else { 1 })
}

// Handles the 'batch' subcommand
async fn handle_batch_check(
    urls: Vec<String>,
    concurrency: usize,
    timeout: u64,
    json: bool,
    report_path: Option<&Path>,
) -> Result<i32> {
    println!(
        "\n🌐 Checking {} URL(s) with {} concurrent connection(s)...\n",
        urls.len(),
        concurrency
    );

    // Progress goes to stderr so --json output on stdout stays clean
    let mut show_progress = |event: &ProgressEvent| {
        eprintln!(
            "  [{:>3.0}%] Checking {}/{}: {} - Status: {}",
            event.fraction() * 100.0,
            event.completed,
            event.total,
            event.url,
            event.status_label
        );
    };

    let results = check_many(
        urls,
        concurrency,
        Duration::from_secs(timeout),
        Some(&mut show_progress),
    )
    .await?;
    let summary = summarize(&results);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
        print_problems(&results);
        print_summary(&summary);
    }

    if let Some(path) = report_path {
        let bytes = encode_report(&results, &summary)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("📝 Report written to {}", path.display());
    }

    Ok(if summary.not_ok() > 0 { 1 } else { 0 })
}

// Prints results as a human-readable table in the terminal
fn print_table(results: &[CheckResult]) {
    println!();
    println!("{:<60} {:<26} {:>8} {:<30}", "URL", "STATUS", "TIME", "MESSAGE");
    println!("{}", "=".repeat(127));

    for result in results {
        let time = result
            .response_time_seconds
            .map(|t| format!("{:.2}s", t))
            .unwrap_or_default();
        let message = result.error_message.as_deref().unwrap_or("");

        println!(
            "{:<60} {:<26} {:>8} {:<30}",
            truncate(&result.url, 57),
            format_status(&result.status_label),
            time,
            message
        );
    }

    println!();
}

// Lists 404s first, then every other non-OK result
fn print_problems(results: &[CheckResult]) {
    let broken: Vec<&CheckResult> = results.iter().filter(|r| r.is_not_found()).collect();
    let other: Vec<&CheckResult> = results
        .iter()
        .filter(|r| !r.is_ok() && !r.is_not_found())
        .collect();

    println!("Broken URLs (404 errors)");
    if broken.is_empty() {
        println!("   ✅ No 404 errors found!");
    }
    for result in broken {
        println!("   ❌ {}", result.url);
    }

    println!("Other Errors");
    if other.is_empty() {
        println!("   ✅ No other errors found!");
    }
    for result in other {
        let detail = match &result.error_message {
            Some(message) => format!("{} ({})", result.status_label, message),
            None => result.status_label.to_string(),
        };
        println!("   ⚠️  {} - {}", result.url, detail);
    }

    println!();
}

fn print_summary(summary: &Summary) {
    println!("📊 Summary:");
    for (metric, count) in summary.rows() {
        println!("   {:<28} {}", metric, count);
    }
}

// Truncate long URLs for display (char-aware so we never split a code point)
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

// Formats the status label with an emoji prefix
fn format_status(label: &StatusLabel) -> String {
    let icon = match label {
        StatusLabel::Ok => "✅",
        StatusLabel::NotFound => "❌",
        StatusLabel::Redirect(_) => "🔀",
        StatusLabel::ClientError(_) | StatusLabel::ServerError(_) => "⚠️ ",
        StatusLabel::Unknown(_) => "❔",
        StatusLabel::Timeout => "⏱️ ",
        StatusLabel::ConnectionFailed => "🌐",
        StatusLabel::RequestFailed | StatusLabel::Error => "💥",
    };
    format!("{} {}", icon, label)
}
