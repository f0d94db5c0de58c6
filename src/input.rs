// src/input.rs
// =============================================================================
// Collects the URLs for a batch run and applies the batch policy.
//
// URLs can come from the command line, from a text file (one per line), or
// both. Blank lines are skipped; everything else is passed through as-is,
// the engine decides what is and isn't a valid URL.
//
// Batch policy (front-end only, the engine itself has no limit):
// - at least one URL
// - at most MAX_BATCH_SIZE URLs
// =============================================================================

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Largest batch the CLI accepts in one run
pub const MAX_BATCH_SIZE: usize = 500;

// Gathers URLs from arguments and an optional list file
//
// Arguments come first, then the file's lines in file order.
pub fn load_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls: Vec<String> = args.to_vec();

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL list {}", path.display()))?;
        urls.extend(parse_url_list(&content));
    }

    Ok(urls)
}

// One URL per line, blank lines ignored
//
// Only the line ending is removed; a URL with stray spaces stays that way
// and will fail at check time.
fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

// Rejects batches that are empty or too large
pub fn validate_batch(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        bail!("No URLs to check");
    }
    if urls.len() > MAX_BATCH_SIZE {
        bail!(
            "Too many URLs ({}): please limit a batch to {} URLs",
            urls.len(),
            MAX_BATCH_SIZE
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_args_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://a.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "b.com/page").unwrap();

        let args = vec!["first.com".to_string()];
        let urls = load_urls(&args, Some(file.path())).unwrap();
        assert_eq!(urls, vec!["first.com", "https://a.com", "b.com/page"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_urls(&[], Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read URL list"));
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(parse_url_list("a.com\r\nb.com\r\n"), vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_batch_limits() {
        assert!(validate_batch(&[]).is_err());
        assert!(validate_batch(&["a.com".to_string()]).is_ok());

        let full: Vec<String> = (0..MAX_BATCH_SIZE).map(|i| format!("h{}.com", i)).collect();
        assert!(validate_batch(&full).is_ok());

        let over: Vec<String> = (0..=MAX_BATCH_SIZE).map(|i| format!("h{}.com", i)).collect();
        assert!(validate_batch(&over).is_err());
    }
}
