// src/checker/dispatch.rs
// =============================================================================
// Runs many probes at once, never more than `concurrency` at a time.
//
// How it works:
// 1. Every URL is turned into a future that spawns its probe on tokio
// 2. `buffer_unordered(concurrency)` only polls that many of them at once,
//    so at most `concurrency` probes are ever in flight
// 3. A single loop drains the finished probes in completion order, fires
//    the progress callback and drops each result into its input slot
//
// Only that loop touches the callback, so callback calls can never overlap
// even though the probes themselves run in parallel.
//
// Rust concepts:
// - Arc: share one transport between many tasks
// - tokio::spawn + JoinHandle: a panicking probe only kills its own task
// - Streams: for processing many items concurrently
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use log::{info, warn};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;

use super::probe::probe;
use super::result::{CheckResult, ProgressEvent, StatusLabel};
use super::transport::{HttpTransport, Transport};
use crate::error::{EngineError, Result};

/// Progress callback: called once per finished URL, never concurrently
pub type ProgressFn<'a> = &'a mut (dyn FnMut(&ProgressEvent) + Send);

// Checks every URL with the real HTTP transport
//
// Parameters:
//   urls: the URLs to check, as the user typed them
//   concurrency: max probes in flight (any value >= 1)
//   timeout: per-probe timeout
//   on_progress: optional callback, once per URL in completion order
//
// Returns one CheckResult per input URL, in input order.
pub async fn check_many(
    urls: Vec<String>,
    concurrency: usize,
    timeout: Duration,
    on_progress: Option<ProgressFn<'_>>,
) -> Result<Vec<CheckResult>> {
    validate(concurrency, timeout)?;

    // One client (and one connection pool) for the whole run
    let transport = HttpTransport::new(timeout)?;
    check_many_with(Arc::new(transport), urls, concurrency, timeout, on_progress).await
}

// Same as check_many, with any transport
pub async fn check_many_with(
    transport: Arc<dyn Transport>,
    urls: Vec<String>,
    concurrency: usize,
    timeout: Duration,
    mut on_progress: Option<ProgressFn<'_>>,
) -> Result<Vec<CheckResult>> {
    validate(concurrency, timeout)?;

    let total = urls.len();
    info!(
        "checking {} URL(s), concurrency {}, timeout {:?}",
        total, concurrency, timeout
    );

    // Each future remembers the input position of its URL
    let futures = urls.into_iter().enumerate().map(|(index, url)| {
        let transport = Arc::clone(&transport);
        async move {
            let task_url = url.clone();
            let handle =
                tokio::spawn(async move { probe(transport.as_ref(), &task_url, timeout).await });

            let result = match handle.await {
                Ok(result) => result,
                Err(join_error) => {
                    let message = describe_join_error(join_error);
                    warn!("probe for {} failed unexpectedly: {}", url, message);
                    CheckResult::failed(url, StatusLabel::Error, message)
                }
            };
            (index, result)
        }
    });

    // One slot per input URL, filled as results arrive
    let mut slots: Vec<Option<CheckResult>> = (0..total).map(|_| None).collect();
    let mut completed = 0;

    let mut finished = stream::iter(futures).buffer_unordered(concurrency);
    while let Some((index, result)) = finished.next().await {
        completed += 1;

        if let Some(callback) = on_progress.as_mut() {
            callback(&ProgressEvent {
                completed,
                total,
                url: result.url.clone(),
                status_label: result.status_label,
            });
        }

        slots[index] = Some(result);
    }

    let results: Vec<CheckResult> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), total);

    info!("finished checking {} URL(s)", results.len());
    Ok(results)
}

// Contract checks, done before anything is dispatched
fn validate(concurrency: usize, timeout: Duration) -> Result<()> {
    if concurrency == 0 {
        return Err(EngineError::ZeroConcurrency);
    }
    if timeout.is_zero() {
        return Err(EngineError::ZeroTimeout);
    }
    Ok(())
}

fn describe_join_error(error: JoinError) -> String {
    if error.is_panic() {
        panic_message(error.into_panic())
    } else {
        error.to_string()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "probe panicked".to_string()
    }
}
