//! # Dispatch
//!
//! The compile-then-submit orchestration for one label job.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         One Dispatch                                    │
//! │                                                                         │
//! │  LabelJob                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  zpl::compile ──refusal──► SpoolError::Compile (zero bytes, no I/O)    │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  offset advisories ──► tracing::warn! (non-fatal, job continues)       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  USB preflight ──unplugged──► SpoolError::PrinterOffline               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  queue preflight ──unknown──► SpoolError::QueueNotRegistered           │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  queue.submit (raw, unmodified)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A caller that wants to abort simply drops the job before calling this -
//! there is nothing to cancel once `submit` has returned.

use tracing::{info, warn};

use labelpress_core::types::LabelJob;
use labelpress_core::{units, zpl};

use crate::discovery;
use crate::error::{SpoolError, SpoolResult};
use crate::queue::RawPrintQueue;

/// Compiles a job and submits the resulting stream to the queue.
///
/// Compilation happens first so every engine refusal aborts before any
/// process is spawned. Offset advisories are logged, never fatal - an
/// over-corrected offset prints a blank label, which is exactly the feedback
/// the operator needs.
pub async fn dispatch(job: &LabelJob, queue: &RawPrintQueue) -> SpoolResult<()> {
    let stream = zpl::compile(job)?;

    for advisory in units::offset_advisories(&job.resolved) {
        warn!(%advisory, "Offset sanity check");
    }

    if !discovery::usb_attached().await {
        return Err(SpoolError::PrinterOffline);
    }

    if !discovery::queue_registered(queue.printer_name()).await {
        return Err(SpoolError::QueueNotRegistered {
            name: queue.printer_name().to_string(),
        });
    }

    queue.submit(&stream).await?;

    info!(
        printer = queue.printer_name(),
        mode = ?job.mode,
        "Label dispatched"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelpress_core::types::{ContentMode, PrintQuality, ResolvedLabel};
    use labelpress_core::CoreError;

    fn resolved() -> ResolvedLabel {
        ResolvedLabel {
            width_dots: 400,
            height_dots: 200,
            x_offset_dots: 0,
            y_offset_dots: 0,
            dpi: 203,
        }
    }

    fn quality() -> PrintQuality {
        PrintQuality::new(15, 4, 0.0, 0.0).unwrap()
    }

    #[tokio::test]
    async fn test_refused_compilation_never_reaches_the_queue() {
        // Empty payload: the engine refuses, so dispatch must fail with a
        // Compile error even though the queue name is nonsense - proof that
        // no I/O was attempted with a partial stream.
        let job = LabelJob {
            resolved: resolved(),
            quality: quality(),
            mode: ContentMode::Standard,
            payload: None,
        };
        let queue = RawPrintQueue::new("no-such-queue-anywhere");

        let err = dispatch(&job, &queue).await.unwrap_err();
        assert!(matches!(
            err,
            SpoolError::Compile(CoreError::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_degenerate_frame_refused_before_io() {
        let tiny = ResolvedLabel {
            width_dots: 10,
            ..resolved()
        };
        let job = LabelJob::test_frame(tiny, quality());
        let queue = RawPrintQueue::new("no-such-queue-anywhere");

        let err = dispatch(&job, &queue).await.unwrap_err();
        assert!(matches!(
            err,
            SpoolError::Compile(CoreError::DegenerateFrame { .. })
        ));
    }

    #[tokio::test]
    async fn test_valid_job_on_unknown_queue_fails_past_compilation() {
        // A compilable job aimed at a queue CUPS has never heard of must
        // fail in preflight or transport, never as a Compile refusal. Which
        // variant depends on what the host has installed, so only the
        // category is pinned.
        let job = LabelJob::test_frame(resolved(), quality());
        let queue = RawPrintQueue::new("no-such-queue-anywhere");

        let err = dispatch(&job, &queue).await.unwrap_err();
        assert!(!matches!(err, SpoolError::Compile(_)));
    }
}
