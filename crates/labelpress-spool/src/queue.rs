//! # Raw Print Queue Transport
//!
//! Delivers a compiled ZPL stream to a CUPS queue, unmodified.
//!
//! ## Transport Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Raw Transport Contract                             │
//! │                                                                         │
//! │  IN:  a complete, already-validated byte stream                        │
//! │       (begins ^XA, ends ^XZ, ASCII-safe)                               │
//! │                                                                         │
//! │  DO:  lp -d <queue> -o raw -                                           │
//! │       stream bytes to stdin, wait for exit                             │
//! │                                                                         │
//! │  NEVER: scale, rotate, re-render, reorder, append                     │
//! │       `-o raw` bypasses driver-side rendering entirely - any           │
//! │       transformation here would break the engine's exact-dots          │
//! │       guarantee                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{SpoolError, SpoolResult};

// =============================================================================
// Raw Print Queue
// =============================================================================

/// Handle to one named CUPS queue, used in raw (driver-less) mode.
#[derive(Debug, Clone)]
pub struct RawPrintQueue {
    printer_name: String,
}

impl RawPrintQueue {
    /// Creates a handle for the named queue. No I/O happens here.
    pub fn new(printer_name: impl Into<String>) -> Self {
        RawPrintQueue {
            printer_name: printer_name.into(),
        }
    }

    /// The CUPS queue name this handle submits to.
    pub fn printer_name(&self) -> &str {
        &self.printer_name
    }

    /// Submits a complete ZPL stream to the queue via `lp -o raw`.
    ///
    /// ## Errors
    /// - [`SpoolError::CommandNotFound`] - `lp` is not installed
    /// - [`SpoolError::SpoolerRejected`] - `lp` exited non-zero (unknown
    ///   queue, spooler down, ...); stderr is carried for the operator
    /// - [`SpoolError::Io`] - the stdin pipe broke mid-stream
    pub async fn submit(&self, stream: &[u8]) -> SpoolResult<()> {
        debug!(
            printer = %self.printer_name,
            bytes = stream.len(),
            "Submitting raw job to CUPS"
        );

        let mut child = Command::new("lp")
            .args(["-d", &self.printer_name, "-o", "raw", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| map_spawn_error(e, "lp"))?;

        // Stream the bytes and close stdin so lp sees EOF.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            SpoolError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "lp stdin pipe unavailable",
            ))
        })?;
        stdin.write_all(stream).await?;
        stdin.shutdown().await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(SpoolError::SpoolerRejected {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(printer = %self.printer_name, bytes = stream.len(), "Print job submitted");
        Ok(())
    }

    /// Cancels every pending job on the queue via `cancel -a`.
    ///
    /// Used when a misconfigured run has stacked up garbage jobs that would
    /// otherwise print as soon as the hardware recovers.
    pub async fn clear(&self) -> SpoolResult<()> {
        let output = Command::new("cancel")
            .args(["-a", &self.printer_name])
            .output()
            .await
            .map_err(|e| map_spawn_error(e, "cancel"))?;

        if !output.status.success() {
            return Err(SpoolError::SpoolerRejected {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(printer = %self.printer_name, "Print queue cleared");
        Ok(())
    }
}

/// Maps a spawn failure to the right error: a missing binary gets its own
/// variant so the operator is told to install CUPS rather than shown a raw
/// ENOENT.
fn map_spawn_error(err: std::io::Error, tool: &str) -> SpoolError {
    if err.kind() == std::io::ErrorKind::NotFound {
        SpoolError::CommandNotFound {
            tool: tool.to_string(),
        }
    } else {
        SpoolError::Io(err)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
