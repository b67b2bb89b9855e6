//! # Spool Error Types
//!
//! Error types for the transport and collaborator layer.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Spool Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │      Engine             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │ ConfigLoadFailed│  │ CommandNotFound │  │  Compile (CoreError)   │ │
//! │  │ ConfigSaveFailed│  │ SpoolerRejected │  │                         │ │
//! │  │                 │  │ PrinterOffline  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for spool operations.
pub type SpoolResult<T> = Result<T, SpoolError>;

/// Spool error type covering settings, discovery and transport failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging (tool name, stderr)
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum SpoolError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load the station settings file.
    #[error("Failed to load settings: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save the station settings file.
    #[error("Failed to save settings: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// A required CUPS tool is not installed.
    ///
    /// ## When This Occurs
    /// - `lp` / `lpstat` / `cancel` missing (CUPS not installed)
    #[error("'{tool}' command not found - is CUPS installed?")]
    CommandNotFound { tool: String },

    /// The print system accepted the process but rejected the job.
    #[error("Print system rejected the job (exit code {code}): {stderr}")]
    SpoolerRejected { code: i32, stderr: String },

    /// No Zebra device is attached on USB.
    ///
    /// Raised by the preflight probe, before any bytes leave the machine.
    #[error("Printer not detected on USB - check the cable")]
    PrinterOffline,

    /// The named queue is not registered with CUPS.
    #[error("Print queue '{name}' is not registered with CUPS")]
    QueueNotRegistered { name: String },

    // =========================================================================
    // Engine Errors
    // =========================================================================
    /// The engine refused to compile the job (no bytes were produced).
    #[error("Compilation refused: {0}")]
    Compile(#[from] labelpress_core::CoreError),

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Underlying I/O failure (pipe to lp broke, file unreadable, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<toml::de::Error> for SpoolError {
    fn from(err: toml::de::Error) -> Self {
        SpoolError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SpoolError {
    fn from(err: toml::ser::Error) -> Self {
        SpoolError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl SpoolError {
    /// Returns true if the failure happened before any bytes reached the
    /// print system (safe to fix settings and retry without a wasted label).
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            SpoolError::ConfigLoadFailed(_)
                | SpoolError::ConfigSaveFailed(_)
                | SpoolError::PrinterOffline
                | SpoolError::QueueNotRegistered { .. }
                | SpoolError::Compile(_)
        )
    }
}
