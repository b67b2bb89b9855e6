//! # Error Types
//!
//! Engine error types for labelpress-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  labelpress-core errors (this file)                                    │
//! │  ├── CoreError        - Refusals to resolve or compile a job          │
//! │  └── ValidationError  - Value-type construction failures              │
//! │                                                                         │
//! │  labelpress-spool errors (separate crate)                              │
//! │  └── SpoolError       - Transport / discovery / settings failures     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SpoolError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending millimeters, dpi, dots)
//! 3. Errors are enum variants, never String
//! 4. Every refusal is scoped to a single job; the engine stays reusable

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Engine errors: refusals to resolve or compile a label job.
///
/// All variants are local validation failures detected **before** any output
/// is produced. None are retried by the engine itself - the caller gets a
/// refusal and no partial artifact.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Label dimensions are not physically meaningful.
    ///
    /// ## When This Occurs
    /// - `width_mm <= 0` or `height_mm <= 0`
    /// - Upstream handed us a zeroed or garbage settings record
    #[error("Invalid label geometry: {width_mm}mm x {height_mm}mm (both dimensions must be > 0)")]
    InvalidGeometry { width_mm: f64, height_mm: f64 },

    /// Print-head resolution is not one the engine is calibrated for.
    ///
    /// ## When This Occurs
    /// - `dpi` is outside [`crate::SUPPORTED_DPIS`]
    ///
    /// The dots-per-mm constant must be exact for frame geometry to align
    /// with the physical label edges, so unknown resolutions are refused
    /// rather than approximated.
    #[error("Unsupported print resolution: {dpi} dpi (supported: 203, 300, 600)")]
    UnsupportedResolution { dpi: u32 },

    /// Standard-content mode was selected with no payload to print.
    #[error("Standard content mode requires a non-empty payload")]
    EmptyContent,

    /// The calibration frame would self-overlap or vanish.
    ///
    /// ## When This Occurs
    /// - Resolved label width or height in dots is smaller than twice the
    ///   frame stroke width
    ///
    /// ## User Workflow
    /// ```text
    /// Test frame on 1.5mm x 25mm label @ 203 dpi
    ///      │
    ///      ▼
    /// width_dots = 12, stroke = 8, 12 < 2*8
    ///      │
    ///      ▼
    /// DegenerateFrame { width_dots: 12, height_dots: 200, stroke_dots: 8 }
    /// ```
    #[error("Label too small for a test frame: {width_dots}x{height_dots} dots with {stroke_dots}-dot stroke")]
    DegenerateFrame {
        width_dots: u32,
        height_dots: u32,
        stroke_dots: u32,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Value-type construction failures.
///
/// The original tool treated darkness, speed and offsets as loosely-typed
/// user entries validated (if at all) at the point of use. Here the ranges
/// are enforced at construction, so a `PrintQuality` that exists is a
/// `PrintQuality` that is printable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not a finite number (NaN or infinity sneaked in).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidGeometry {
            width_mm: 0.0,
            height_mm: 25.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid label geometry: 0mm x 25mm (both dimensions must be > 0)"
        );

        let err = CoreError::UnsupportedResolution { dpi: 180 };
        assert!(err.to_string().contains("180 dpi"));
    }

    #[test]
    fn test_degenerate_frame_message_carries_dots() {
        let err = CoreError::DegenerateFrame {
            width_dots: 12,
            height_dots: 200,
            stroke_dots: 8,
        };
        assert!(err.to_string().contains("12x200"));
        assert!(err.to_string().contains("8-dot"));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "darkness".to_string(),
            min: 0,
            max: 30,
        };
        assert_eq!(err.to_string(), "darkness must be between 0 and 30");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "width_mm".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
