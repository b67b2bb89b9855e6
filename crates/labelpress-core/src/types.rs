//! # Domain Types
//!
//! Core value types used throughout LabelPress.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Flow                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  LabelGeometry  │   │  PrintQuality   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  width_mm       │   │  darkness 0..30 │                             │
//! │  │  height_mm      │   │  speed_ips      │                             │
//! │  │  dpi            │   │  x/y offset_mm  │                             │
//! │  └────────┬────────┘   └────────┬────────┘                             │
//! │           │                     │                                       │
//! │           └─────────┬───────────┘                                       │
//! │                     ▼ units::resolve                                    │
//! │           ┌─────────────────┐                                           │
//! │           │  ResolvedLabel  │  all-dots, immutable, never patched       │
//! │           └────────┬────────┘                                           │
//! │                    ▼ + ContentMode (+ payload)                          │
//! │           ┌─────────────────┐                                           │
//! │           │    LabelJob     │  one compilation, then discarded          │
//! │           └────────┬────────┘                                           │
//! │                    ▼ zpl::compile                                       │
//! │              ZPL byte stream                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! Every type here is a value: constructed validated, then read-only. There
//! is no shared mutable state between jobs, so concurrent callers may run
//! independent compilations with no coordination.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationResult};
use crate::validation;

// =============================================================================
// Label Geometry
// =============================================================================

/// Physical dimensions of the label stock plus the print-head resolution.
///
/// ## Why dpi lives here
/// A "50mm label" means nothing to the printer until it is expressed in dots,
/// and the dot count depends on the head. Geometry and resolution travel
/// together so a conversion can never mix a width from one printer with the
/// resolution of another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    /// Label width in millimeters. Always > 0.
    pub width_mm: f64,

    /// Label height in millimeters. Always > 0.
    pub height_mm: f64,

    /// Print-head resolution in dots per inch (203, 300 or 600).
    pub dpi: u32,
}

impl LabelGeometry {
    /// Creates a validated label geometry.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidGeometry`](crate::CoreError::InvalidGeometry)
    ///   when either dimension is not strictly positive
    /// - [`CoreError::UnsupportedResolution`](crate::CoreError::UnsupportedResolution)
    ///   when `dpi` is outside the calibrated set
    ///
    /// ## Example
    /// ```rust
    /// use labelpress_core::types::LabelGeometry;
    ///
    /// let geometry = LabelGeometry::new(50.0, 25.0, 203).unwrap();
    /// assert_eq!(geometry.dpi, 203);
    ///
    /// assert!(LabelGeometry::new(0.0, 25.0, 203).is_err());
    /// assert!(LabelGeometry::new(50.0, 25.0, 180).is_err());
    /// ```
    pub fn new(width_mm: f64, height_mm: f64, dpi: u32) -> CoreResult<Self> {
        validation::validate_dimensions_mm(width_mm, height_mm)?;
        validation::validate_dpi(dpi)?;

        Ok(LabelGeometry {
            width_mm,
            height_mm,
            dpi,
        })
    }
}

// =============================================================================
// Print Quality
// =============================================================================

/// Darkness, speed and positional offsets for a print run.
///
/// ## User Workflow Context
/// ```text
/// Early prints fade on the left (cold print head)
///      │
///      ▼
/// Operator raises darkness and shifts content 2mm right
///      │
///      ▼
/// PrintQuality { darkness: 20, speed_ips: 2, x_offset_mm: 2.0, .. }
/// ```
///
/// Offsets shift the coordinate origin for subsequent content, not the page
/// dimensions - the label itself never resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintQuality {
    /// Print darkness for the `~SD` directive (0..=30).
    pub darkness: u8,

    /// Print speed in inches/second for the `^PR` directive.
    /// One of {2, 3, 4, 5, 6, 8, 10, 12}.
    pub speed_ips: u8,

    /// Horizontal origin shift in millimeters. May be negative.
    pub x_offset_mm: f64,

    /// Vertical origin shift in millimeters. May be negative.
    pub y_offset_mm: f64,
}

impl PrintQuality {
    /// Creates a validated print-quality value.
    ///
    /// ## Example
    /// ```rust
    /// use labelpress_core::types::PrintQuality;
    ///
    /// let quality = PrintQuality::new(15, 4, 2.0, -1.0).unwrap();
    /// assert_eq!(quality.darkness, 15);
    ///
    /// assert!(PrintQuality::new(31, 4, 0.0, 0.0).is_err()); // darkness range
    /// assert!(PrintQuality::new(15, 7, 0.0, 0.0).is_err()); // speed set
    /// ```
    pub fn new(
        darkness: u8,
        speed_ips: u8,
        x_offset_mm: f64,
        y_offset_mm: f64,
    ) -> ValidationResult<Self> {
        validation::validate_darkness(darkness)?;
        validation::validate_speed_ips(speed_ips)?;
        validation::validate_offset_mm("x_offset_mm", x_offset_mm)?;
        validation::validate_offset_mm("y_offset_mm", y_offset_mm)?;

        Ok(PrintQuality {
            darkness,
            speed_ips,
            x_offset_mm,
            y_offset_mm,
        })
    }
}

// =============================================================================
// Resolved Label
// =============================================================================

/// A label with every measurement resolved to whole printer dots.
///
/// Produced by [`crate::units::resolve`] and consumed only by the compiler.
/// Never mutated after creation - recompute, don't patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabel {
    /// Page width in dots (`^PW` operand).
    pub width_dots: u32,

    /// Page length in dots (`^LL` operand).
    pub height_dots: u32,

    /// Horizontal label-home shift in dots (`^LH` first operand).
    pub x_offset_dots: i32,

    /// Vertical label-home shift in dots (`^LH` second operand).
    pub y_offset_dots: i32,

    /// Resolution the dot values were computed at. Carried so the compiler
    /// can synthesize the 1mm frame stroke without re-consulting geometry.
    pub dpi: u32,
}

// =============================================================================
// Content Mode
// =============================================================================

/// What goes inside the label format after setup and quality directives.
///
/// The two variants are mutually exclusive; a job carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Emit the caller-supplied payload verbatim (control prefixes escaped).
    Standard,

    /// Synthesize a closed rectangular calibration frame whose outer edge
    /// sits exactly on the post-offset label corners.
    TestFrame,
}

// =============================================================================
// Label Job
// =============================================================================

/// The unit of work: one label, compiled once into a ZPL stream, discarded.
///
/// ## Lifecycle
/// ```text
/// construct ──► zpl::compile ──► bytes handed to transport ──► dropped
/// ```
///
/// A job is stateless and carries no identity beyond the single compilation
/// call, which is why the whole engine needs no job queue, no IDs and no
/// coordination between callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelJob {
    /// All-dots label geometry.
    pub resolved: ResolvedLabel,

    /// Darkness/speed intent (dot-independent directives).
    pub quality: PrintQuality,

    /// Which content variant to emit.
    pub mode: ContentMode,

    /// Payload for [`ContentMode::Standard`]; opaque to the engine.
    pub payload: Option<String>,
}

impl LabelJob {
    /// Creates a standard-content job.
    ///
    /// Payload emptiness is checked at compile time, not here: the compiler
    /// re-validates everything and must not trust its callers.
    pub fn standard(
        resolved: ResolvedLabel,
        quality: PrintQuality,
        payload: impl Into<String>,
    ) -> Self {
        LabelJob {
            resolved,
            quality,
            mode: ContentMode::Standard,
            payload: Some(payload.into()),
        }
    }

    /// Creates a test-frame (calibration) job. No payload is carried.
    pub fn test_frame(resolved: ResolvedLabel, quality: PrintQuality) -> Self {
        LabelJob {
            resolved,
            quality,
            mode: ContentMode::TestFrame,
            payload: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
