//! # labelpress-core: Pure Label-to-ZPL Compilation Engine
//!
//! This crate is the **heart** of LabelPress. It turns a label geometry and a
//! print-quality intent into an exact ZPL II command stream, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      LabelPress Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Configuration Collaborator                      │   │
//! │  │      station.toml ──► LabelGeometry + PrintQuality              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ labelpress-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   units   │  │    zpl    │  │ validation│  │   │
//! │  │   │ Geometry  │  │  mm→dots  │  │ compiler  │  │   rules   │  │   │
//! │  │   │ LabelJob  │  │ rounding  │  │ sequencing│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SPAWNED PROCESSES • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ opaque ZPL bytes                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              labelpress-spool (Transport Layer)                 │   │
//! │  │           CUPS raw queue, USB discovery, settings               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain value types (LabelGeometry, PrintQuality, LabelJob)
//! - [`units`] - Unit Converter: millimeters to integer printer dots
//! - [`zpl`] - ZPL Compiler: ordered command stream emission
//! - [`error`] - Engine error types
//! - [`validation`] - Range and membership checks for value construction
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Process spawning, file system, network access is FORBIDDEN here
//! 3. **Integer Dots**: All geometry handed to the printer is whole dots;
//!    fractional dots do not exist on the hardware
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Fail Closed**: A refused compilation emits zero bytes - a partial
//!    command stream must never reach the print head
//!
//! ## Example Usage
//!
//! ```rust
//! use labelpress_core::types::{LabelGeometry, LabelJob, PrintQuality};
//! use labelpress_core::{units, zpl};
//!
//! // 50mm x 25mm label on a 203 dpi head
//! let geometry = LabelGeometry::new(50.0, 25.0, 203).unwrap();
//! let quality = PrintQuality::new(15, 4, 0.0, 0.0).unwrap();
//!
//! // Resolve physical measurements to whole dots
//! let resolved = units::resolve(&geometry, &quality).unwrap();
//! assert_eq!(resolved.width_dots, 400);
//! assert_eq!(resolved.height_dots, 200);
//!
//! // Compile a calibration frame
//! let job = LabelJob::test_frame(resolved, quality);
//! let stream = zpl::compile(&job).unwrap();
//! assert!(stream.starts_with(b"^XA"));
//! assert!(stream.ends_with(b"^XZ"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod units;
pub mod validation;
pub mod zpl;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use labelpress_core::LabelJob` instead of
// `use labelpress_core::types::LabelJob`

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Millimeters per inch - the bridge between metric label stock and the
/// imperial dots-per-inch resolution of Zebra print heads.
///
/// ## Why a constant?
/// The dots-per-mm factor (`dpi / 25.4`) must be exact and identical at every
/// call site, otherwise frame geometry drifts off the physical label edges.
pub const MM_PER_INCH: f64 = 25.4;

/// Print-head resolutions the engine is calibrated for.
///
/// ## Why a fixed set?
/// Each resolution yields a different dots-per-mm constant. An unknown dpi
/// would produce a stream whose geometry silently disagrees with the physical
/// label, so anything outside this set is refused up front.
pub const SUPPORTED_DPIS: &[u32] = &[203, 300, 600];

/// Print speeds (inches/second) accepted by the `^PR` directive across the
/// supported head family. Individual printers clamp to their own subset.
pub const SUPPORTED_SPEEDS_IPS: &[u8] = &[2, 3, 4, 5, 6, 8, 10, 12];

/// Maximum darkness accepted by the `~SD` directive.
pub const MAX_DARKNESS: u8 = 30;

/// Stroke width of the synthesized calibration frame, in millimeters.
///
/// 1mm reads clearly at every supported resolution while staying thin enough
/// to judge edge alignment by eye.
pub const FRAME_STROKE_MM: f64 = 1.0;
