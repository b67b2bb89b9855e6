//! # Unit Converter
//!
//! Maps physical measurements (millimeters) and printer resolution (dots per
//! inch) to integer dot counts.
//!
//! ## Why Integer Dots?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FRACTIONAL DOT PROBLEM                                             │
//! │                                                                         │
//! │  50mm at 203 dpi = 50 * 203 / 25.4 = 399.606... dots                   │
//! │                                                                         │
//! │  The print head has no dot 399.6. If two call sites round differently  │
//! │  (one floor, one nearest), the page width and the frame geometry       │
//! │  disagree by a dot and the calibration frame drifts off the label.    │
//! │                                                                         │
//! │  OUR SOLUTION: one conversion function, one rounding policy            │
//! │    round-half-away-from-zero, applied identically to widths, heights   │
//! │    and offsets - repeated conversions of the same input are            │
//! │    bit-identical                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the leaf component of the engine: no dependencies, no state.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{LabelGeometry, PrintQuality, ResolvedLabel};
use crate::validation;
use crate::MM_PER_INCH;

// =============================================================================
// Conversion
// =============================================================================

/// Converts millimeters to printer dots at the given resolution.
///
/// ## Rounding Policy
/// Round-half-away-from-zero to the nearest integer dot (`f64::round`
/// implements exactly this). Chosen over floor because it keeps the maximum
/// absolute error at half a dot and is symmetric for negative offsets.
///
/// ## Example
/// ```rust
/// use labelpress_core::units::mm_to_dots;
///
/// assert_eq!(mm_to_dots(50.0, 203), 400);  // 399.606 rounds up
/// assert_eq!(mm_to_dots(25.4, 203), 203);  // exactly one inch
/// assert_eq!(mm_to_dots(-2.0, 203), -16);  // negative offsets mirror
/// ```
#[inline]
pub fn mm_to_dots(mm: f64, dpi: u32) -> i64 {
    // f64 -> i64 `as` casts saturate, so pathological inputs cannot wrap.
    (mm * dpi as f64 / MM_PER_INCH).round() as i64
}

/// Resolves a (geometry, quality) pair into an all-dots [`ResolvedLabel`].
///
/// Pure function: no side effects, deterministic, referentially transparent.
/// Calling it twice with identical inputs yields bit-identical output.
///
/// Re-validates both inputs even though the constructors already did - the
/// engine must not trust upstream validation (values may arrive
/// deserialized, bypassing `new`).
///
/// ## Errors
/// - [`CoreError::InvalidGeometry`](crate::CoreError::InvalidGeometry) -
///   also raised when a dimension's dot count does not fit a `u32`
/// - [`CoreError::UnsupportedResolution`](crate::CoreError::UnsupportedResolution)
/// - [`CoreError::Validation`](crate::CoreError::Validation) - an offset's
///   dot count does not fit an `i32`
///
/// ## Example
/// ```rust
/// use labelpress_core::types::{LabelGeometry, PrintQuality};
/// use labelpress_core::units::resolve;
///
/// let geometry = LabelGeometry::new(50.0, 25.0, 203).unwrap();
/// let quality = PrintQuality::new(15, 4, 2.0, 0.0).unwrap();
///
/// let resolved = resolve(&geometry, &quality).unwrap();
/// assert_eq!(resolved.width_dots, 400);
/// assert_eq!(resolved.height_dots, 200);
/// assert_eq!(resolved.x_offset_dots, 16);
/// ```
pub fn resolve(geometry: &LabelGeometry, quality: &PrintQuality) -> CoreResult<ResolvedLabel> {
    validation::validate_dimensions_mm(geometry.width_mm, geometry.height_mm)?;
    validation::validate_dpi(geometry.dpi)?;
    validation::validate_offset_mm("x_offset_mm", quality.x_offset_mm)?;
    validation::validate_offset_mm("y_offset_mm", quality.y_offset_mm)?;

    let dpi = geometry.dpi;

    // Dimensions are validated > 0, so the rounded dot counts are >= 0. A
    // count past u32::MAX means the millimeter value itself is absurd;
    // refusing it keeps width_dots monotone in width_mm.
    let width_dots = u32::try_from(mm_to_dots(geometry.width_mm, dpi));
    let height_dots = u32::try_from(mm_to_dots(geometry.height_mm, dpi));
    let (width_dots, height_dots) = match (width_dots, height_dots) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(CoreError::InvalidGeometry {
                width_mm: geometry.width_mm,
                height_mm: geometry.height_mm,
            })
        }
    };

    Ok(ResolvedLabel {
        width_dots,
        height_dots,
        x_offset_dots: offset_to_dots("x_offset_dots", quality.x_offset_mm, dpi)?,
        y_offset_dots: offset_to_dots("y_offset_dots", quality.y_offset_mm, dpi)?,
        dpi,
    })
}

/// Converts an offset to dots, refusing magnitudes that do not fit an `i32`.
fn offset_to_dots(field: &str, offset_mm: f64, dpi: u32) -> CoreResult<i32> {
    i32::try_from(mm_to_dots(offset_mm, dpi)).map_err(|_| {
        CoreError::Validation(ValidationError::OutOfRange {
            field: field.to_string(),
            min: i64::from(i32::MIN),
            max: i64::from(i32::MAX),
        })
    })
}

// =============================================================================
// Offset Advisories
// =============================================================================

/// Axis an advisory refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Non-fatal warning: an offset is large enough that the content origin
/// falls outside the printable area.
///
/// ## Why advisory, not error
/// Over-correcting for cold-start fade is a known operator mistake, not a
/// structural one - the stream still compiles and prints (blank). The spool
/// layer logs these with `tracing::warn!` before transmitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetAdvisory {
    pub axis: Axis,
    pub offset_dots: i32,
    pub span_dots: u32,
}

impl std::fmt::Display for OffsetAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} offset of {} dots meets or exceeds the label's {}-dot span; content origin falls outside the printable area",
            self.axis, self.offset_dots, self.span_dots
        )
    }
}

/// Inspects a resolved label for offsets that push the content origin off
/// the label (offset magnitude >= label dimension on that axis).
///
/// Returns an empty vec when everything is sane.
pub fn offset_advisories(resolved: &ResolvedLabel) -> Vec<OffsetAdvisory> {
    let mut advisories = Vec::new();

    if resolved.x_offset_dots.unsigned_abs() >= resolved.width_dots {
        advisories.push(OffsetAdvisory {
            axis: Axis::X,
            offset_dots: resolved.x_offset_dots,
            span_dots: resolved.width_dots,
        });
    }

    if resolved.y_offset_dots.unsigned_abs() >= resolved.height_dots {
        advisories.push(OffsetAdvisory {
            axis: Axis::Y,
            offset_dots: resolved.y_offset_dots,
            span_dots: resolved.height_dots,
        });
    }

    advisories
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn geometry(width_mm: f64, height_mm: f64, dpi: u32) -> LabelGeometry {
        LabelGeometry::new(width_mm, height_mm, dpi).unwrap()
    }

    fn quality(x_offset_mm: f64, y_offset_mm: f64) -> PrintQuality {
        PrintQuality::new(15, 4, x_offset_mm, y_offset_mm).unwrap()
    }

    #[test]
    fn test_pinned_conversion_vectors() {
        // The 2in x 1in stock from the original tool's documentation:
        // 50.8mm -> 406 dots, 25.4mm -> 203 dots at 203 dpi.
        assert_eq!(mm_to_dots(50.8, 203), 406);
        assert_eq!(mm_to_dots(25.4, 203), 203);

        // Metric 50mm x 25mm stock.
        assert_eq!(mm_to_dots(50.0, 203), 400); // 399.606 rounds to 400
        assert_eq!(mm_to_dots(25.0, 203), 200); // 199.803 rounds to 200

        // Higher resolutions.
        assert_eq!(mm_to_dots(25.4, 300), 300);
        assert_eq!(mm_to_dots(25.4, 600), 600);
        assert_eq!(mm_to_dots(1.0, 203), 8); // 7.992 - the frame stroke
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 3.175mm at 203 dpi = 25.375 dots -> 25
        assert_eq!(mm_to_dots(3.175, 203), 25);
        // Exactly half a dot: 25.4 * 2.5 / 203 mm = 2.5 dots -> 3
        let half_dot_mm = 2.5 * MM_PER_INCH / 203.0;
        assert_eq!(mm_to_dots(half_dot_mm, 203), 3);
        // And the mirror image for a negative offset -> -3
        assert_eq!(mm_to_dots(-half_dot_mm, 203), -3);
    }

    #[test]
    fn test_resolve_basic() {
        let resolved = resolve(&geometry(50.0, 25.0, 203), &quality(0.0, 0.0)).unwrap();
        assert_eq!(resolved.width_dots, 400);
        assert_eq!(resolved.height_dots, 200);
        assert_eq!(resolved.x_offset_dots, 0);
        assert_eq!(resolved.y_offset_dots, 0);
        assert_eq!(resolved.dpi, 203);
    }

    #[test]
    fn test_resolve_offsets_including_negative() {
        let resolved = resolve(&geometry(50.0, 25.0, 203), &quality(2.0, -2.0)).unwrap();
        assert_eq!(resolved.x_offset_dots, 16); // 15.98 rounds to 16
        assert_eq!(resolved.y_offset_dots, -16);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let g = geometry(33.3, 17.7, 300);
        let q = quality(1.1, -0.7);
        assert_eq!(resolve(&g, &q).unwrap(), resolve(&g, &q).unwrap());
    }

    #[test]
    fn test_resolve_monotone_in_width() {
        // Increasing width_mm at fixed dpi never decreases width_dots.
        let q = quality(0.0, 0.0);
        let mut previous = 0;
        for tenth_mm in 1..=2000 {
            let width_mm = tenth_mm as f64 / 10.0;
            let dots = resolve(&geometry(width_mm, 25.0, 203), &q)
                .unwrap()
                .width_dots;
            assert!(
                dots >= previous,
                "width_dots regressed at {}mm: {} < {}",
                width_mm,
                dots,
                previous
            );
            previous = dots;
        }
    }

    #[test]
    fn test_resolve_refuses_dot_overflow() {
        // A dimension whose dot count exceeds u32::MAX must refuse rather
        // than wrap into a small, plausible-looking label.
        let q = quality(0.0, 0.0);
        let err = resolve(&geometry(600_000_000.0, 25.0, 203), &q).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry { .. }));

        let err = resolve(&geometry(50.0, 600_000_000.0, 203), &q).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry { .. }));

        // Offsets hit the i32 limit much earlier.
        let err = resolve(&geometry(50.0, 25.0, 203), &quality(500_000_000.0, 0.0)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        let err = resolve(&geometry(50.0, 25.0, 203), &quality(0.0, -500_000_000.0)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_resolve_monotone_at_the_u32_limit() {
        // The largest representable widths still resolve; going past the
        // limit refuses instead of producing fewer dots.
        let q = quality(0.0, 0.0);
        let big = resolve(&geometry(500_000_000.0, 25.0, 203), &q).unwrap();
        assert_eq!(big.width_dots, 3_996_062_992);
        assert!(resolve(&geometry(600_000_000.0, 25.0, 203), &q).is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_inputs() {
        // Bypass the constructor to simulate a deserialized, unvalidated value.
        let zero_width = LabelGeometry {
            width_mm: 0.0,
            height_mm: 25.0,
            dpi: 203,
        };
        let err = resolve(&zero_width, &quality(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry { .. }));

        let odd_dpi = LabelGeometry {
            width_mm: 50.0,
            height_mm: 25.0,
            dpi: 360,
        };
        let err = resolve(&odd_dpi, &quality(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedResolution { dpi: 360 }));
    }

    #[test]
    fn test_offset_advisories() {
        let sane = resolve(&geometry(50.0, 25.0, 203), &quality(2.0, 2.0)).unwrap();
        assert!(offset_advisories(&sane).is_empty());

        // 60mm x-offset on a 50mm label: origin is off the right edge.
        let off_label = resolve(&geometry(50.0, 25.0, 203), &quality(60.0, 0.0)).unwrap();
        let advisories = offset_advisories(&off_label);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].axis, Axis::X);
        assert_eq!(advisories[0].span_dots, 400);

        // Large negative offsets trip the same check.
        let negative = resolve(&geometry(50.0, 25.0, 203), &quality(0.0, -30.0)).unwrap();
        let advisories = offset_advisories(&negative);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].axis, Axis::Y);
    }

    #[test]
    fn test_advisory_display_names_the_axis() {
        let advisory = OffsetAdvisory {
            axis: Axis::X,
            offset_dots: 480,
            span_dots: 400,
        };
        let text = advisory.to_string();
        assert!(text.contains("x offset of 480"));
        assert!(text.contains("400-dot"));
    }
}
