//! # Validation Module
//!
//! Range and membership checks for the engine's value types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Configuration collaborator (settings/prompt layer)           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - value construction                             │
//! │  ├── Darkness / speed ranges                                           │
//! │  └── Finite-number checks                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine operations (units::resolve, zpl::compile)             │
//! │  └── Re-validate; never trust upstream                                 │
//! │                                                                         │
//! │  Defense in depth: the engine refuses what the prompt let through      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};
use crate::{MAX_DARKNESS, SUPPORTED_DPIS, SUPPORTED_SPEEDS_IPS};

// =============================================================================
// Geometry Validators
// =============================================================================

/// Validates label dimensions in millimeters.
///
/// ## Rules
/// - Both dimensions must be finite and strictly positive
///
/// ## Example
/// ```rust
/// use labelpress_core::validation::validate_dimensions_mm;
///
/// assert!(validate_dimensions_mm(50.0, 25.0).is_ok());
/// assert!(validate_dimensions_mm(0.0, 25.0).is_err());
/// assert!(validate_dimensions_mm(50.0, -1.0).is_err());
/// ```
pub fn validate_dimensions_mm(width_mm: f64, height_mm: f64) -> CoreResult<()> {
    if !width_mm.is_finite() || !height_mm.is_finite() || width_mm <= 0.0 || height_mm <= 0.0 {
        return Err(CoreError::InvalidGeometry {
            width_mm,
            height_mm,
        });
    }

    Ok(())
}

/// Validates a print-head resolution against the calibrated set.
pub fn validate_dpi(dpi: u32) -> CoreResult<()> {
    if !SUPPORTED_DPIS.contains(&dpi) {
        return Err(CoreError::UnsupportedResolution { dpi });
    }

    Ok(())
}

// =============================================================================
// Quality Validators
// =============================================================================

/// Validates a `~SD` darkness value.
///
/// ## Rules
/// - Must be between 0 and 30 (the firmware range)
pub fn validate_darkness(darkness: u8) -> ValidationResult<()> {
    if darkness > MAX_DARKNESS {
        return Err(ValidationError::OutOfRange {
            field: "darkness".to_string(),
            min: 0,
            max: MAX_DARKNESS as i64,
        });
    }

    Ok(())
}

/// Validates a `^PR` print speed in inches/second.
///
/// ## Rules
/// - Must be a member of the discrete supported set
///
/// ## Example
/// ```rust
/// use labelpress_core::validation::validate_speed_ips;
///
/// assert!(validate_speed_ips(4).is_ok());
/// assert!(validate_speed_ips(7).is_err());
/// ```
pub fn validate_speed_ips(speed_ips: u8) -> ValidationResult<()> {
    if !SUPPORTED_SPEEDS_IPS.contains(&speed_ips) {
        return Err(ValidationError::NotAllowed {
            field: "speed_ips".to_string(),
            allowed: SUPPORTED_SPEEDS_IPS.iter().map(u8::to_string).collect(),
        });
    }

    Ok(())
}

/// Validates a positional offset in millimeters.
///
/// ## Rules
/// - May be negative (shifting content toward the origin is legitimate)
/// - Must be a finite number; NaN offsets would poison every downstream
///   rounding operation
///
/// Sanity checking against the label size happens after conversion, as a
/// non-fatal advisory - see [`crate::units::offset_advisories`].
pub fn validate_offset_mm(field: &str, offset_mm: f64) -> ValidationResult<()> {
    if !offset_mm.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions_mm() {
        assert!(validate_dimensions_mm(50.0, 25.0).is_ok());
        assert!(validate_dimensions_mm(0.1, 0.1).is_ok());

        assert!(validate_dimensions_mm(0.0, 25.0).is_err());
        assert!(validate_dimensions_mm(50.0, 0.0).is_err());
        assert!(validate_dimensions_mm(-50.0, 25.0).is_err());
        assert!(validate_dimensions_mm(f64::NAN, 25.0).is_err());
        assert!(validate_dimensions_mm(f64::INFINITY, 25.0).is_err());
    }

    #[test]
    fn test_validate_dpi() {
        assert!(validate_dpi(203).is_ok());
        assert!(validate_dpi(300).is_ok());
        assert!(validate_dpi(600).is_ok());

        assert!(validate_dpi(0).is_err());
        assert!(validate_dpi(180).is_err());
        assert!(validate_dpi(1200).is_err());
    }

    #[test]
    fn test_validate_darkness() {
        assert!(validate_darkness(0).is_ok());
        assert!(validate_darkness(15).is_ok());
        assert!(validate_darkness(30).is_ok());

        assert!(validate_darkness(31).is_err());
    }

    #[test]
    fn test_validate_speed_ips() {
        for speed in [2u8, 3, 4, 5, 6, 8, 10, 12] {
            assert!(validate_speed_ips(speed).is_ok());
        }

        assert!(validate_speed_ips(0).is_err());
        assert!(validate_speed_ips(1).is_err());
        assert!(validate_speed_ips(7).is_err());
        assert!(validate_speed_ips(13).is_err());
    }

    #[test]
    fn test_validate_offset_mm() {
        assert!(validate_offset_mm("x_offset_mm", 2.0).is_ok());
        assert!(validate_offset_mm("x_offset_mm", -2.0).is_ok());
        assert!(validate_offset_mm("x_offset_mm", 0.0).is_ok());

        assert!(validate_offset_mm("x_offset_mm", f64::NAN).is_err());
        assert!(validate_offset_mm("y_offset_mm", f64::NEG_INFINITY).is_err());
    }
}
