//! # ZPL Compiler
//!
//! Compiles a [`LabelJob`] into a complete, ordered ZPL II command stream.
//!
//! ## Compilation State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              One compilation, always linear, no branching back          │
//! │                                                                         │
//! │  START ──► LABEL_SETUP ──► QUALITY_DIRECTIVES ──► CONTENT ──► END      │
//! │   ^XA       ^PW width       ~SD darkness          ^FD / ^GB    ^XZ     │
//! │             ^LL height      ^PR speed                                   │
//! │             ^LH x,y                                                     │
//! │                                                                         │
//! │  Darkness is emitted strictly before speed: some firmware revisions    │
//! │  apply speed-dependent heat compensation relative to the last-set      │
//! │  darkness value, so the compiler must not reorder them.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail Closed
//! Every refusal is detected before the first byte is appended. A caller
//! either receives the complete stream or nothing - a partially-built command
//! sequence must never be transmitted to hardware.

use crate::error::{CoreError, CoreResult};
use crate::types::{ContentMode, LabelJob};
use crate::units::mm_to_dots;
use crate::validation;
use crate::FRAME_STROKE_MM;

// =============================================================================
// Compilation
// =============================================================================

/// Compiles a label job into a single complete ZPL II label format.
///
/// The returned stream begins with `^XA`, ends with `^XZ`, and contains only
/// ASCII-safe directives in between. The transport must deliver it unmodified
/// to a raw (non-filtering) print queue.
///
/// ## Errors
/// - [`CoreError::EmptyContent`] - standard mode with no payload
/// - [`CoreError::DegenerateFrame`] - test frame on a label smaller than
///   twice the frame stroke on either axis
/// - [`CoreError::Validation`] - darkness or speed outside the firmware
///   ranges (values may arrive deserialized, bypassing `PrintQuality::new`)
///
/// ## Example
/// ```rust
/// use labelpress_core::types::{LabelJob, PrintQuality, ResolvedLabel};
/// use labelpress_core::zpl::compile;
///
/// let resolved = ResolvedLabel {
///     width_dots: 400,
///     height_dots: 200,
///     x_offset_dots: 0,
///     y_offset_dots: 0,
///     dpi: 203,
/// };
/// let quality = PrintQuality::new(15, 4, 0.0, 0.0).unwrap();
///
/// let stream = compile(&LabelJob::test_frame(resolved, quality)).unwrap();
/// let text = String::from_utf8(stream).unwrap();
/// assert!(text.contains("^GB400,200,8,B,0"));
/// ```
pub fn compile(job: &LabelJob) -> CoreResult<Vec<u8>> {
    // -------------------------------------------------------------------------
    // Validate everything up front - zero bytes are emitted on refusal
    // -------------------------------------------------------------------------
    validation::validate_darkness(job.quality.darkness)?;
    validation::validate_speed_ips(job.quality.speed_ips)?;

    let content = match job.mode {
        ContentMode::Standard => {
            let payload = job.payload.as_deref().unwrap_or("");
            if payload.is_empty() {
                return Err(CoreError::EmptyContent);
            }
            standard_content(payload)
        }
        ContentMode::TestFrame => {
            let stroke_dots = frame_stroke_dots(job.resolved.dpi);
            if job.resolved.width_dots < 2 * stroke_dots
                || job.resolved.height_dots < 2 * stroke_dots
            {
                return Err(CoreError::DegenerateFrame {
                    width_dots: job.resolved.width_dots,
                    height_dots: job.resolved.height_dots,
                    stroke_dots,
                });
            }
            frame_content(job.resolved.width_dots, job.resolved.height_dots, stroke_dots)
        }
    };

    // -------------------------------------------------------------------------
    // Emit: START -> LABEL_SETUP -> QUALITY_DIRECTIVES -> CONTENT -> END
    // -------------------------------------------------------------------------
    let r = &job.resolved;
    let q = &job.quality;

    let stream = format!(
        "^XA\n\
         ^PW{width}\n\
         ^LL{height}\n\
         ^LH{x},{y}\n\
         ~SD{darkness}\n\
         ^PR{speed}\n\
         {content}\n\
         ^XZ",
        width = r.width_dots,
        height = r.height_dots,
        x = r.x_offset_dots,
        y = r.y_offset_dots,
        darkness = q.darkness,
        speed = q.speed_ips,
        content = content,
    );

    Ok(stream.into_bytes())
}

/// Frame stroke width in dots at the given resolution (1mm-equivalent).
///
/// The stroke is derived from dpi alone so the frame reads identically on
/// 203 and 600 dpi heads.
#[inline]
pub fn frame_stroke_dots(dpi: u32) -> u32 {
    mm_to_dots(FRAME_STROKE_MM, dpi).max(0) as u32
}

// =============================================================================
// Content Variants
// =============================================================================

/// Standard content: the caller's payload, positioned at the (post-offset)
/// origin, with ZPL control prefixes escaped.
///
/// `^FH_` switches the field to hex-escape mode with `_` as the indicator,
/// which is what makes the escaping in [`escape_payload`] reversible on the
/// printer side. The compiler does not interpret payload semantics.
fn standard_content(payload: &str) -> String {
    format!("^FO0,0^FH_^FD{}^FS", escape_payload(payload))
}

/// Test frame: a closed rectangular outline whose four outer corners are the
/// label's four post-offset corners.
///
/// `^GB` draws its border inward from the given outline, so passing the full
/// label span places the stroke's outer edge exactly on the physical label
/// edge - the half-stroke inset of the path centerline falls out of the
/// directive's own geometry.
fn frame_content(width_dots: u32, height_dots: u32, stroke_dots: u32) -> String {
    format!("^FO0,0^GB{},{},{},B,0^FS", width_dots, height_dots, stroke_dots)
}

/// Escapes the ZPL command introducers (`^`, `~`) and the hex indicator
/// itself (`_`) for use inside an `^FH_` field.
///
/// Everything else passes through verbatim - the payload is opaque.
fn escape_payload(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '_' => escaped.push_str("_5F"),
            '^' => escaped.push_str("_5E"),
            '~' => escaped.push_str("_7E"),
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
