//! Adapter parameter model and sanitizer.
//!
//! The control panel edits a [`RawAdapterParams`] working copy in place and
//! hands a snapshot to [`sanitize`] on every change. Sanitization is total:
//! invalid input is corrected to defaults or clamped, never rejected, so the
//! always-live form can never wedge the pipeline.

use serde::{Deserialize, Serialize};

use crate::{
    AdapterConfig, BodyShape, BodySpec, EndSpec, Gender, NominalSize, Resolution,
    ThreadStandard,
};

/// One end of the adapter as the UI edits it: free-form labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEndSpec {
    pub standard: String,
    pub size: String,
    pub gender: String,
}

impl Default for RawEndSpec {
    fn default() -> Self {
        Self {
            standard: "BSPP".to_string(),
            size: "1/2".to_string(),
            gender: "male".to_string(),
        }
    }
}

/// Body section as the UI edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBodySpec {
    #[serde(rename = "type")]
    pub shape: String,
    pub length_mm: f64,
}

impl Default for RawBodySpec {
    fn default() -> Self {
        Self {
            shape: "straight".to_string(),
            length_mm: 40.0,
        }
    }
}

/// Tessellation resolution as the UI edits it. f64 so that non-finite
/// slider state stays representable until sanitization rounds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawResolution {
    pub radial_segments: f64,
    pub turns_per_thread: f64,
}

impl Default for RawResolution {
    fn default() -> Self {
        Self {
            radial_segments: 64.0,
            turns_per_thread: 5.0,
        }
    }
}

/// The full working configuration edited by the control panel.
///
/// `Default` reproduces the stock adapter: BSPP 1/2" female to BSPT 3/4"
/// male, 40 mm straight body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAdapterParams {
    #[serde(rename = "endA")]
    pub end_a: RawEndSpec,
    #[serde(rename = "endB")]
    pub end_b: RawEndSpec,
    pub body: RawBodySpec,
    pub wall_thickness_mm: f64,
    pub tolerance_mm: f64,
    pub resolution: RawResolution,
}

impl Default for RawAdapterParams {
    fn default() -> Self {
        Self {
            end_a: RawEndSpec {
                standard: "BSPP".to_string(),
                size: "1/2".to_string(),
                gender: "female".to_string(),
            },
            end_b: RawEndSpec {
                standard: "BSPT".to_string(),
                size: "3/4".to_string(),
                gender: "male".to_string(),
            },
            body: RawBodySpec::default(),
            wall_thickness_mm: 3.0,
            tolerance_mm: 0.15,
            resolution: RawResolution::default(),
        }
    }
}

/// Produce the canonical configuration for a raw working copy.
///
/// Total and pure: unrecognized labels fall back to their documented
/// defaults, non-finite numbers are replaced before clamping, and every
/// numeric field ends up inside its closed interval. The wall-thickness
/// upper bound is recomputed on every pass because it depends on the
/// (possibly just-corrected) end sizes: a wall thicker than
/// `min_major/2 - 1.8` would leave the solid thinner than the thread root
/// at the narrower end.
pub fn sanitize(raw: &RawAdapterParams) -> AdapterConfig {
    let end_a = sanitize_end(&raw.end_a);
    let end_b = sanitize_end(&raw.end_b);

    let body = BodySpec {
        shape: BodyShape::Straight,
        length_mm: clamp_or(raw.body.length_mm, 40.0, 20.0, 120.0),
    };
    let tolerance_mm = clamp_or(raw.tolerance_mm, 0.15, 0.0, 0.4);
    let resolution = Resolution {
        radial_segments: clamp_or(raw.resolution.radial_segments, 64.0, 24.0, 160.0).round()
            as u32,
        turns_per_thread: clamp_or(raw.resolution.turns_per_thread, 5.0, 3.0, 10.0).round()
            as u32,
    };

    let min_major = end_a
        .size
        .thread_entry()
        .major_diameter_mm
        .min(end_b.size.thread_entry().major_diameter_mm);
    let max_minor = min_major - 2.4;
    let max_wall = (max_minor / 2.0 - 0.6).max(1.2);
    let wall_thickness_mm = clamp_or(raw.wall_thickness_mm, 3.0, 1.2, max_wall);

    AdapterConfig {
        end_a,
        end_b,
        body,
        wall_thickness_mm,
        tolerance_mm,
        resolution,
    }
}

fn sanitize_end(raw: &RawEndSpec) -> EndSpec {
    EndSpec {
        standard: ThreadStandard::parse(&raw.standard).unwrap_or(ThreadStandard::Bspp),
        size: NominalSize::parse(&raw.size).unwrap_or(NominalSize::Half),
        gender: Gender::parse(&raw.gender).unwrap_or(Gender::Male),
    }
}

fn clamp_or(value: f64, fallback: f64, lo: f64, hi: f64) -> f64 {
    let value = if value.is_finite() { value } else { fallback };
    value.clamp(lo, hi)
}
