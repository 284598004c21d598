use serde::{Deserialize, Serialize};

mod params;
mod standards;

pub use params::{sanitize, RawAdapterParams, RawBodySpec, RawEndSpec, RawResolution};
pub use standards::{ThreadEntry, UnknownSize, BSP_TABLE};

/// Thread standard for one adapter end.
///
/// BSPP threads are parallel, BSPT threads carry a 1:16 diameter taper.
/// Both share the same dimension table; the distinction only matters to the
/// geometry kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadStandard {
    #[serde(rename = "BSPP")]
    Bspp,
    #[serde(rename = "BSPT")]
    Bspt,
}

impl ThreadStandard {
    /// Parse a control-panel label. Unrecognized labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "BSPP" => Some(Self::Bspp),
            "BSPT" => Some(Self::Bspt),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bspp => "BSPP",
            Self::Bspt => "BSPT",
        }
    }
}

/// Nominal pipe size, one variant per entry in [`BSP_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NominalSize {
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "3/8")]
    ThreeEighths,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    ThreeQuarters,
    #[serde(rename = "1")]
    One,
}

impl NominalSize {
    pub const ALL: [NominalSize; 5] = [
        Self::Quarter,
        Self::ThreeEighths,
        Self::Half,
        Self::ThreeQuarters,
        Self::One,
    ];

    /// Parse a control-panel label against the fixed table.
    pub fn parse(label: &str) -> Result<Self, UnknownSize> {
        match label {
            "1/4" => Ok(Self::Quarter),
            "3/8" => Ok(Self::ThreeEighths),
            "1/2" => Ok(Self::Half),
            "3/4" => Ok(Self::ThreeQuarters),
            "1" => Ok(Self::One),
            other => Err(UnknownSize(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quarter => "1/4",
            Self::ThreeEighths => "3/8",
            Self::Half => "1/2",
            Self::ThreeQuarters => "3/4",
            Self::One => "1",
        }
    }
}

/// Thread gender of one adapter end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Body shape between the two ends. v1 only supports a straight barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyShape {
    Straight,
}

/// One threaded end of the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSpec {
    pub standard: ThreadStandard,
    pub size: NominalSize,
    pub gender: Gender,
}

/// Adapter body between the two ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    #[serde(rename = "type")]
    pub shape: BodyShape,
    pub length_mm: f64,
}

/// Tessellation resolution handed to the geometry kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub radial_segments: u32,
    pub turns_per_thread: u32,
}

/// Canonical, fully sanitized adapter configuration.
///
/// Produced by [`sanitize`]: every numeric field sits inside its documented
/// closed interval and the categorical fields are table-backed.
/// The serialized form is the kernel request record — field names here are
/// the wire contract with the geometry kernel and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(rename = "endA")]
    pub end_a: EndSpec,
    #[serde(rename = "endB")]
    pub end_b: EndSpec,
    pub body: BodySpec,
    pub wall_thickness_mm: f64,
    pub tolerance_mm: f64,
    pub resolution: Resolution,
}

impl AdapterConfig {
    /// Serialize as the kernel request record (see `kernel_request_json`
    /// consumers for the agreed field names).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Convert back to the raw, UI-editable representation.
    ///
    /// Sanitizing the result returns an identical config, which is how the
    /// control panel re-seeds its working copy after a regeneration.
    pub fn to_raw(&self) -> RawAdapterParams {
        RawAdapterParams {
            end_a: raw_end(&self.end_a),
            end_b: raw_end(&self.end_b),
            body: RawBodySpec {
                shape: "straight".to_string(),
                length_mm: self.body.length_mm,
            },
            wall_thickness_mm: self.wall_thickness_mm,
            tolerance_mm: self.tolerance_mm,
            resolution: RawResolution {
                radial_segments: f64::from(self.resolution.radial_segments),
                turns_per_thread: f64::from(self.resolution.turns_per_thread),
            },
        }
    }
}

fn raw_end(end: &EndSpec) -> RawEndSpec {
    RawEndSpec {
        standard: end.standard.label().to_string(),
        size: end.size.label().to_string(),
        gender: end.gender.label().to_string(),
    }
}
