//! BSP thread dimension table.
//!
//! Major diameter and pitch are the commonly used ISO 228/7 values, in mm.
//! v1 supports a small but practical subset of nominal sizes. The table is
//! static and read-only; standard selection (BSPP vs BSPT) does not vary
//! these values, it only affects downstream geometry generation.

use crate::NominalSize;

/// Physical dimensions of one nominal thread size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadEntry {
    pub major_diameter_mm: f64,
    pub pitch_mm: f64,
    pub threads_per_inch: u32,
}

/// Fixed lookup table, indexed in the same order as [`NominalSize::ALL`].
pub const BSP_TABLE: [ThreadEntry; 5] = [
    ThreadEntry { major_diameter_mm: 13.157, pitch_mm: 1.337, threads_per_inch: 19 }, // 1/4
    ThreadEntry { major_diameter_mm: 16.662, pitch_mm: 1.337, threads_per_inch: 19 }, // 3/8
    ThreadEntry { major_diameter_mm: 20.955, pitch_mm: 1.814, threads_per_inch: 14 }, // 1/2
    ThreadEntry { major_diameter_mm: 26.441, pitch_mm: 1.814, threads_per_inch: 14 }, // 3/4
    ThreadEntry { major_diameter_mm: 33.249, pitch_mm: 2.309, threads_per_inch: 11 }, // 1
];

impl NominalSize {
    /// Dimensions for this size. Total on the enum; label parsing is where
    /// an out-of-table size is rejected.
    pub fn thread_entry(&self) -> &'static ThreadEntry {
        match self {
            Self::Quarter => &BSP_TABLE[0],
            Self::ThreeEighths => &BSP_TABLE[1],
            Self::Half => &BSP_TABLE[2],
            Self::ThreeQuarters => &BSP_TABLE[3],
            Self::One => &BSP_TABLE[4],
        }
    }
}

/// A size label outside the fixed table.
///
/// Downstream of sanitization this indicates a programming error: canonical
/// configs only carry table-backed sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl std::fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported nominal size '{}'", self.0)
    }
}

impl std::error::Error for UnknownSize {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values_strictly_positive() {
        for entry in &BSP_TABLE {
            assert!(entry.major_diameter_mm > 0.0);
            assert!(entry.pitch_mm > 0.0);
            assert!(entry.threads_per_inch > 0);
        }
    }

    #[test]
    fn table_matches_size_order() {
        for (i, size) in NominalSize::ALL.iter().enumerate() {
            assert_eq!(size.thread_entry(), &BSP_TABLE[i]);
        }
    }

    #[test]
    fn half_inch_reference_values() {
        let entry = NominalSize::Half.thread_entry();
        assert_eq!(entry.major_diameter_mm, 20.955);
        assert_eq!(entry.pitch_mm, 1.814);
        assert_eq!(entry.threads_per_inch, 14);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = NominalSize::parse("5/8").unwrap_err();
        assert_eq!(err, UnknownSize("5/8".to_string()));
        assert!(err.to_string().contains("5/8"));
    }
}
