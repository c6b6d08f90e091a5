//! Interpretation bands for the two color distance scales.
//!
//! Raw delta E and angular distance numbers mean little to production
//! planners; these enums map them onto the fixed scales color labs quote,
//! with a short description for each band.

use serde::Serialize;

/// Interpretation of a CIE76 delta E value.
///
/// Thresholds are exclusive-upper: a delta E of exactly 2.0 is already
/// `Noticeable`, not `VerySlight`. Serializes as its label string
/// (e.g. `"Very Slight"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeltaEBand {
    /// delta E < 1
    Imperceptible,
    /// 1 <= delta E < 2
    #[serde(rename = "Very Slight")]
    VerySlight,
    /// 2 <= delta E < 3.5
    Noticeable,
    /// 3.5 <= delta E < 5
    Significant,
    /// 5 <= delta E < 10
    Large,
    /// delta E >= 10
    #[serde(rename = "Very Large")]
    VeryLarge,
}

impl DeltaEBand {
    /// Classify a delta E value into its band.
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            DeltaEBand::Imperceptible
        } else if delta_e < 2.0 {
            DeltaEBand::VerySlight
        } else if delta_e < 3.5 {
            DeltaEBand::Noticeable
        } else if delta_e < 5.0 {
            DeltaEBand::Significant
        } else if delta_e < 10.0 {
            DeltaEBand::Large
        } else {
            DeltaEBand::VeryLarge
        }
    }

    /// The band's display label.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            DeltaEBand::Imperceptible => "Imperceptible",
            DeltaEBand::VerySlight => "Very Slight",
            DeltaEBand::Noticeable => "Noticeable",
            DeltaEBand::Significant => "Significant",
            DeltaEBand::Large => "Large",
            DeltaEBand::VeryLarge => "Very Large",
        }
    }

    /// One-line description of what the band means to an observer.
    #[inline]
    pub fn description(self) -> &'static str {
        match self {
            DeltaEBand::Imperceptible => "Not perceptible by human eye",
            DeltaEBand::VerySlight => "Perceptible through close observation",
            DeltaEBand::Noticeable => "Perceptible at a glance",
            DeltaEBand::Significant => "Clearly noticeable difference",
            DeltaEBand::Large => "Colors are clearly different",
            DeltaEBand::VeryLarge => "Colors are very different",
        }
    }
}

/// Interpretation of an angular distance between two color vectors.
///
/// Same exclusive-upper convention as [`DeltaEBand`]. Serializes as its
/// label string (e.g. `"Very Good"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngularBand {
    /// angle < 5 degrees
    Excellent,
    /// 5 <= angle < 10
    #[serde(rename = "Very Good")]
    VeryGood,
    /// 10 <= angle < 20
    Good,
    /// 20 <= angle < 45
    Moderate,
    /// angle >= 45
    Poor,
}

impl AngularBand {
    /// Classify an angular distance (in degrees) into its band.
    pub fn classify(angle_deg: f64) -> Self {
        if angle_deg < 5.0 {
            AngularBand::Excellent
        } else if angle_deg < 10.0 {
            AngularBand::VeryGood
        } else if angle_deg < 20.0 {
            AngularBand::Good
        } else if angle_deg < 45.0 {
            AngularBand::Moderate
        } else {
            AngularBand::Poor
        }
    }

    /// The band's display label.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            AngularBand::Excellent => "Excellent",
            AngularBand::VeryGood => "Very Good",
            AngularBand::Good => "Good",
            AngularBand::Moderate => "Moderate",
            AngularBand::Poor => "Poor",
        }
    }

    /// One-line description of what the band means for hue agreement.
    #[inline]
    pub fn description(self) -> &'static str {
        match self {
            AngularBand::Excellent => "Almost identical color direction",
            AngularBand::VeryGood => "Very similar hue direction",
            AngularBand::Good => "Similar color family",
            AngularBand::Moderate => "Related but noticeably different hue",
            AngularBand::Poor => "Different color direction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delta_e_band_thresholds() {
        assert_eq!(DeltaEBand::classify(0.0), DeltaEBand::Imperceptible);
        assert_eq!(DeltaEBand::classify(0.99), DeltaEBand::Imperceptible);
        assert_eq!(DeltaEBand::classify(1.0), DeltaEBand::VerySlight);
        assert_eq!(DeltaEBand::classify(1.99), DeltaEBand::VerySlight);
        assert_eq!(DeltaEBand::classify(2.0), DeltaEBand::Noticeable);
        assert_eq!(DeltaEBand::classify(3.49), DeltaEBand::Noticeable);
        assert_eq!(DeltaEBand::classify(3.5), DeltaEBand::Significant);
        assert_eq!(DeltaEBand::classify(4.99), DeltaEBand::Significant);
        assert_eq!(DeltaEBand::classify(5.0), DeltaEBand::Large);
        assert_eq!(DeltaEBand::classify(9.99), DeltaEBand::Large);
        assert_eq!(DeltaEBand::classify(10.0), DeltaEBand::VeryLarge);
        assert_eq!(DeltaEBand::classify(250.0), DeltaEBand::VeryLarge);
    }

    #[test]
    fn test_angular_band_thresholds() {
        assert_eq!(AngularBand::classify(0.0), AngularBand::Excellent);
        assert_eq!(AngularBand::classify(4.99), AngularBand::Excellent);
        assert_eq!(AngularBand::classify(5.0), AngularBand::VeryGood);
        assert_eq!(AngularBand::classify(9.99), AngularBand::VeryGood);
        assert_eq!(AngularBand::classify(10.0), AngularBand::Good);
        assert_eq!(AngularBand::classify(19.99), AngularBand::Good);
        assert_eq!(AngularBand::classify(20.0), AngularBand::Moderate);
        assert_eq!(AngularBand::classify(44.99), AngularBand::Moderate);
        assert_eq!(AngularBand::classify(45.0), AngularBand::Poor);
        assert_eq!(AngularBand::classify(180.0), AngularBand::Poor);
    }

    #[test]
    fn test_labels_match_serialized_form() {
        let delta_bands = [
            DeltaEBand::Imperceptible,
            DeltaEBand::VerySlight,
            DeltaEBand::Noticeable,
            DeltaEBand::Significant,
            DeltaEBand::Large,
            DeltaEBand::VeryLarge,
        ];
        for band in delta_bands {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.label()));
        }

        let angular_bands = [
            AngularBand::Excellent,
            AngularBand::VeryGood,
            AngularBand::Good,
            AngularBand::Moderate,
            AngularBand::Poor,
        ];
        for band in angular_bands {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.label()));
        }
    }
}
