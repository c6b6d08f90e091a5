//! CIE L*a*b* color points and the distance metrics defined on them.
//!
//! # References
//!
//! CIE 1976 (L*, a*, b*) color space and the CIE76 color difference,
//! <https://en.wikipedia.org/wiki/CIELAB_color_space>

use serde::{Deserialize, Serialize};

/// A point in CIE L*a*b* color space.
///
/// L*a*b* separates lightness from chromaticity, so Euclidean distance
/// between two points (the CIE76 delta E) approximates perceived color
/// difference. This is the space pigment labs measure in, and all matching
/// in this crate happens directly on these coordinates.
///
/// # Components
///
/// - `l`: Lightness (0 = black, 100 = diffuse white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Components are not clamped. Measured pigments routinely sit outside the
/// sRGB gamut; [`to_hex`](Self::to_hex) clamps only at the final 8-bit
/// quantization step so intermediate math stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: typically -128.0 to 128.0
    pub a: f64,
    /// Blue-yellow axis: typically -128.0 to 128.0
    pub b: f64,
}

impl LabColor {
    /// Create a new L*a*b* color.
    ///
    /// # Arguments
    /// * `l` - Lightness (typically 0.0..=100.0)
    /// * `a` - Green-red axis
    /// * `b` - Blue-yellow axis
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::LabColor;
    ///
    /// // A mid-lightness mauve
    /// let color = LabColor::new(50.0, 20.0, -10.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference: Euclidean distance in L*a*b* space.
    ///
    /// Zero for identical points, symmetric, and roughly proportional to
    /// perceived difference (delta E of 1 is about the threshold of human
    /// perception). See [`DeltaEBand`](super::DeltaEBand) for the
    /// interpretation scale.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::LabColor;
    ///
    /// let p = LabColor::new(50.0, 20.0, -10.0);
    /// let q = LabColor::new(53.0, 24.0, -10.0);
    /// // sqrt(3^2 + 4^2 + 0^2) = 5
    /// assert!((p.delta_e(q) - 5.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn delta_e(self, other: LabColor) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Cosine similarity between the two points treated as 3-vectors
    /// from the origin.
    ///
    /// Measures alignment of color *direction* independent of magnitude:
    /// a pale and a saturated version of the same hue score near 1.0 even
    /// when their delta E is large. Returns 0.0 if either vector has zero
    /// norm (the direction of the origin is undefined).
    #[inline]
    pub fn cosine_similarity(self, other: LabColor) -> f64 {
        let dot = self.l * other.l + self.a * other.a + self.b * other.b;
        let norm_self = (self.l * self.l + self.a * self.a + self.b * self.b).sqrt();
        let norm_other = (other.l * other.l + other.a * other.a + other.b * other.b).sqrt();
        if norm_self == 0.0 || norm_other == 0.0 {
            return 0.0;
        }
        dot / (norm_self * norm_other)
    }

    /// Angle between the two color vectors, in degrees.
    ///
    /// `arccos` of the cosine similarity, clamped to [-1, 1] first so
    /// floating point noise near perfect alignment cannot produce NaN.
    /// Range is [0, 180]; 0 means identical direction. See
    /// [`AngularBand`](super::AngularBand) for the interpretation scale.
    #[inline]
    pub fn angular_distance_deg(self, other: LabColor) -> f64 {
        let sim = self.cosine_similarity(other).clamp(-1.0, 1.0);
        sim.acos().to_degrees()
    }

    /// Render the color as a lowercase `#rrggbb` sRGB hex string.
    ///
    /// Conversion chain: Lab -> XYZ (D65 reference white) -> linear sRGB
    /// -> gamma encoding -> 8-bit quantization. Each channel is clamped to
    /// [0, 1] before scaling to 255 and truncated (not rounded), matching
    /// the convention of the production color pipeline this crate feeds.
    /// Out-of-gamut inputs clamp; there is no failure mode.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::LabColor;
    ///
    /// assert_eq!(LabColor::new(0.0, 0.0, 0.0).to_hex(), "#000000");
    /// assert_eq!(LabColor::new(50.0, 20.0, -10.0).to_hex(), "#916b88");
    /// ```
    pub fn to_hex(self) -> String {
        // Lab -> XYZ, D65 reference white (Xn=95.047, Yn=100.0, Zn=108.883)
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let x = 95.047 * f_inv(fx) / 100.0;
        let y = 100.0 * f_inv(fy) / 100.0;
        let z = 108.883 * f_inv(fz) / 100.0;

        // XYZ -> linear sRGB
        let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
        let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
        let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

        let r = (gamma_encode(r).clamp(0.0, 1.0) * 255.0) as u8;
        let g = (gamma_encode(g).clamp(0.0, 1.0) * 255.0) as u8;
        let b = (gamma_encode(b).clamp(0.0, 1.0) * 255.0) as u8;

        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Inverse of the CIE Lab companding function.
///
/// Cube above the linearity threshold, linear ramp below it.
#[inline]
fn f_inv(t: f64) -> f64 {
    if t > 0.206893 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// sRGB gamma encoding (IEC 61966-2-1): linear light to display values.
#[inline]
fn gamma_encode(c: f64) -> f64 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}
