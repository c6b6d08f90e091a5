//! Display-precision rounding for result fields.

/// Round `value` to `decimals` decimal places, half away from zero.
///
/// Result records carry their fields at the precision the production
/// planning reports display, fixed at record construction.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
