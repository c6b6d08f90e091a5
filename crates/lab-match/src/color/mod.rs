//! Color types, distance metrics, and interpretation bands
//!
//! All matching in this crate happens on CIE L*a*b* coordinates. This module
//! provides the [`LabColor`] value type with the two distance notions the
//! match finders use (CIE76 delta E and cosine/angular distance), the
//! deterministic Lab -> sRGB hex rendering used everywhere a color is shown
//! to a human, and the fixed interpretation scales for both metrics.
//!
//! # Example
//!
//! ```
//! use lab_match::{DeltaEBand, LabColor};
//!
//! let batch = LabColor::new(50.0, 20.0, -10.0);
//! let target = LabColor::new(52.0, 21.0, -9.0);
//!
//! let delta = batch.delta_e(target);
//! assert_eq!(DeltaEBand::classify(delta), DeltaEBand::Noticeable);
//! ```

mod bands;
mod lab;

pub use bands::{AngularBand, DeltaEBand};
pub use lab::LabColor;
