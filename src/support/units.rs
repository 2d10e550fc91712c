//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (diameters, pitches,
//! thread densities). This module provides the extensions thread modeling
//! needs that aren't included in [`uom`].
//!
//! ## Thread density
//!
//! Thread density is a reciprocal length (teeth per unit length), a dimension
//! [`uom`] has no named quantity for. [`ThreadDensity`] defines it directly
//! over the SI dimension system, and the [`TeethPerInch`] extension trait
//! covers the customary teeth-per-inch (TPI) construction and readout:
//!
//! ```
//! use differential_threads::support::units::{TeethPerInch, ThreadDensity};
//!
//! let density = ThreadDensity::new_per_inch(20.0);
//! assert!((density.get_per_inch() - 20.0).abs() < 1e-12);
//! ```
//!
//! Reciprocals fall out of [`uom`]'s scalar arithmetic: dividing `1.0` by a
//! [`Length`] pitch yields a [`ThreadDensity`], and vice versa, with the
//! dimension checked by the type system.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, Z0},
};

use uom::si::{f64::Length, length::inch, ratio::ratio};

/// Thread density (reciprocal length), m⁻¹ in SI.
pub type ThreadDensity = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Extension trait for thread densities expressed in teeth per inch.
///
/// The UTS reference tables specify density as an integer TPI; this trait
/// converts between that customary figure and the SI [`ThreadDensity`].
pub trait TeethPerInch {
    /// Builds a density of `count` teeth per inch.
    fn new_per_inch(count: f64) -> Self;

    /// Returns the density's magnitude in teeth per inch.
    fn get_per_inch(&self) -> f64;
}

impl TeethPerInch for ThreadDensity {
    fn new_per_inch(count: f64) -> Self {
        count / Length::new::<inch>(1.0)
    }

    fn get_per_inch(&self) -> f64 {
        (*self * Length::new::<inch>(1.0)).get::<ratio>()
    }
}
