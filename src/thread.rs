//! Screw-thread geometry.
//!
//! A [`Thread`] captures the nominal geometry of one standard screw thread:
//! its major diameter, its pitch, the reciprocal thread density, and the
//! minor diameter derived from the standard 60° profile. Exactly one of
//! pitch or density is supplied at construction; the other is always derived,
//! so the two can never disagree.
//!
//! Threads from different standards are built through variant-specific
//! factory constructors ([`Thread::metric`], [`Thread::uts_fractional`],
//! [`Thread::uts_numbered`]) that normalize their inputs into the shared
//! quantity representation. The variants differ only in how the major
//! diameter and pitch are specified and in their [`Designation`] notation;
//! the geometric derivations live once, in [`Thread::new`].

mod designation;
mod error;

use std::{cmp::Ordering, fmt};

use uom::si::{
    f64::Length,
    length::{inch, millimeter},
};

use crate::support::{
    constraint::StrictlyPositive,
    units::{TeethPerInch, ThreadDensity},
};

pub use designation::Designation;
pub use error::InvalidThreadSpecification;

/// One standard screw thread, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thread {
    designation: Designation,
    major_diameter: Length,
    minor_diameter: Length,
    pitch: Length,
    density: ThreadDensity,
}

impl Thread {
    /// Constructs a thread from its major diameter and exactly one of pitch
    /// or thread density.
    ///
    /// The missing one of pitch/density is derived as the reciprocal of the
    /// other. The minor diameter is derived from the fundamental 60° thread
    /// profile, whose thread height is `5·√3/8` of the pitch:
    /// `minor = major − 5·√3·pitch/8`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThreadSpecification`] if the major diameter or the
    /// supplied pitch/density is not strictly positive, or if pitch and
    /// density are not supplied exactly-one-of.
    pub fn new(
        designation: Designation,
        major_diameter: Length,
        pitch: Option<Length>,
        density: Option<ThreadDensity>,
    ) -> Result<Self, InvalidThreadSpecification> {
        let major_diameter = StrictlyPositive::new(major_diameter)
            .map_err(InvalidThreadSpecification::MajorDiameter)?
            .into_inner();

        let (pitch, density) = match (pitch, density) {
            (Some(pitch), None) => {
                let pitch = StrictlyPositive::new(pitch)
                    .map_err(InvalidThreadSpecification::Pitch)?
                    .into_inner();
                (pitch, 1.0 / pitch)
            }
            (None, Some(density)) => {
                let density = StrictlyPositive::new(density)
                    .map_err(InvalidThreadSpecification::Density)?
                    .into_inner();
                (1.0 / density, density)
            }
            (None, None) => return Err(InvalidThreadSpecification::Unspecified),
            (Some(_), Some(_)) => return Err(InvalidThreadSpecification::Overspecified),
        };

        let minor_diameter = major_diameter - pitch * (5.0 * 3.0_f64.sqrt() / 8.0);

        Ok(Self {
            designation,
            major_diameter,
            minor_diameter,
            pitch,
            density,
        })
    }

    /// Constructs an ISO metric thread, e.g. `M6-1`, from millimeter values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThreadSpecification`] if either value is not strictly
    /// positive.
    pub fn metric(major_mm: f64, pitch_mm: f64) -> Result<Self, InvalidThreadSpecification> {
        Self::new(
            Designation::Metric { major_mm, pitch_mm },
            Length::new::<millimeter>(major_mm),
            Some(Length::new::<millimeter>(pitch_mm)),
            None,
        )
    }

    /// Constructs a UTS thread whose major diameter is a fraction of an inch,
    /// e.g. `1/4`-20.
    ///
    /// The numerator and denominator are kept exactly in the designation; the
    /// diameter quantity is their quotient in inches.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThreadSpecification`] if the denominator is zero or
    /// if the diameter or TPI comes out non-positive.
    pub fn uts_fractional(
        numerator: u32,
        denominator: u32,
        tpi: u32,
    ) -> Result<Self, InvalidThreadSpecification> {
        if denominator == 0 {
            return Err(InvalidThreadSpecification::ZeroDenominator);
        }

        Self::new(
            Designation::UtsFractional {
                numerator,
                denominator,
                tpi,
            },
            Length::new::<inch>(f64::from(numerator) / f64::from(denominator)),
            None,
            Some(ThreadDensity::new_per_inch(f64::from(tpi))),
        )
    }

    /// Constructs a UTS thread specified by a gauge number, e.g. `#8-32`.
    ///
    /// The gauge formula fixes the major diameter at
    /// `number × 0.013 in + 0.060 in`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThreadSpecification`] if the TPI is zero.
    pub fn uts_numbered(number: u32, tpi: u32) -> Result<Self, InvalidThreadSpecification> {
        Self::new(
            Designation::UtsNumbered { number, tpi },
            Length::new::<inch>(f64::from(number) * 0.013 + 0.060),
            None,
            Some(ThreadDensity::new_per_inch(f64::from(tpi))),
        )
    }

    /// The thread's designation in its standard's notation.
    pub fn designation(&self) -> Designation {
        self.designation
    }

    /// Crest diameter.
    pub fn major_diameter(&self) -> Length {
        self.major_diameter
    }

    /// Root diameter, derived from the major diameter and pitch.
    pub fn minor_diameter(&self) -> Length {
        self.minor_diameter
    }

    /// Axial advance per turn.
    pub fn pitch(&self) -> Length {
        self.pitch
    }

    /// Teeth per unit length, the reciprocal of the pitch.
    pub fn density(&self) -> ThreadDensity {
        self.density
    }

    /// Compares threads by `(major_diameter, minor_diameter)` ascending.
    ///
    /// This is the total order used to decide which thread of a differential
    /// pair is the larger one. `total_cmp` over the underlying SI values
    /// keeps the order total even though the quantities are floats.
    pub fn cmp_geometry(&self, other: &Self) -> Ordering {
        self.major_diameter
            .value
            .total_cmp(&other.major_diameter.value)
            .then_with(|| {
                self.minor_diameter
                    .value
                    .total_cmp(&other.minor_diameter.value)
            })
    }
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.designation.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    #[test]
    fn metric_derives_minor_diameter_and_density() {
        let thread = Thread::metric(1.0, 0.25).unwrap();

        let expected_minor = 1.0 - 5.0 * 3.0_f64.sqrt() * 0.25 / 8.0;
        assert_relative_eq!(
            thread.minor_diameter().get::<millimeter>(),
            expected_minor,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            thread.minor_diameter().get::<millimeter>(),
            0.729,
            epsilon = 1e-3
        );

        assert!(thread.minor_diameter() < thread.major_diameter());
        assert_relative_eq!(
            (thread.pitch() * thread.density()).get::<ratio>(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn numbered_gauge_formula() {
        let thread = Thread::uts_numbered(0, 80).unwrap();

        assert_relative_eq!(thread.major_diameter().get::<inch>(), 0.060, epsilon = 1e-12);
        assert_relative_eq!(thread.pitch().get::<inch>(), 0.0125, epsilon = 1e-12);
        assert_relative_eq!(thread.minor_diameter().get::<inch>(), 0.0465, epsilon = 1e-4);
        assert_relative_eq!(
            (thread.pitch() * thread.density()).get::<ratio>(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn fractional_diameter_and_pitch() {
        let thread = Thread::uts_fractional(1, 4, 20).unwrap();

        assert_relative_eq!(thread.major_diameter().get::<inch>(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(thread.pitch().get::<inch>(), 0.05, epsilon = 1e-12);
        assert!(thread.minor_diameter() < thread.major_diameter());
    }

    #[test]
    fn display_follows_each_standard_notation() {
        assert_eq!(Thread::metric(1.0, 0.25).unwrap().to_string(), "M1-0.25");
        assert_eq!(Thread::metric(3.5, 0.6).unwrap().to_string(), "M3.5-0.6");
        assert_eq!(
            Thread::uts_fractional(1, 4, 20).unwrap().to_string(),
            "1/4\"-20"
        );
        assert_eq!(Thread::uts_numbered(0, 80).unwrap().to_string(), "#0-80");
        assert_eq!(Thread::uts_numbered(12, 32).unwrap().to_string(), "#12-32");
    }

    #[test]
    fn rejects_missing_or_duplicated_pitch_specification() {
        let designation = Designation::Metric {
            major_mm: 1.0,
            pitch_mm: 0.25,
        };
        let major = Length::new::<millimeter>(1.0);
        let pitch = Length::new::<millimeter>(0.25);
        let density = 1.0 / pitch;

        assert!(matches!(
            Thread::new(designation, major, None, None),
            Err(InvalidThreadSpecification::Unspecified)
        ));
        assert!(matches!(
            Thread::new(designation, major, Some(pitch), Some(density)),
            Err(InvalidThreadSpecification::Overspecified)
        ));
    }

    #[test]
    fn rejects_non_positive_magnitudes() {
        assert!(matches!(
            Thread::metric(-1.0, 0.25),
            Err(InvalidThreadSpecification::MajorDiameter(_))
        ));
        assert!(matches!(
            Thread::metric(1.0, 0.0),
            Err(InvalidThreadSpecification::Pitch(_))
        ));
        assert!(matches!(
            Thread::uts_numbered(0, 0),
            Err(InvalidThreadSpecification::Density(_))
        ));
        assert!(matches!(
            Thread::uts_fractional(1, 0, 20),
            Err(InvalidThreadSpecification::ZeroDenominator)
        ));
    }

    #[test]
    fn geometry_order_is_major_then_minor() {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();
        assert_eq!(m1.cmp_geometry(&m1_2), Ordering::Less);
        assert_eq!(m1_2.cmp_geometry(&m1), Ordering::Greater);

        // Equal major diameters fall back to the minor diameter: the coarser
        // pitch cuts deeper, so it sorts first.
        let coarse = Thread::metric(8.0, 1.25).unwrap();
        let fine = Thread::metric(8.0, 1.0).unwrap();
        assert_eq!(coarse.cmp_geometry(&fine), Ordering::Less);
        assert_eq!(coarse.cmp_geometry(&coarse), Ordering::Equal);
    }
}
