//! Differential thread pairs.
//!
//! Two threads of different pitch on a common axis form a differential: one
//! relative revolution advances the assembly by the difference of the two
//! pitches, a far finer feed than either thread alone. For the assembly to
//! nest, the smaller thread's crest must clear the larger thread's root; the
//! available gap is the pair's radial clearance.

use std::cmp::Ordering;

use uom::{ConstZero, si::f64::Length};

use crate::{support::units::ThreadDensity, thread::Thread};

/// One candidate differential-thread assembly, with its derived geometry.
///
/// The pair keeps its two threads in the order they were given; the
/// smaller/larger distinction is re-derived from the thread geometry order
/// whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialPair {
    threads: (Thread, Thread),
    effective_pitch: Length,
    effective_density: ThreadDensity,
    radial_clearance: Length,
}

impl DifferentialPair {
    /// Builds the pair and derives its differential geometry.
    ///
    /// The two threads must have different pitches; equal-pitch combinations
    /// cannot form a differential and are filtered out before construction
    /// by [`catalog::generate`](crate::catalog::generate). A non-positive
    /// raw clearance is clamped to zero length: the pair cannot nest, but it
    /// is still reportable.
    pub fn new(left: Thread, right: Thread) -> Self {
        debug_assert!(
            left.pitch() != right.pitch(),
            "equal-pitch threads cannot form a differential"
        );

        let (smaller, larger) = by_geometry(left, right);

        let effective_pitch = (smaller.pitch() - larger.pitch()).abs();
        let effective_density = 1.0 / effective_pitch;

        let raw_clearance = (larger.minor_diameter() - smaller.major_diameter()) / 2.0;
        let radial_clearance = if raw_clearance > Length::ZERO {
            raw_clearance
        } else {
            Length::ZERO
        };

        Self {
            threads: (left, right),
            effective_pitch,
            effective_density,
            radial_clearance,
        }
    }

    /// The two threads, in the order they were given.
    pub fn threads(&self) -> (Thread, Thread) {
        self.threads
    }

    /// The smaller thread of the pair, by the thread geometry order.
    pub fn smaller(&self) -> Thread {
        by_geometry(self.threads.0, self.threads.1).0
    }

    /// The larger thread of the pair, by the thread geometry order.
    pub fn larger(&self) -> Thread {
        by_geometry(self.threads.0, self.threads.1).1
    }

    /// Net axial advance per relative revolution: `|pitch₁ − pitch₂|`.
    pub fn effective_pitch(&self) -> Length {
        self.effective_pitch
    }

    /// Reciprocal of the effective pitch.
    pub fn effective_density(&self) -> ThreadDensity {
        self.effective_density
    }

    /// Radial gap between the larger thread's root and the smaller thread's
    /// crest, zero when the pair cannot nest.
    pub fn radial_clearance(&self) -> Length {
        self.radial_clearance
    }

    /// Compares pairs by effective pitch ascending, the order catalogs are
    /// presented in (finest resulting feed first).
    pub fn cmp_by_effective_pitch(&self, other: &Self) -> Ordering {
        self.effective_pitch
            .value
            .total_cmp(&other.effective_pitch.value)
    }

    /// Compares pairs by radial clearance ascending; catalogs use this to
    /// break effective-pitch ties.
    pub fn cmp_by_radial_clearance(&self, other: &Self) -> Ordering {
        self.radial_clearance
            .value
            .total_cmp(&other.radial_clearance.value)
    }
}

/// Orders two threads by the thread geometry order, smaller first.
fn by_geometry(left: Thread, right: Thread) -> (Thread, Thread) {
    if left.cmp_geometry(&right) == Ordering::Greater {
        (right, left)
    } else {
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{inch, millimeter};

    use crate::support::units::TeethPerInch;

    #[test]
    fn effective_pitch_is_the_pitch_difference() {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();
        let pair = DifferentialPair::new(m1, m1_2);

        assert_relative_eq!(
            pair.effective_pitch().get::<millimeter>(),
            0.05,
            epsilon = 1e-12
        );
        assert_relative_eq!(pair.effective_pitch().get::<inch>(), 0.00197, epsilon = 1e-5);
        assert_relative_eq!(
            pair.effective_density().get_per_inch(),
            508.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn effective_pitch_ignores_argument_order() {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();

        let forward = DifferentialPair::new(m1, m1_2);
        let reversed = DifferentialPair::new(m1_2, m1);
        assert_eq!(forward.effective_pitch(), reversed.effective_pitch());
        assert_eq!(forward.radial_clearance(), reversed.radial_clearance());
    }

    #[test]
    fn threads_keep_their_input_order() {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();

        let pair = DifferentialPair::new(m1_2, m1);
        assert_eq!(pair.threads(), (m1_2, m1));
        assert_eq!(pair.smaller(), m1);
        assert_eq!(pair.larger(), m1_2);
    }

    #[test]
    fn infeasible_nesting_clamps_clearance_to_zero() {
        // M1.2-0.2's minor diameter (≈0.983 mm) is below M1's major diameter,
        // so the raw clearance is negative.
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();

        let pair = DifferentialPair::new(m1, m1_2);
        assert_eq!(pair.radial_clearance(), Length::ZERO);
    }

    #[test]
    fn feasible_nesting_reports_the_radial_gap() {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m2 = Thread::metric(2.0, 0.4).unwrap();
        let pair = DifferentialPair::new(m1, m2);

        let larger_minor = 2.0 - 5.0 * 3.0_f64.sqrt() * 0.4 / 8.0;
        assert_relative_eq!(
            pair.radial_clearance().get::<millimeter>(),
            (larger_minor - 1.0) / 2.0,
            epsilon = 1e-12
        );
        assert!(pair.radial_clearance() > Length::ZERO);
    }
}
