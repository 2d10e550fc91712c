//! Catalog generation: pairing every thread in a collection against every
//! other.
//!
//! [`generate`] enumerates all unordered two-thread combinations, drops the
//! combinations that cannot form a differential (equal pitch), and returns
//! the surviving [`DifferentialPair`]s sorted by effective pitch. The
//! embedded [`standard_threads`] table provides the usual input: the ISO
//! metric coarse/fine series plus the UTS numbered-gauge and fractional
//! series.
//!
//! Enumeration is O(n²) in the catalog size; for the embedded table that is
//! a few thousand pairs, computed in one synchronous pass.

mod standard;

pub use standard::standard_threads;

use crate::{differential::DifferentialPair, thread::Thread};

/// Enumerates every differential pairing of `threads`, finest feed first.
///
/// Each unordered combination appears at most once, in the input order of
/// its two threads. Equal-pitch combinations are silently dropped; they are
/// valid catalog entries, just not differentials. Pairs with the same
/// effective pitch are ordered by radial clearance ascending.
pub fn generate(threads: &[Thread]) -> Vec<DifferentialPair> {
    let mut pairs: Vec<DifferentialPair> = threads
        .iter()
        .enumerate()
        .flat_map(|(i, &left)| threads[i + 1..].iter().map(move |&right| (left, right)))
        .filter(|(left, right)| left.pitch() != right.pitch())
        .map(|(left, right)| DifferentialPair::new(left, right))
        .collect();

    pairs.sort_by(|a, b| {
        a.cmp_by_effective_pitch(b)
            .then_with(|| a.cmp_by_radial_clearance(b))
    });
    pairs
}
