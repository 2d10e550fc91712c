//! Presentation records for generated differential catalogs.
//!
//! The generator's output is a sequence of [`DifferentialPair`] values; this
//! module projects each into a flat [`Record`] of display strings and writes
//! the whole sequence as a JSON document. All lengths are rendered in inch
//! units at fixed precision, matching the customary presentation of
//! differential-thread tables.

use std::io;

use serde::Serialize;
use uom::si::length::inch;

use crate::{differential::DifferentialPair, support::units::TeethPerInch};

/// One differential pair, projected into its presentation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Display strings of the two threads, in the pair's input order.
    pub threads: [String; 2],
    /// Radial clearance in inches, three decimal places, unit suffixed.
    pub radial_clearance: String,
    /// Effective pitch in inches, five decimal places, unit suffixed.
    pub effective_pitch: String,
    /// Effective TPI as a bare numeral, two decimal places.
    pub effective_tpi: String,
}

impl Record {
    /// Projects one pair into its presentation fields.
    pub fn from_pair(pair: &DifferentialPair) -> Self {
        let (left, right) = pair.threads();
        Self {
            threads: [left.to_string(), right.to_string()],
            radial_clearance: format!("{:.3} in", pair.radial_clearance().get::<inch>()),
            effective_pitch: format!("{:.5} in", pair.effective_pitch().get::<inch>()),
            effective_tpi: format!("{:.2}", pair.effective_density().get_per_inch()),
        }
    }
}

/// Projects an ordered pair sequence into records, preserving order.
pub fn records(pairs: &[DifferentialPair]) -> Vec<Record> {
    pairs.iter().map(Record::from_pair).collect()
}

/// Writes the records for `pairs` to `writer` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer reports an I/O
/// failure.
pub fn write_json<W: io::Write>(writer: W, pairs: &[DifferentialPair]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &records(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::thread::Thread;

    fn sample_pair() -> DifferentialPair {
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m1_2 = Thread::metric(1.2, 0.2).unwrap();
        DifferentialPair::new(m1, m1_2)
    }

    #[test]
    fn record_renders_fixed_precision_inch_fields() {
        let record = Record::from_pair(&sample_pair());

        assert_eq!(record.threads, ["M1-0.25".to_string(), "M1.2-0.2".to_string()]);
        assert_eq!(record.radial_clearance, "0.000 in");
        assert_eq!(record.effective_pitch, "0.00197 in");
        assert_eq!(record.effective_tpi, "508.00");
    }

    #[test]
    fn record_renders_a_feasible_clearance() {
        // M1-0.25 nests inside M2-0.4: clearance ≈ 0.2835 mm ≈ 0.0112 in.
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let m2 = Thread::metric(2.0, 0.4).unwrap();
        let record = Record::from_pair(&DifferentialPair::new(m1, m2));

        assert_eq!(record.radial_clearance, "0.011 in");
        assert_eq!(record.effective_pitch, "0.00591 in");
        assert_eq!(record.effective_tpi, "169.33");
    }

    #[test]
    fn records_preserve_input_order() {
        let m2 = Thread::metric(2.0, 0.4).unwrap();
        let m1 = Thread::metric(1.0, 0.25).unwrap();
        let pairs = [DifferentialPair::new(m2, m1), sample_pair()];

        let records = records(&pairs);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].threads[0], "M2-0.4");
        assert_eq!(records[0].threads[1], "M1-0.25");
    }

    #[test]
    fn json_document_is_an_array_of_flat_records() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &[sample_pair()]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["threads"][0], "M1-0.25");
        assert_eq!(value[0]["effective_pitch"], "0.00197 in");
        assert_eq!(value[0]["effective_tpi"], "508.00");
        assert_eq!(value[0]["radial_clearance"], "0.000 in");
    }
}
