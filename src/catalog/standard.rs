//! The embedded reference table of standard thread sizes.

use crate::thread::{InvalidThreadSpecification, Thread};

/// ISO metric coarse and fine series: (major diameter, pitch) in millimeters.
const ISO_METRIC_MM: [(f64, f64); 76] = [
    (1.0, 0.25),
    (1.0, 0.2),
    (1.2, 0.25),
    (1.2, 0.2),
    (1.4, 0.3),
    (1.4, 0.2),
    (1.6, 0.35),
    (1.6, 0.2),
    (1.8, 0.35),
    (1.8, 0.2),
    (2.0, 0.4),
    (2.0, 0.25),
    (2.5, 0.45),
    (2.5, 0.35),
    (3.0, 0.5),
    (3.0, 0.35),
    (3.5, 0.6),
    (3.5, 0.35),
    (4.0, 0.7),
    (4.0, 0.5),
    (5.0, 0.8),
    (5.0, 0.5),
    (5.5, 0.9),
    (5.5, 0.5),
    (6.0, 1.0),
    (6.0, 0.75),
    (7.0, 1.0),
    (7.0, 0.75),
    (8.0, 1.25),
    (8.0, 1.0),
    (8.0, 0.75),
    (10.0, 1.5),
    (10.0, 1.25),
    (10.0, 1.0),
    (12.0, 1.75),
    (12.0, 1.5),
    (12.0, 1.25),
    (14.0, 2.0),
    (14.0, 1.5),
    (16.0, 2.0),
    (16.0, 1.5),
    (18.0, 2.5),
    (18.0, 2.0),
    (18.0, 1.5),
    (20.0, 2.5),
    (20.0, 2.0),
    (20.0, 1.5),
    (22.0, 2.5),
    (22.0, 2.0),
    (22.0, 1.5),
    (24.0, 3.0),
    (24.0, 2.0),
    (27.0, 3.0),
    (27.0, 2.0),
    (30.0, 3.5),
    (30.0, 2.0),
    (33.0, 3.5),
    (33.0, 2.0),
    (36.0, 4.0),
    (36.0, 3.0),
    (39.0, 4.0),
    (39.0, 3.0),
    (42.0, 4.5),
    (42.0, 3.0),
    (45.0, 4.5),
    (45.0, 3.0),
    (48.0, 5.0),
    (48.0, 3.0),
    (52.0, 5.0),
    (52.0, 4.0),
    (56.0, 5.5),
    (56.0, 4.0),
    (60.0, 5.5),
    (60.0, 4.0),
    (62.0, 6.0),
    (62.0, 4.0),
];

/// UTS numbered-gauge series: (gauge number, TPI).
const UTS_NUMBERED: [(u32, u32); 20] = [
    (0, 80),
    (1, 64),
    (1, 72),
    (2, 56),
    (2, 64),
    (3, 48),
    (3, 56),
    (4, 40),
    (4, 48),
    (5, 40),
    (5, 44),
    (6, 32),
    (6, 40),
    (8, 32),
    (8, 36),
    (10, 24),
    (10, 28),
    (12, 24),
    (12, 38),
    (12, 32),
];

/// UTS fractional series: (numerator, denominator, TPI), diameter in inches.
const UTS_FRACTIONAL: [(u32, u32, u32); 27] = [
    (1, 4, 20),
    (1, 4, 28),
    (1, 4, 32),
    (5, 16, 18),
    (5, 16, 24),
    (5, 16, 32),
    (3, 8, 16),
    (3, 8, 24),
    (3, 8, 32),
    (7, 16, 14),
    (7, 16, 20),
    (7, 16, 28),
    (1, 2, 13),
    (1, 2, 20),
    (1, 2, 28),
    (9, 16, 12),
    (9, 16, 18),
    (9, 16, 24),
    (5, 8, 11),
    (5, 8, 18),
    (5, 8, 24),
    (3, 4, 10),
    (3, 4, 16),
    (3, 4, 20),
    (7, 8, 9),
    (7, 8, 14),
    (7, 8, 20),
];

/// Builds the embedded catalog of standard threads, in table order.
///
/// # Errors
///
/// Returns [`InvalidThreadSpecification`] if a table entry is non-physical.
/// The table ships with the crate, so an error here is a configuration
/// defect and generation should halt rather than continue with a partial
/// catalog.
pub fn standard_threads() -> Result<Vec<Thread>, InvalidThreadSpecification> {
    let mut threads =
        Vec::with_capacity(ISO_METRIC_MM.len() + UTS_NUMBERED.len() + UTS_FRACTIONAL.len());

    for (major_mm, pitch_mm) in ISO_METRIC_MM {
        threads.push(Thread::metric(major_mm, pitch_mm)?);
    }
    for (number, tpi) in UTS_NUMBERED {
        threads.push(Thread::uts_numbered(number, tpi)?);
    }
    for (numerator, denominator, tpi) in UTS_FRACTIONAL {
        threads.push(Thread::uts_fractional(numerator, denominator, tpi)?);
    }

    Ok(threads)
}
