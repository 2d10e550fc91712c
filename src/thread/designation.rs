use std::fmt;

/// How a thread is written in its standard's notation.
///
/// The designation carries the values the notation is built from, as they
/// were specified, so display never has to recover them from converted
/// quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Designation {
    /// ISO metric: `M{major}-{pitch}`, magnitudes in millimeters.
    Metric { major_mm: f64, pitch_mm: f64 },
    /// UTS, fractional-inch diameter: `{numerator}/{denominator}"-{tpi}`.
    UtsFractional {
        numerator: u32,
        denominator: u32,
        tpi: u32,
    },
    /// UTS, gauge-number diameter: `#{number}-{tpi}`.
    UtsNumbered { number: u32, tpi: u32 },
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Metric { major_mm, pitch_mm } => write!(f, "M{major_mm}-{pitch_mm}"),
            Self::UtsFractional {
                numerator,
                denominator,
                tpi,
            } => write!(f, "{numerator}/{denominator}\"-{tpi}"),
            Self::UtsNumbered { number, tpi } => write!(f, "#{number}-{tpi}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_millimeter_magnitudes_drop_the_decimal_point() {
        let designation = Designation::Metric {
            major_mm: 6.0,
            pitch_mm: 1.0,
        };
        assert_eq!(designation.to_string(), "M6-1");
    }

    #[test]
    fn fractional_diameters_render_as_exact_fractions() {
        let designation = Designation::UtsFractional {
            numerator: 5,
            denominator: 16,
            tpi: 18,
        };
        assert_eq!(designation.to_string(), "5/16\"-18");

        let designation = Designation::UtsFractional {
            numerator: 1,
            denominator: 2,
            tpi: 13,
        };
        assert_eq!(designation.to_string(), "1/2\"-13");
    }
}
