use std::fmt;

/// An angle in degrees, minutes and seconds-with-decimals.
///
/// The sign is kept apart from the degree component, so angles in the
/// open interval (-1, 0) keep it even though `degrees` is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl Dms {
    /// Sign taken from the degree component
    #[must_use]
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Dms {
        Dms {
            negative: degrees < 0,
            degrees,
            minutes,
            seconds,
        }
    }

    /// A negative angle of less than one degree
    #[must_use]
    pub fn negative_fraction(minutes: i32, seconds: f64) -> Dms {
        Dms {
            negative: true,
            degrees: 0,
            minutes,
            seconds,
        }
    }

    #[must_use]
    pub fn to_degrees(self) -> f64 {
        let magnitude = dms_to_dec(self.degrees.abs(), self.minutes, self.seconds);
        if self.negative {
            return -magnitude;
        }
        magnitude
    }
}

/// `42 43 6.960000`: degrees, minutes, and seconds with six decimals
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let (degrees, minutes, seconds) = (self.degrees.abs(), self.minutes, self.seconds);
        write!(f, "{sign}{degrees} {minutes} {seconds:.6}")
    }
}

/// Transformation from degrees-with-decimals to degrees, minutes and
/// seconds-with-decimals.
///
/// The fractional part is taken verbatim from the decimal rendering of
/// the input, i.e. `42.7186` yields the fraction `0.7186`, not the binary
/// remainder `42.7186 - 42`. This reproduces the digits the user wrote,
/// and gives `(42, 43, 6.96)` for `42.7186`.
///
/// The sign of the input is recorded in [`Dms::negative`], so `-0.5`
/// converts to a negative zero-degree angle of 30 minutes.
#[must_use]
pub fn dec_to_dms(decimal: f64) -> Dms {
    if !decimal.is_finite() {
        return Dms::new(0, 0, f64::NAN);
    }

    let text = decimal.to_string();
    let fraction = match text.split_once('.') {
        Some((_, digits)) => format!("0.{digits}").parse::<f64>().unwrap_or(0.),
        None => 0.,
    };

    let total = fraction * 3600.;
    let minutes = (total / 60.).floor();
    let seconds = total - minutes * 60.;
    Dms {
        negative: decimal < 0.,
        degrees: decimal.trunc() as i32,
        minutes: minutes as i32,
        seconds,
    }
}

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes and seconds are taken as magnitudes.
#[must_use]
pub fn dms_to_dec(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    let fraction = (f64::from(minutes) * 60. + seconds) / 3600.;
    if degrees < 0 {
        return f64::from(degrees) - fraction;
    }
    f64::from(degrees) + fraction
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn to_dms() {
        // Michigan State University
        let dms = dec_to_dms(42.7186);
        assert_eq!((dms.degrees, dms.minutes), (42, 43));
        assert_float_eq!(dms.seconds, 6.96, abs <= 1e-9);

        let dms = dec_to_dms(-84.468466);
        assert_eq!((dms.degrees, dms.minutes), (-84, 28));
        assert_float_eq!(dms.seconds, 6.4776, abs <= 1e-9);

        // Whole degrees
        assert_eq!(dec_to_dms(12.), Dms::new(12, 0, 0.));
        assert_eq!(dec_to_dms(-7.), Dms::new(-7, 0, 0.));

        // Less than a degree south or west
        let dms = dec_to_dms(-0.5);
        assert_eq!(dms, Dms::negative_fraction(30, 0.));
        assert!(dms.negative);
        assert!(!dec_to_dms(0.5).negative);

        // Nothing to convert
        assert!(dec_to_dms(f64::NAN).seconds.is_nan());
        assert!(dec_to_dms(f64::INFINITY).seconds.is_nan());
    }

    #[test]
    fn to_dec() {
        // University of Michigan
        assert_float_eq!(dms_to_dec(42, 16, 29.7078), 42.274919, abs <= 5e-7);
        assert_float_eq!(dms_to_dec(-83, 44, 26.4192), -83.740672, abs <= 5e-7);
        assert_eq!(dms_to_dec(55, 30, 36.), 55.51);
        assert_eq!(Dms::new(-55, 30, 36.).to_degrees(), -55.51);
        assert_eq!(Dms::negative_fraction(30, 0.).to_degrees(), -0.5);
    }

    #[test]
    fn roundtrip() {
        let angles = [42.7186, -84.468466, 12.5, -33.856553, 151.214696, 0.25, 89.999];
        for d in angles.into_iter().chain([-0.5, -0.180653]) {
            let dms = dec_to_dms(d);
            assert_float_eq!(dms.to_degrees(), d, abs <= 1e-9);
        }
    }

    #[test]
    fn display() {
        assert_eq!(dec_to_dms(42.7186).to_string(), "42 43 6.960000");
        assert_eq!(dec_to_dms(-84.468466).to_string(), "-84 28 6.477600");
        assert_eq!(dec_to_dms(-0.180653).to_string(), "-0 10 50.350800");
    }
}
