mod cartesians;

pub use cartesians::Cartesian;

use crate::Error;

/// Representation of a biaxial ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::WGS84
    }
}

impl Ellipsoid {
    /// The World Geodetic System 1984 ellipsoid
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        f: 1. / 298.257_223_563,
    };

    /// User defined ellipsoid
    #[must_use]
    pub const fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        match name {
            "WGS84" => Ok(Ellipsoid::WGS84),
            "GRS80" => Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)),
            "intl" => Ok(Ellipsoid::new(6_378_388.0, 1. / 297.0)),
            "Helmert" => Ok(Ellipsoid::new(6_378_200.0, 1. / 298.3)),
            "clrk66" => Ok(Ellipsoid::new(6_378_206.4, 1. / 294.978_698_2)),
            "clrk80" => Ok(Ellipsoid::new(6_378_249.145, 1. / 293.465)),
            "bessel" => Ok(Ellipsoid::new(6_377_397.155, 1. / 299.152_812_8)),
            _ => Err(Error::NotFound(format!("ellipsoid {name}"))),
        }
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b = a (1 - f)*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattening and eccentricity -------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The squared eccentricity *e² = 2f - f²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        2.0 * self.f - self.f * self.f
    }

    // ----- Radii -----------------------------------------------------------------

    /// The distance from the center to the surface of the meridian ellipse
    /// at the given latitude, in degrees. This is the polar form of the
    /// ellipse equation, *r = 1 / sqrt((cos φ / a)² + (sin φ / b)²)*.
    #[must_use]
    pub fn radius_at_latitude(&self, latitude: f64) -> f64 {
        let phi = latitude.to_radians();
        let x = phi.cos() / self.a;
        let y = phi.sin() / self.semiminor_axis();
        1.0 / (x * x + y * y).sqrt()
    }

    /// The radius of curvature in the prime vertical, *N*, at the
    /// given latitude in radians
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------
