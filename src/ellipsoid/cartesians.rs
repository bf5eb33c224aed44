use super::*;

/// Earth centered, earth fixed cartesian coordinates, in meters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Cartesian {
        Cartesian { x, y, z }
    }
}

impl Ellipsoid {
    // ----- Geographic --> Cartesian conversion -----------------------------------

    /// Geographic to cartesian conversion. Latitude and longitude in
    /// degrees, height in meters above the ellipsoid.
    ///
    /// Follows the the derivation given by
    /// Bowring ([1976](crate::Bibliography::Bow76))
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn cartesian(&self, latitude: f64, longitude: f64, height: f64) -> Cartesian {
        let phi = latitude.to_radians();
        let lam = longitude.to_radians();

        let N = self.prime_vertical_radius_of_curvature(phi);
        let cosphi = phi.cos();
        let sinphi = phi.sin();
        let coslam = lam.cos();
        let sinlam = lam.sin();

        let X = (N + height) * cosphi * coslam;
        let Y = (N + height) * cosphi * sinlam;
        let Z = (N * (1.0 - self.eccentricity_squared()) + height) * sinphi;

        Cartesian::new(X, Y, Z)
    }
}

// ----- Tests ---------------------------------------------------------------------
