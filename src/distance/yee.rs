/// Great circle distance on a sphere with the local ellipsoid radius
use crate::authoring::*;

/// Approximate distance by the spherical law of cosines, using the
/// [radius of the ellipsoid](Ellipsoid::radius_at_latitude) at the mean
/// latitude of the two points as the radius of the sphere.
///
/// Fast, but the further apart the points, the less accurate the result.
/// Equations by Ka-Ping Yee ([2012](crate::Bibliography::Yee12)).
#[derive(Clone, Copy, Debug, Default)]
pub struct Yee {
    ellps: Ellipsoid,
}

impl Yee {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> Yee {
        Yee { ellps }
    }

    /// The approximate distance in meters between (`lat1`, `lon1`) and
    /// (`lat2`, `lon2`), all given in degrees.
    #[must_use]
    pub fn inverse(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        // The cosine expansion below does not quite reach 1 for identical points
        if lat1 == lat2 && lon1 == lon2 {
            return 0.;
        }

        let phi1 = lat1.to_radians();
        let lam1 = lon1.to_radians();
        let phi2 = lat2.to_radians();
        let lam2 = lon2.to_radians();

        let radius = self.ellps.radius_at_latitude((lat1 + lat2) / 2.);

        // cos(λ1 - λ2), expanded
        let cosdlam = lam1.cos() * lam2.cos() + lam1.sin() * lam2.sin();
        let cosangle = phi1.cos() * phi2.cos() * cosdlam + phi1.sin() * phi2.sin();

        cosangle.clamp(-1., 1.).acos() * radius
    }
}

impl DistanceMethod for Yee {
    fn distance(&self, from: &Location, to: &Location) -> Result<f64, Error> {
        let (lat1, lon1) = from.coordinates()?;
        let (lat2, lon2) = to.coordinates()?;
        Ok(self.inverse(lat1, lon1, lat2, lon2))
    }
}

pub fn new(ellps: &Ellipsoid) -> Result<Box<dyn DistanceMethod>, Error> {
    Ok(Box::new(Yee::new(*ellps)))
}

// ----- Tests ---------------------------------------------------------------------
