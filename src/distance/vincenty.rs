/// Geodesic distance by Vincenty's inverse formula
use crate::authoring::*;
use std::f64::consts::PI;

// The longitude on the auxiliary sphere must settle to this level
const CONVERGENCE: f64 = 1e-12;
const MAX_ITERATIONS: usize = 20;

/// Distance along the geodesic, following Vincenty
/// ([1975](crate::Bibliography::Vin75)).
///
/// The result is rounded to the nearest millimeter, which is well within
/// the accuracy of the method. For nearly antipodal points the iteration
/// may fail to converge, in which case the computation fails with
/// [`Error::DistanceNotComputable`] rather than returning a poor estimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vincenty {
    ellps: Ellipsoid,
}

impl Vincenty {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> Vincenty {
        Vincenty { ellps }
    }

    /// The geodesic distance in meters between (`lat1`, `lon1`) and
    /// (`lat2`, `lon2`), all given in degrees.
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn inverse(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, Error> {
        let a = self.ellps.semimajor_axis();
        let b = self.ellps.semiminor_axis();
        let f = self.ellps.flattening();

        let L = lon2.to_radians() - lon1.to_radians();

        // The latitudes projected onto the auxiliary sphere
        let U1 = ((1. - f) * lat1.to_radians().tan()).atan();
        let U2 = ((1. - f) * lat2.to_radians().tan()).atan();
        let U1sin = U1.sin();
        let U1cos = U1.cos();
        let U2sin = U2.sin();
        let U2cos = U2.cos();

        // Initial estimate for λ, the longitude on the auxiliary sphere
        let mut ll = L;
        let mut ll_prev = 2. * PI;

        let mut sssin = 0.;
        let mut sscos = 0.;
        let mut ss = 0.;
        let mut aacos2 = 0.;
        let mut ssmx2cos = 0.;

        let mut i = 0;
        while (ll - ll_prev).abs() > CONVERGENCE && i < MAX_ITERATIONS {
            i += 1;

            // σ, the angular separation between the points
            let llsin = ll.sin();
            let llcos = ll.cos();
            let t1 = U2cos * llsin;
            let t2 = U1cos * U2sin - U1sin * U2cos * llcos;
            sssin = (t1 * t1 + t2 * t2).sqrt();

            // Coincident points
            if sssin == 0. {
                return Ok(0.);
            }

            sscos = U1sin * U2sin + U1cos * U2cos * llcos;
            ss = sssin.atan2(sscos);

            // α, the forward azimuth of the geodesic at equator
            let aa = (U1cos * U2cos * llsin / sssin).asin();
            aacos2 = aa.cos() * aa.cos();

            // cosine of 2 times σ_m, the angular separation from the midpoint
            // to the equator. Vanishes along the equator, where cos²α = 0.
            ssmx2cos = if aacos2 == 0. {
                0.
            } else {
                sscos - 2. * U1sin * U2sin / aacos2
            };

            let C = f / 16. * aacos2 * (4. + f * (4. - 3. * aacos2));
            ll_prev = ll;
            ll = L
                + (1. - C)
                    * f
                    * aa.sin()
                    * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));
        }
        trace!("vincenty: {i} iterations");

        if !ll.is_finite() || (ll - ll_prev).abs() > CONVERGENCE {
            warn!(
                "vincenty: no convergence after {i} iterations for ({lat1}, {lon1}) -> ({lat2}, {lon2})"
            );
            return Err(Error::DistanceNotComputable(format!(
                "no convergence after {i} iterations (nearly antipodal points?)"
            )));
        }

        let us = aacos2 * (a * a - b * b) / (b * b);
        let A = 1. + us / 16384. * (4096. + us * (-768. + us * (320. - 175. * us)));
        let B = us / 1024. * (256. + us * (-128. + us * (74. - 47. * us)));

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
        let t2 = -3. + 4. * sssin * sssin;
        let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
        let dss = B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3));

        let s = b * A * (ss - dss);

        // Round to 1 mm
        Ok((s * 1000.).round() / 1000.)
    }
}

impl DistanceMethod for Vincenty {
    fn distance(&self, from: &Location, to: &Location) -> Result<f64, Error> {
        let (lat1, lon1) = from.coordinates()?;
        let (lat2, lon2) = to.coordinates()?;
        self.inverse(lat1, lon1, lat2, lon2)
    }
}

pub fn new(ellps: &Ellipsoid) -> Result<Box<dyn DistanceMethod>, Error> {
    Ok(Box::new(Vincenty::new(*ellps)))
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn landmarks() -> Result<(), Error> {
        let vincenty = Vincenty::default();

        // Google HQ to San Francisco, the Eiffel Tower, and the Sydney Opera House
        let google = Location::new(37.422045, -122.084347);
        let sf = Location::new(37.77493, -122.419416);
        let eiffel = Location::new(48.8582, 2.294407);
        let opera = Location::new(-33.856553, 151.214696);

        assert_eq!(vincenty.distance(&google, &sf)?, 49087.066);
        assert_eq!(vincenty.distance(&google, &eiffel)?, 8989724.399);
        assert_eq!(vincenty.distance(&google, &opera)?, 11939773.640);
        Ok(())
    }

    #[test]
    fn symmetry_and_degeneracy() -> Result<(), Error> {
        let vincenty = Vincenty::default();
        let google = Location::new(37.422045, -122.084347);
        let opera = Location::new(-33.856553, 151.214696);
        let msu = Location::new(42.7186, -84.468466);

        let there = vincenty.distance(&google, &opera)?;
        let back = vincenty.distance(&opera, &google)?;
        assert_eq!(there, back);
        assert_eq!(vincenty.distance(&google, &google)?, 0.);
        assert_eq!(vincenty.distance(&msu, &msu)?, 0.);
        assert_eq!(vincenty.inverse(0., 0., 0., 0.)?, 0.);
        Ok(())
    }

    #[test]
    fn special_lines() -> Result<(), Error> {
        let vincenty = Vincenty::default();

        // Along the equator, the distance is simply a times the longitude difference
        assert_float_eq!(vincenty.inverse(0., 0., 0., 10.)?, 1113194.908, abs <= 1e-3);
        assert_float_eq!(vincenty.inverse(0., 0., 0., -10.)?, 1113194.908, abs <= 1e-3);

        // Along a meridian: from the equator to the pole, and from pole to pole
        assert_float_eq!(vincenty.inverse(0., 0., 90., 0.)?, 10001965.729, abs <= 1e-3);
        assert_float_eq!(vincenty.inverse(-90., 0., 90., 0.)?, 20003931.459, abs <= 1e-3);

        // Copenhagen to Paris
        assert_float_eq!(vincenty.inverse(55., 12., 49., 2.)?, 956066.232, abs <= 1e-3);
        Ok(())
    }

    #[test]
    fn antipodal() {
        let vincenty = Vincenty::default();
        let result = vincenty.inverse(0., 0., 0.5, 179.7);
        assert!(matches!(result, Err(Error::DistanceNotComputable(_))));
    }

    #[test]
    fn missing_coordinates() {
        let vincenty = Vincenty::default();
        let here = Location::new(55., 12.);
        let mut nowhere = Location::default();
        nowhere.set_latitude(12.);
        assert!(matches!(
            vincenty.distance(&here, &nowhere),
            Err(Error::MissingCoordinate("longitude"))
        ));
        assert!(matches!(
            vincenty.distance(&Location::default(), &here),
            Err(Error::MissingCoordinate("latitude"))
        ));
    }
}
