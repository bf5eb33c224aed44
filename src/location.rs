use crate::authoring::*;
use crate::math::angular::{dec_to_dms, Dms};
use crate::Cartesian;

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::{Arc, Mutex, PoisonError};

/// The two bounding values of a latitude or longitude range, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// A position on, above, or below the surface of an ellipsoid.
///
/// Besides its coordinates, each location carries its own registry of
/// named distance methods, initially `default` and `vincenty` (both
/// [Vincenty](crate::Bibliography::Vin75)) and `yee` (spherical
/// approximation). Methods are instantiated on first use, and the instance
/// is cached for the lifetime of the registration.
#[derive(Debug)]
pub struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
    height: f64,
    ellipsoid: Ellipsoid,
    methods: BTreeMap<String, MethodReference>,
    cache: Mutex<BTreeMap<String, Arc<dyn DistanceMethod>>>,
}

#[rustfmt::skip]
const DEFAULT_METHODS: [(&str, &str); 3] = [
    ("default",   "vincenty"),
    ("vincenty",  "vincenty"),
    ("yee",       "yee"),
];

/// A location with no coordinates, on the WGS84 ellipsoid
impl Default for Location {
    fn default() -> Location {
        let mut location = Location {
            latitude: None,
            longitude: None,
            height: 0.,
            ellipsoid: Ellipsoid::default(),
            methods: BTreeMap::new(),
            cache: Mutex::new(BTreeMap::new()),
        };
        for (name, id) in DEFAULT_METHODS {
            location.register_distance_method(name, id);
        }
        location
    }
}

/// Clones share nothing but coordinates, ellipsoid, and method registry:
/// the clone instantiates its own methods when needed
impl Clone for Location {
    fn clone(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            height: self.height,
            ellipsoid: self.ellipsoid,
            methods: self.methods.clone(),
            cache: Mutex::new(BTreeMap::new()),
        }
    }
}

/// Locations are identified by their coordinates
impl PartialEq for Location {
    fn eq(&self, other: &Location) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.height == other.height
            && self.ellipsoid == other.ellipsoid
    }
}

impl Location {
    /// A location at the given latitude and longitude, in degrees
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Location {
        let mut location = Location::default();
        location.set_latitude(latitude).set_longitude(longitude);
        location
    }

    /// Move the location to another ellipsoid. Cached distance methods
    /// are dropped, since they were built for the previous one.
    #[must_use]
    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Location {
        self.ellipsoid = ellipsoid;
        self.cache_mut().clear();
        self
    }

    // ----- Coordinates -----------------------------------------------------------

    pub fn set_latitude(&mut self, latitude: f64) -> &mut Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn set_longitude(&mut self, longitude: f64) -> &mut Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Set the height above the ellipsoid, in meters
    pub fn set_height(&mut self, height: f64) -> &mut Self {
        self.height = height;
        self
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Latitude and longitude, for use in distance computations. Fails if
    /// either is unset.
    pub fn coordinates(&self) -> Result<(f64, f64), Error> {
        let latitude = self.latitude.ok_or(Error::MissingCoordinate("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(Error::MissingCoordinate("longitude"))?;
        Ok((latitude, longitude))
    }

    // Unset coordinates propagate as NaN through the geometry below
    fn lat(&self) -> f64 {
        self.latitude.unwrap_or(f64::NAN)
    }

    fn lon(&self) -> f64 {
        self.longitude.unwrap_or(f64::NAN)
    }

    // ----- Degrees, minutes, seconds ---------------------------------------------

    /// The latitude as `"<deg> <min> <sec> <N|S>"`, e.g. `"42 43 6.960000 N"`
    pub fn dms_latitude(&self) -> Option<String> {
        self.dms_latitude_with(|dms, hemisphere| format!("{dms} {hemisphere}"))
    }

    /// The latitude in degrees, minutes and seconds, rendered by `format`,
    /// which is also handed the hemisphere, `N` or `S`
    pub fn dms_latitude_with<F>(&self, format: F) -> Option<String>
    where
        F: Fn(&Dms, char) -> String,
    {
        let dms = dec_to_dms(self.latitude?);
        let hemisphere = if dms.negative { 'S' } else { 'N' };
        Some(format(&dms, hemisphere))
    }

    /// The longitude as `"<deg> <min> <sec> <E|W>"`, e.g. `"-84 28 6.477600 W"`
    pub fn dms_longitude(&self) -> Option<String> {
        self.dms_longitude_with(|dms, hemisphere| format!("{dms} {hemisphere}"))
    }

    /// The longitude in degrees, minutes and seconds, rendered by `format`,
    /// which is also handed the hemisphere, `E` or `W`
    pub fn dms_longitude_with<F>(&self, format: F) -> Option<String>
    where
        F: Fn(&Dms, char) -> String,
    {
        let dms = dec_to_dms(self.longitude?);
        let hemisphere = if dms.negative { 'W' } else { 'E' };
        Some(format(&dms, hemisphere))
    }

    // ----- Geometry --------------------------------------------------------------

    /// Earth centered, earth fixed cartesian coordinates of the location
    pub fn cartesian(&self) -> Cartesian {
        self.ellipsoid.cartesian(self.lat(), self.lon(), self.height)
    }

    /// The range of latitudes within `distance` meters of the location.
    ///
    /// A quick estimate for selecting candidates in spatial queries, not an
    /// exact buffer. Ranges reaching beyond a pole are cut at the pole.
    pub fn latitude_range(&self, distance: f64) -> Range {
        let lat = self.lat().to_radians();
        let angle = distance / self.ellipsoid.radius_at_latitude(self.lat());

        let mut min = lat - angle;
        let mut max = lat + angle;

        // Wrapped around the south pole
        if min < -FRAC_PI_2 {
            let overshoot = -min - FRAC_PI_2;
            let reflected = -FRAC_PI_2 + overshoot;
            if reflected > max {
                max = reflected;
            }
            min = -FRAC_PI_2;
        }

        // Wrapped around the north pole
        if max > FRAC_PI_2 {
            let overshoot = max - FRAC_PI_2;
            let reflected = FRAC_PI_2 - overshoot;
            if reflected < min {
                min = reflected;
            }
            max = FRAC_PI_2;
        }

        Range {
            min: min.to_degrees(),
            max: max.to_degrees(),
        }
    }

    /// The range of longitudes within `distance` meters of the location.
    ///
    /// A quick estimate for selecting candidates in spatial queries. Ranges
    /// crossing the antimeridian are wrapped, so `min` may exceed `max`.
    /// Undefined (NaN) when the distance reaches around a pole.
    pub fn longitude_range(&self, distance: f64) -> Range {
        let lat = self.lat().to_radians();
        let lon = self.lon().to_radians();

        let angle = distance / self.ellipsoid.radius_at_latitude(self.lat());
        let diff = (angle.sin() / lat.cos()).asin();

        let mut min = lon - diff;
        if min < -PI {
            min += 2. * PI;
        }

        let mut max = lon + diff;
        if max > PI {
            max -= 2. * PI;
        }

        Range {
            min: min.to_degrees(),
            max: max.to_degrees(),
        }
    }

    // ----- Distance methods ------------------------------------------------------

    /// Register `reference` under `name`, replacing (and evicting the cached
    /// instance of) any earlier registration
    pub fn register_distance_method<R>(&mut self, name: &str, reference: R) -> &mut Self
    where
        R: Into<MethodReference>,
    {
        self.methods.insert(name.to_string(), reference.into());
        self.cache_mut().remove(name);
        self
    }

    /// Remove all registered distance methods, including the defaults
    pub fn remove_distance_methods(&mut self) -> &mut Self {
        self.methods.clear();
        self.cache_mut().clear();
        self
    }

    pub fn distance_methods(&self) -> &BTreeMap<String, MethodReference> {
        &self.methods
    }

    /// The distance in meters to `other`, computed by the distance method
    /// registered as `method`
    pub fn distance(&self, other: &Location, method: &str) -> Result<f64, Error> {
        self.method(method)?.distance(self, other)
    }

    /// The distance in meters to `other`, computed by the `default` method
    pub fn distance_default(&self, other: &Location) -> Result<f64, Error> {
        self.distance(other, "default")
    }

    // Look up, and if necessary instantiate, the method registered as `name`
    fn method(&self, name: &str) -> Result<Arc<dyn DistanceMethod>, Error> {
        let Some(reference) = self.methods.get(name) else {
            return Err(Error::UnregisteredMethod(name.to_string()));
        };

        // The cache holds only stateless methods, so a poisoned lock is harmless
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(method) = cache.get(name) {
            trace!("distance method {name}: cached");
            return Ok(method.clone());
        }

        debug!("distance method {name}: instantiating {reference}");
        let method: Arc<dyn DistanceMethod> =
            Arc::from(reference.instantiate(name, &self.ellipsoid)?);
        cache.insert(name.to_string(), method.clone());
        Ok(method)
    }

    fn cache_mut(&mut self) -> &mut BTreeMap<String, Arc<dyn DistanceMethod>> {
        self.cache.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

// ----- Tests ---------------------------------------------------------------------
