/// The international nautical mile, in meters
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Convert a distance in meters to international nautical miles.
/// See [Wikipedia](https://en.wikipedia.org/wiki/Nautical_mile)
#[must_use]
pub fn meters_to_nautical_miles(meters: f64) -> f64 {
    meters / METERS_PER_NAUTICAL_MILE
}

/// Convert a distance in international nautical miles to meters
#[must_use]
pub fn nautical_miles_to_meters(nautical_miles: f64) -> f64 {
    nautical_miles * METERS_PER_NAUTICAL_MILE
}

// ----- Tests ---------------------------------------------------------------------
