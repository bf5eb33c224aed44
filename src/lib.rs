//! *Geodetic distances, bounding ranges and coordinate conversions
//! for points on a reference ellipsoid*.
//!
//! Locations and distances
//! =======================
//!
//! A [`Location`] is a latitude/longitude/height triplet on an
//! [`Ellipsoid`] (WGS84 by default). Distances between locations are
//! computed by named, swappable [distance methods](DistanceMethod):
//!
//! - `vincenty` (also registered as `default`): Vincenty's iterative
//!   solution of the inverse geodetic problem, rounded to the millimeter
//! - `yee`: a spherical law-of-cosines approximation, using the ellipsoid
//!   radius at the mean latitude of the two points
//!
//! ```rust
//! use geodist::Location;
//! fn main() -> anyhow::Result<()> {
//!     let google = Location::new(37.422045, -122.084347);
//!     let sf = Location::new(37.77493, -122.419416);
//!     assert_eq!(google.distance(&sf, "vincenty")?, 49087.066);
//!
//!     // A named ellipsoid, and the spherical approximation
//!     let sf = sf.with_ellipsoid(geodist::Ellipsoid::named("GRS80")?);
//!     println!("{} m", sf.distance(&google, "yee")?);
//!     Ok(())
//! }
//! ```
//!
//! User defined methods
//! --------------------
//!
//! Additional methods are registered per location, either by referring to
//! a built-in method by name, or by handing over a [`MethodConstructor`].
//! See the [`authoring`] module for the preamble needed when writing one.

mod distance;
mod ellipsoid;
mod location;
mod math;

pub use distance::builtin;
pub use distance::DistanceMethod;
pub use distance::MethodConstructor;
pub use distance::MethodReference;
pub use distance::Vincenty;
pub use distance::Yee;
pub use ellipsoid::Cartesian;
pub use ellipsoid::Ellipsoid;
pub use location::Location;
pub use location::Range;
pub use math::angular::dec_to_dms;
pub use math::angular::dms_to_dec;
pub use math::angular::Dms;
pub use math::units::meters_to_nautical_miles;
pub use math::units::nautical_miles_to_meters;
pub use math::units::METERS_PER_NAUTICAL_MILE;

use thiserror::Error;

/// Preamble for user defined distance methods
pub mod authoring {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::DistanceMethod;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Location;
    pub use crate::MethodConstructor;
    pub use crate::MethodReference;
}

/// The single error type for everything that can go wrong in `geodist`
#[derive(Error, Debug)]
pub enum Error {
    #[error("distance method not registered: {0}")]
    UnregisteredMethod(String),

    #[error("no implementation found for distance method {name} ({reference})")]
    UnresolvableImplementation { name: String, reference: String },

    #[error("distance not computable: {0}")]
    DistanceNotComputable(String),

    #[error("location has no {0}")]
    MissingCoordinate(&'static str),

    #[error("{0} not found")]
    NotFound(String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// Ka-Ping Yee: distance and range estimates on a sphere with the radius
    /// of the ellipsoid at the mean latitude. Used with permission, 2012.
    /// ([zesty.ca](http://zesty.ca/))
    Yee12,

    /// B.R. Bowring (1976): *Transformation from spatial to geographical coordinates*.
    /// Survey Review 23(181), pp. 323–327.
    Bow76,
}
