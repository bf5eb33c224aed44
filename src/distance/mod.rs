use crate::authoring::*;
use std::fmt;

// ----- B U I L T I N   M E T H O D S -------------------------------------------------

// Install new builtin methods by adding them in the `mod` and
// `BUILTIN_METHODS` blocks below

mod vincenty;
mod yee;

pub use vincenty::Vincenty;
pub use yee::Yee;

#[rustfmt::skip]
const BUILTIN_METHODS: [(&str, MethodConstructor); 3] = [
    ("vincenty",   MethodConstructor(vincenty::new)),
    ("yee",        MethodConstructor(yee::new)),
    ("spherical",  MethodConstructor(yee::new)),
];

/// Look up the constructor of a built-in distance method by name, as
/// defined in `BUILTIN_METHODS` above.
pub fn builtin(name: &str) -> Result<MethodConstructor, Error> {
    for (id, constructor) in BUILTIN_METHODS {
        if id == name {
            return Ok(constructor);
        }
    }
    Err(Error::NotFound(format!("distance method {name}")))
}

// ----- T H E   D I S T A N C E M E T H O D   T R A I T ------------------------------

/// The interface of a distance computation between two locations.
///
/// Implementations are expected to be stateless (apart from any ellipsoid
/// handed over at construction time): a [`Location`] instantiates each
/// named method at most once, and reuses the instance for every subsequent
/// call.
pub trait DistanceMethod: fmt::Debug + Send + Sync {
    /// The distance, in meters, from `from` to `to`.
    ///
    /// Both locations must have their latitude and longitude set.
    fn distance(&self, from: &Location, to: &Location) -> Result<f64, Error>;
}

// ----- C O N S T R U C T O R S   A N D   R E F E R E N C E S -------------------------

/// Blueprint for the instantiation of a distance method.
///
/// MethodConstructor needs to be a newtype, rather than a type alias,
/// since we must implement the Debug-trait for MethodConstructor (to
/// make auto derive of the Debug-trait work for any derived type).
#[derive(Clone, Copy)]
pub struct MethodConstructor(pub fn(ellps: &Ellipsoid) -> Result<Box<dyn DistanceMethod>, Error>);

// Cannot autoderive the Debug trait
impl fmt::Debug for MethodConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodConstructor")
    }
}

/// What a name in the distance method registry of a [`Location`] refers to.
#[derive(Clone, Debug)]
pub enum MethodReference {
    /// A built-in method, identified by its name in the builtin table.
    /// Resolved when the method is first used
    Named(String),
    /// A user supplied constructor
    Constructor(MethodConstructor),
}

impl MethodReference {
    /// Build an instance of the referenced method, working on `ellps`.
    /// `name` is the registry name, used for error reporting only.
    pub(crate) fn instantiate(
        &self,
        name: &str,
        ellps: &Ellipsoid,
    ) -> Result<Box<dyn DistanceMethod>, Error> {
        let constructor = match self {
            MethodReference::Named(id) => {
                builtin(id).map_err(|_| Error::UnresolvableImplementation {
                    name: name.to_string(),
                    reference: id.clone(),
                })?
            }
            MethodReference::Constructor(constructor) => *constructor,
        };
        (constructor.0)(ellps)
    }
}

impl fmt::Display for MethodReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodReference::Named(id) => write!(f, "{id}"),
            MethodReference::Constructor(_) => write!(f, "<user defined>"),
        }
    }
}

impl From<&str> for MethodReference {
    fn from(id: &str) -> Self {
        MethodReference::Named(id.to_string())
    }
}

impl From<String> for MethodReference {
    fn from(id: String) -> Self {
        MethodReference::Named(id)
    }
}

impl From<MethodConstructor> for MethodReference {
    fn from(constructor: MethodConstructor) -> Self {
        MethodReference::Constructor(constructor)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Constant(f64);

    impl DistanceMethod for Constant {
        fn distance(&self, _from: &Location, _to: &Location) -> Result<f64, Error> {
            Ok(self.0)
        }
    }

    fn semimajor(ellps: &Ellipsoid) -> Result<Box<dyn DistanceMethod>, Error> {
        Ok(Box::new(Constant(ellps.semimajor_axis())))
    }

    #[test]
    fn builtins() -> Result<(), Error> {
        let here = Location::new(55., 12.);
        let there = Location::new(49., 2.);
        let ellps = Ellipsoid::WGS84;

        for name in ["vincenty", "yee", "spherical"] {
            let method = (builtin(name)?.0)(&ellps)?;
            assert!(method.distance(&here, &there)? > 900_000.);
        }
        assert!(matches!(builtin("haversine"), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn references() -> Result<(), Error> {
        let here = Location::new(55., 12.);
        let ellps = Ellipsoid::new(1000., 0.);

        let named = MethodReference::from("yee");
        assert_eq!(named.to_string(), "yee");
        named.instantiate("mine", &ellps)?;

        let user = MethodReference::from(MethodConstructor(semimajor));
        assert_eq!(user.to_string(), "<user defined>");
        let method = user.instantiate("mine", &ellps)?;
        assert_eq!(method.distance(&here, &here)?, 1000.);

        let missing = MethodReference::from(String::from("DoesNotExist"));
        let err = missing.instantiate("bar", &ellps).unwrap_err();
        assert!(matches!(
            err,
            Error::UnresolvableImplementation { ref name, ref reference }
                if name == "bar" && reference == "DoesNotExist"
        ));
        Ok(())
    }
}
