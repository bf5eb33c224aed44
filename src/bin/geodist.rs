//! geodist: distances, ranges and conversions for points on the ellipsoid
use clap::{Parser, Subcommand};
use geodist::{meters_to_nautical_miles, Ellipsoid, Location};
use log::{debug, info};

/// GEODIST: Geodetic distances, bounding ranges and coordinate conversions.
/// Coordinates are given as latitude, longitude, in degrees.
#[derive(Parser, Debug)]
#[command(name = "geodist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The ellipsoid: WGS84, GRS80, intl, Helmert, clrk66, clrk80, bessel
    #[arg(long, default_value = "WGS84", global = true)]
    ellps: String,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Distance between two locations, in meters
    Distance {
        /// Distance method: default, vincenty, yee, spherical
        #[arg(short, long, default_value = "default")]
        method: String,

        /// Report the distance in nautical miles
        #[arg(long)]
        nm: bool,

        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// Latitude and longitude ranges around a location
    Range {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Distance (m) covered by the latitude range
        #[arg(long, default_value_t = 10_000.)]
        lat_distance: f64,

        /// Distance (m) covered by the longitude range
        #[arg(long, default_value_t = 10_000.)]
        lon_distance: f64,
    },

    /// Degrees, minutes and seconds
    Dms {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Earth centered, earth fixed cartesian coordinates
    Cartesian {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Height above the ellipsoid (m)
        #[arg(short = 'z', long, default_value_t = 0.)]
        height: f64,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let ellps = Ellipsoid::named(&options.ellps)?;
    let at = |lat: f64, lon: f64| Location::new(lat, lon).with_ellipsoid(ellps);

    match options.command {
        Commands::Distance {
            method,
            nm,
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let distance = at(lat1, lon1).distance(&at(lat2, lon2), &method)?;
            info!("{method}: {distance} m");
            if nm {
                println!("{}", meters_to_nautical_miles(distance));
            } else {
                println!("{distance:.3}");
            }
        }

        Commands::Range {
            lat,
            lon,
            lat_distance,
            lon_distance,
        } => {
            let location = at(lat, lon);
            let lats = location.latitude_range(lat_distance);
            let lons = location.longitude_range(lon_distance);
            println!("{:.6} {:.6}", lats.min, lats.max);
            println!("{:.6} {:.6}", lons.min, lons.max);
        }

        Commands::Dms { lat, lon } => {
            let location = at(lat, lon);
            println!("{}", location.dms_latitude().unwrap_or_default());
            println!("{}", location.dms_longitude().unwrap_or_default());
        }

        Commands::Cartesian { lat, lon, height } => {
            let mut location = at(lat, lon);
            location.set_height(height);
            let c = location.cartesian();
            println!("{:.4} {:.4} {:.4}", c.x, c.y, c.z);
        }
    }

    Ok(())
}
