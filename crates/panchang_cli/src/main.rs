use std::error::Error;

use clap::{Parser, Subcommand};
use panchang_engine::{FixedEphemeris, GeoCoordinate, panchang_for_instant};
use panchang_time::CalendarInstant;
use panchang_vedic::{
    nakshatra_from_longitude, nakshatra_lord, rashi_from_longitude, rashi_lord, vaar_from_jd,
    vikram_samvat_year,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchang", about = "Vedic panchang derivation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Julian Date for a civil date/time
    Jd {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Civil time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Vaar (weekday) for a civil date/time
    Vaar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Civil time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Full panchang record as JSON, from externally computed longitudes
    Panchang {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Civil time (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Sun's ecliptic longitude in degrees
        #[arg(long)]
        sun_lon: f64,
        /// Moon's ecliptic longitude in degrees
        #[arg(long)]
        moon_lon: f64,
    },
}

/// Parse "YYYY-MM-DD" and "HH:MM" into a validated instant.
fn parse_instant(date: &str, time: &str) -> Result<CalendarInstant, Box<dyn Error>> {
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts
        .next()
        .ok_or("date must be YYYY-MM-DD")?
        .parse()?;
    let month: u32 = parts
        .next()
        .ok_or("date must be YYYY-MM-DD")?
        .parse()?;
    let day: u32 = parts
        .next()
        .ok_or("date must be YYYY-MM-DD")?
        .parse()?;

    let mut parts = time.splitn(2, ':');
    let hour: u32 = parts.next().ok_or("time must be HH:MM")?.parse()?;
    let minute: u32 = parts.next().ok_or("time must be HH:MM")?.parse()?;

    Ok(CalendarInstant::new(year, month, day, hour, minute)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - lord {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.gujarati_name(),
                rashi_lord(info.rashi).name(),
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} ({}) - Pada {} - lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra.gujarati_name(),
                info.pada,
                nakshatra_lord(info.nakshatra).name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Jd { date, time } => {
            let instant = parse_instant(&date, &time)?;
            println!("{:.6}", instant.to_jd());
        }

        Commands::Vaar { date, time } => {
            let instant = parse_instant(&date, &time)?;
            let vaar = vaar_from_jd(instant.to_jd());
            println!(
                "{} ({}, {}) - Vikram Samvat {}",
                vaar.name(),
                vaar.gujarati_name(),
                vaar.english_name(),
                vikram_samvat_year(instant.year())
            );
        }

        Commands::Panchang {
            date,
            time,
            lat,
            lon,
            sun_lon,
            moon_lon,
        } => {
            let instant = parse_instant(&date, &time)?;
            let location = GeoCoordinate::new(lat, lon)?;
            let ephemeris = FixedEphemeris {
                sun_lon_deg: sun_lon,
                moon_lon_deg: moon_lon,
            };
            debug!(%instant, jd = instant.to_jd(), "deriving panchang record");
            let record = panchang_for_instant(&ephemeris, &instant, &location)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
