//! `geocode-lookup` - look up an address and print the raw and flattened
//! results as JSON.
//!
//! ```text
//! geocode-lookup 'Dortmunder Straße 2, Berlin' 'country:DE|postal_code:10555'
//! ```

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use geocode_core::{FlattenOptions, GeocodeClient, GeocodeRequest, DEFAULT_ENDPOINT};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Geocode an address and print the results")]
struct Args {
    /// Free-form address, e.g. "Dortmunder Straße 2, Berlin, Germany"
    address: String,

    /// Component filter, e.g. "country:DE|postal_code:10555"
    components: Option<String>,

    /// Response language
    #[arg(long, default_value = "EN")]
    language: String,

    /// Region bias (ccTLD code)
    #[arg(long)]
    region: Option<String>,

    /// API key
    #[arg(long, env = "GEOCODE_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Geocoding endpoint
    #[arg(long, env = "GEOCODE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Keep results the service marks as partial matches
    #[arg(long)]
    include_partial: bool,

    /// Drop flattened results without a street number or premise
    #[arg(long)]
    require_street_number: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut request = GeocodeRequest::address(args.address).with_language(args.language);
    request.components = args.components;
    request.region = args.region;
    request.api_key = args.key;

    let client = GeocodeClient::new(&args.endpoint);
    info!(endpoint = client.endpoint(), "looking up address");
    let response = client.lookup(&request)?;

    println!("Result from geocoder:");
    print_json(&response)?;

    let flattened = response.flatten(FlattenOptions {
        include_partial_matches: args.include_partial,
        require_street_number: args.require_street_number,
    });
    println!("Parsed result from geocoder:");
    print_json(&flattened)?;

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("geocode_core=info,geocode_lookup=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(e.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn print_error(e: &dyn Error) {
    eprintln!("Error: {e}");
    let mut e = e;
    while let Some(cause) = e.source() {
        eprintln!("Because: {cause}");
        e = cause;
    }
}
