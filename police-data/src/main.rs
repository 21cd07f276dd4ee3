use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use police_data::domain::{Coordinate, MonthPeriod, ValidationError};
use police_data::police::PoliceDataService;
use police_data::report;
use police_data::stats::label_stats;
use police_data::transport::{HttpTransport, TransportConfig};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "police_data=info";

#[derive(Debug, Parser)]
#[command(
    name = "police-data",
    about = "Query UK police open data (data.police.uk)",
    version
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "POLICE_API_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "POLICE_API_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Print records as JSON instead of text panels
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all police forces
    Forces,
    /// Show details for one force
    Force { id: String },
    /// Street-level crimes near a location
    Crimes(LocationArgs),
    /// List crime categories
    Categories {
        /// Month (YYYY-MM); latest when omitted
        #[arg(long)]
        month: Option<String>,
    },
    /// Neighbourhood teams of a force
    Neighbourhoods { force: String },
    /// Stop-and-searches near a location
    Stops(LocationArgs),
    /// Crime counts by category near a location
    Stats(LocationArgs),
}

#[derive(Debug, Args)]
struct LocationArgs {
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    lng: f64,

    /// Month (YYYY-MM); latest when omitted
    #[arg(long)]
    month: Option<String>,
}

impl LocationArgs {
    /// Blank `--month` means the latest month.
    fn validate(&self) -> Result<(Coordinate, Option<MonthPeriod>), ValidationError> {
        let coord = Coordinate::new(self.lat, self.lng)?;
        let month = match self.month.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(MonthPeriod::parse(s)?),
        };
        Ok((coord, month))
    }
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("police-data: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TransportConfig::new();
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }

    let service = PoliceDataService::new(HttpTransport::new(config)?);
    let json = cli.json;

    match cli.command {
        Command::Forces => {
            let forces = service.list_forces().await?;
            emit(json, &forces, || report::forces(&forces))?;
        }
        Command::Force { id } => {
            let force = service.force_detail(&id).await?;
            emit(json, &force, || report::force_detail(&force))?;
        }
        Command::Crimes(args) => {
            let (coord, month) = args.validate()?;
            let crimes = service.crimes_at(&coord, month.as_ref()).await?;
            emit(json, &crimes, || report::crimes(&coord, &crimes))?;
        }
        Command::Categories { month } => {
            let categories = service.crime_categories(month.as_deref()).await?;
            emit(json, &categories, || report::categories(&categories))?;
        }
        Command::Neighbourhoods { force } => {
            let hoods = service.neighbourhoods(&force).await?;
            emit(json, &hoods, || report::neighbourhoods(&force, &hoods))?;
        }
        Command::Stops(args) => {
            let (coord, month) = args.validate()?;
            let stops = service.stop_searches_at(&coord, month.as_ref()).await?;
            emit(json, &stops, || report::stop_searches(&coord, &stops))?;
        }
        Command::Stats(args) => {
            let (coord, month) = args.validate()?;
            let stats = service.crime_statistics_at(&coord, month.as_ref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                // Slugs are shown when the category lookup fails
                let month = month.map(|m| m.to_string());
                let categories = match service.crime_categories(month.as_deref()).await {
                    Ok(categories) => categories,
                    Err(e) => {
                        tracing::warn!(error = %e, "showing category slugs");
                        Vec::new()
                    }
                };
                let rows = label_stats(&stats, &categories);
                print!("{}", report::statistics(&coord, &rows));
            }
        }
    }

    Ok(())
}

fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
