//! `eco-routify` - pick the lowest-emission delivery destination.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ecoroutify::{
    optimize_routes, optimize_with_source, read_config, ConfigError, EmissionRate, OptimalRoute,
    PinnedDataSource, RandomDataSource, RouteConfig, ScorerKind, TrafficLevel,
};
use tracing::{error, info};

/// Emission-aware delivery route selection.
#[derive(Debug, Parser)]
#[command(name = "eco-routify", version, about)]
struct Cli {
    /// Configuration file (TOML, or YAML with a .yaml/.yml extension).
    /// Defaults to ./eco-routify.toml when present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for reproducible condition sampling.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Force the traffic level instead of sampling it.
    #[arg(long, value_name = "LEVEL")]
    traffic: Option<TrafficLevel>,

    /// Force the emission rate (kg CO2/km) instead of sampling it.
    #[arg(long, value_name = "RATE", value_parser = parse_emission)]
    emission: Option<EmissionRate>,

    /// Scoring strategy: position or distance.
    #[arg(long, value_name = "KIND")]
    scorer: Option<ScorerKind>,

    /// Suppress the banner and log output.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_emission(s: &str) -> Result<EmissionRate, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    EmissionRate::new(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Loads the configuration, applies command-line overrides and validates
    /// the result.
    fn resolve_config(&self) -> Result<RouteConfig, ConfigError> {
        let mut config = read_config(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(scorer) = self.scorer {
            config = config.with_scorer(scorer);
        }
        config.validate()?;
        Ok(config)
    }

    fn run(&self, config: &RouteConfig) -> ecoroutify::Result<OptimalRoute> {
        if self.traffic.is_none() && self.emission.is_none() {
            return optimize_routes(config);
        }

        let mut source = PinnedDataSource::new(RandomDataSource::from_config(config));
        if let Some(traffic) = self.traffic {
            source = source.with_traffic(traffic);
        }
        if let Some(emission) = self.emission {
            source = source.with_emission_rate(emission);
        }
        optimize_with_source(config, Box::new(source))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        ecoroutify::console::init();
    }

    info!("Eco-Routify Optimization Started");

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.run(&config) {
        Ok(route) => println!("Optimal route chosen: {}", route.destination),
        Err(e) => {
            error!(error = %e, "Error optimizing routes");
            println!("Failed to determine the optimal route.");
        }
    }
    ExitCode::SUCCESS
}
