// src/main.rs

use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;
use std::error::Error;
use std::io;
use std::path::Path;

use plant_growth_plots::data_input::measurement_set::MeasurementSet;
use plant_growth_plots::data_input::validation::validate;
use plant_growth_plots::report::run_report;

fn build_cli() -> Command {
    Command::new("plant-growth-plots")
        .version(plant_growth_plots::crate_version())
        .about("Generate plant growth plots")
        .args_override_self(true)
        .arg(
            Arg::new("plant")
                .long("plant")
                .help("Name of the plant")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("List of height values (cm)")
                .required(true)
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("leaf_count")
                .long("leaf_count")
                .help("List of leaf count values")
                .required(true)
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("dry_weight")
                .long("dry_weight")
                .help("List of dry weight values (g)")
                .required(true)
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
}

fn values_of<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Vec<T> {
    matches
        .get_many::<T>(id)
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}

fn measurements_from_matches(matches: &ArgMatches) -> MeasurementSet {
    MeasurementSet::new(
        matches.get_one::<String>("plant").cloned().unwrap_or_default(),
        values_of::<f64>(matches, "height"),
        values_of::<i64>(matches, "leaf_count"),
        values_of::<f64>(matches, "dry_weight"),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("PLANT_GROWTH_LOG", "error"))
        .init();

    let matches = build_cli().get_matches();
    let candidate = measurements_from_matches(&matches);
    log::debug!(
        "Parsed {} heights, {} leaf counts, {} dry weights",
        candidate.heights.len(),
        candidate.leaf_counts.len(),
        candidate.dry_weights.len()
    );

    let measurements = match validate(candidate) {
        Ok(measurements) => measurements,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(error.exit_code());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_report(&measurements, Path::new("."), &mut out)?;
    Ok(())
}
