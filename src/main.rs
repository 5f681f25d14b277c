use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use shoal::{landmass, LayoutReport, Scenario, ScenarioLoader};

#[derive(Debug, Parser)]
#[command(author, version, about = "Ocean layout yield calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute per-tile yields for an ocean layout
    Yields {
        /// Aggregate city tiles [0, CITY_RANGE); defaults to the
        /// scenario's own range
        city_range: Option<i64>,

        /// Scenario YAML file (uses the built-in ocean layout when omitted)
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Enumerate ocean splits for a total world tile budget
    Land {
        /// World size in tiles
        tiles: f64,
    },
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    match Cli::parse().command {
        Command::Yields {
            city_range,
            scenario,
            json,
        } => run_yields(city_range, scenario, json),
        Command::Land { tiles } => run_land(tiles),
    }
}

fn run_yields(city_range: Option<i64>, scenario_path: Option<PathBuf>, json: bool) -> Result<()> {
    let scenario = match scenario_path {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::ocean(),
    };
    let world = scenario.build_world();
    let city_range = city_range.unwrap_or(scenario.city_range);
    let report = LayoutReport::build(&world, &scenario.name, city_range)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

fn run_land(tiles: f64) -> Result<()> {
    let candidates = landmass::plans(tiles);
    if candidates.is_empty() {
        println!(
            "No ocean fits in {tiles} tiles (minimum ocean size is {})",
            landmass::MIN_OCEAN_SIZE
        );
        return Ok(());
    }
    for plan in candidates {
        println!(
            "{:2} oceans size {:4.1} take {:5.1} tiles and yield {:5.1} forest",
            plan.oceans, plan.size, plan.tiles, plan.forest
        );
    }
    Ok(())
}
