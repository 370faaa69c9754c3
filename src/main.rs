//! Life Census - Entry Point
//!
//! Builds the initial grid from a seed file, a random fill or configured
//! placements, steps the engine for the configured number of generations
//! and writes the census report.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use life_census::catalogue::Catalogue;
use life_census::core::{CensusConfig, Result};
use life_census::grid::{load_seed_file, random_grid, CellGrid, Grid};
use life_census::output::{ReportWriter, RunOutput};
use life_census::simulation::GenerationEngine;

/// Bounded Game of Life with a per-generation life form census
#[derive(Parser, Debug)]
#[command(name = "life-census")]
#[command(about = "Run Conway's Game of Life and classify every live cluster each generation")]
struct Args {
    /// Side length N of the N×N grid
    #[arg(long)]
    size: Option<usize>,

    /// Number of generations to simulate
    #[arg(long)]
    generations: Option<u32>,

    /// TOML config file (CLI flags override its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed file with one `x,y` live cell per line
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Fill the grid randomly instead of starting empty
    #[arg(long)]
    random: bool,

    /// Seed for the random fill
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Comma-separated life forms to recognise
    #[arg(long, value_delimiter = ',')]
    forms: Option<Vec<String>>,

    /// Text report path
    #[arg(long, default_value = "report.txt")]
    report: PathBuf,

    /// Also write the full run as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print every frame to stdout
    #[arg(long)]
    show: bool,
}

fn resolve_config(args: &Args) -> Result<CensusConfig> {
    let mut config = match &args.config {
        Some(path) => CensusConfig::load(path)?,
        None => CensusConfig::default(),
    };

    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if let Some(seed) = args.rng_seed {
        config.seed = seed;
    }
    if let Some(forms) = &args.forms {
        config.forms = forms.clone();
    }

    config.validate()?;
    Ok(config)
}

fn initial_grid(args: &Args, config: &CensusConfig) -> Result<CellGrid> {
    let mut grid = if let Some(path) = &args.seed_file {
        load_seed_file(path, config.grid_size)?
    } else if args.random {
        random_grid(config.grid_size, config.alive_probability, config.seed)
    } else {
        Grid::square(config.grid_size)
    };

    for placement in &config.placements {
        let pattern = Catalogue::seed_pattern(&placement.form)?;
        grid.place(&pattern, placement.row, placement.col);
        tracing::info!("Placed {} at {}, {}", placement.form, placement.row, placement.col);
    }

    Ok(grid)
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("life_census=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let catalogue = Catalogue::select(config.forms.as_slice())?;
    let grid = initial_grid(&args, &config)?;

    tracing::info!(
        "Starting census: {}x{} grid, {} generations, {} live cells",
        config.grid_size,
        config.grid_size,
        config.generations,
        grid.population()
    );

    let start = Instant::now();
    let mut engine = GenerationEngine::new(grid, catalogue, config.generations)?
        .with_parallel_threshold(config.parallel_threshold);
    let mut writer = ReportWriter::new();
    let mut reports = Vec::with_capacity(config.generations as usize);

    if args.show {
        println!("Generation = 0\n{}", engine.grid());
    }
    while engine.remaining() > 0 {
        let report = engine.step()?;
        writer.push(&report);
        if args.show {
            println!("Generation = {}\n{}", report.generation + 1, engine.grid());
        }
        reports.push(report);
    }

    writer.write_to(&args.report)?;

    let population = engine.grid().population();
    let version = engine.catalogue().version;
    let output = RunOutput::new(
        version,
        config.grid_size,
        reports,
        engine.into_stats(),
        population,
        start.elapsed(),
    );

    if let Some(path) = &args.json {
        output.write_json(path)?;
        tracing::info!("Full output written to {}", path.display());
    }

    println!("{}", output.summary());
    if let Some(incidence) = output.incidence() {
        println!("\n--- Incidence ---");
        for form in &incidence.per_form {
            println!("{}: {:.2}%", form.name, form.percent);
        }
        println!("others: {:.2}%", incidence.others);
    }

    Ok(())
}
