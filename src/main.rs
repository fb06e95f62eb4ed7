use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use nn_tour::constructive::{nearest_neighbor_with, Scan};
use nn_tour::distance::CostMatrix;
use nn_tour::evaluation::{legs, validate_tour, TourSummary};
use nn_tour::generate::random_nodes;
use nn_tour::io::{read_matrix, read_nodes, write_nodes};
use nn_tour::logging::{self, LogFormat, LogLevel, LogOptions};
use nn_tour::models::{LabelledMatrix, Tour};
use nn_tour::plot::{render_nodes, render_tour, save_png, RenderOptions};
use nn_tour::Result;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[command(flatten)]
    log: LogArgs,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log verbosity.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    /// Log line layout.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
    /// Prefix log lines with a millisecond timestamp.
    #[arg(long, global = true)]
    log_timestamp: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a nearest-neighbor tour over a coordinate file (`id x y` lines).
    Tour {
        file: PathBuf,
        /// Index of the first node.
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Write graph.png and solution.png into this directory.
        #[arg(long)]
        plot_dir: Option<PathBuf>,
        #[arg(long, default_value_t = 600)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Print a JSON summary instead of plain text.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Postman mode: tour a labelled JSON cost matrix (built-in cities if omitted).
    Route {
        file: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        json: bool,
    },
    /// Write random nodes in `id x y` form.
    Generate {
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinates are drawn from [0, extent).
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        /// Output file (stdout if omitted).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Scan candidates on the rayon thread pool.
    #[cfg(feature = "parallel")]
    #[arg(long)]
    parallel: bool,
}

impl ScanArgs {
    fn scan(&self) -> Scan {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return Scan::Parallel;
            }
        }
        Scan::Sequential
    }
}

impl From<LogArgs> for LogOptions {
    fn from(args: LogArgs) -> Self {
        Self {
            level: args.log_level,
            format: args.log_format,
            timestamp: args.log_timestamp,
            file: args.log_file,
        }
    }
}

fn main() -> Result<()> {
    let now = Instant::now();
    let cli = Cli::parse();
    logging::init_logger(&cli.log.into())?;

    match cli.command {
        Command::Tour {
            file,
            start,
            plot_dir,
            width,
            height,
            json,
            scan,
        } => {
            let options = RenderOptions {
                width,
                height,
                ..RenderOptions::default()
            };
            run_tour(&file, start, scan.scan(), plot_dir.as_deref(), &options, json)?;
        }
        Command::Route { file, start, json } => {
            let matrix = match file {
                Some(path) => read_matrix(path)?,
                None => LabelledMatrix::sample_cities(),
            };
            run_route(&matrix, start, json)?;
        }
        Command::Generate {
            count,
            seed,
            extent,
            output,
        } => {
            let nodes = random_nodes(count, extent, seed);
            match output {
                Some(path) => write_nodes(BufWriter::new(File::create(path)?), &nodes)?,
                None => write_nodes(io::stdout().lock(), &nodes)?,
            }
        }
    }

    info!("done in {:.3}s", now.elapsed().as_secs_f32());
    Ok(())
}

fn run_tour(
    file: &Path,
    start: usize,
    scan: Scan,
    plot_dir: Option<&Path>,
    options: &RenderOptions,
    json: bool,
) -> Result<()> {
    let nodes = read_nodes(file)?;
    if nodes.is_empty() {
        warn!("no nodes found in {}", file.display());
    }
    let costs = CostMatrix::from_nodes(&nodes);
    let tour = nearest_neighbor_with(&costs, start, scan)?;
    validate_tour(tour.order(), nodes.len())?;
    info!("tour: n={} cost={}", tour.len(), tour.cost());

    if let Some(dir) = plot_dir {
        fs::create_dir_all(dir)?;
        save_png(&render_nodes(&nodes, options), dir.join("graph.png"))?;
        save_png(&render_tour(&nodes, &tour, options)?, dir.join("solution.png"))?;
    }

    let mut out = io::stdout().lock();
    if json {
        let ids: Vec<String> = nodes.iter().map(|n| n.id().to_string()).collect();
        let summary = TourSummary::new(&costs, &tour).with_labels(&ids);
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Tour found: {:?}", tour.order())?;
        writeln!(out, "Total cost: {}", tour.cost())?;
    }
    Ok(())
}

fn run_route(matrix: &LabelledMatrix, start: usize, json: bool) -> Result<()> {
    let tour = nearest_neighbor_with(matrix.costs(), start, Scan::Sequential)?;
    let mut out = io::stdout().lock();

    if json {
        let summary = TourSummary::new(matrix.costs(), &tour).with_labels(matrix.labels());
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    write_route_report(&mut out, matrix, &tour)
}

fn write_route_report<W: Write>(out: &mut W, matrix: &LabelledMatrix, tour: &Tour) -> Result<()> {
    writeln!(out, "Nodes: {:?}", matrix.labels())?;
    writeln!(out, "Cost matrix:")?;
    for row in matrix.costs().rows() {
        writeln!(out, "{row:?}")?;
    }
    writeln!(out)?;
    writeln!(out, "Route:")?;
    for leg in legs(matrix.costs(), tour) {
        let from = matrix.label(leg.from).unwrap_or("?");
        let to = matrix.label(leg.to).unwrap_or("?");
        writeln!(out, "From {from} to {to}")?;
    }
    writeln!(out, "Total cost: {}", tour.cost())?;
    Ok(())
}
