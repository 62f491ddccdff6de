use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use steiner_graph::config::Config;
use steiner_graph::graph::{Graph, GridGraph};
use steiner_graph::services::algorithm::{SteinerTree, SteinerTreeSolver};
use steiner_graph::utils::{logging, render_grid, render_tree};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphDB Contributors")]
struct Cli {
    /// TOML config file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[clap(long, global = true)]
    json: bool,

    /// Override the configured log level
    #[clap(long, global = true)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve on a generated size x size grid
    Grid {
        #[clap(short, long, default_value_t = 5)]
        size: usize,
        /// Terminal label, repeatable; defaults to the four corners and the center
        #[clap(short, long = "terminal")]
        terminals: Vec<String>,
        /// Sample this many random terminals instead
        #[clap(long, conflicts_with = "terminals")]
        random: Option<usize>,
        #[clap(long, default_value_t = 42)]
        seed: u64,
        /// Draw the grid and the resulting tree
        #[clap(long)]
        render: bool,
    },
    /// Solve on an edge list file (`from to [name]` per line)
    File {
        path: PathBuf,
        #[clap(short, long = "terminal", required = true)]
        terminals: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    logging::init(&config.log)?;

    let result = run(&cli, &config);
    logging::shutdown();
    result
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Command::Grid {
            size,
            terminals,
            random,
            seed,
            render,
        } => {
            let grid = GridGraph::new(*size)?;
            let terminals = match random {
                Some(count) => grid.random_terminals(*count, *seed)?,
                None if terminals.is_empty() => {
                    let mut defaults = grid.corners();
                    defaults.push(grid.center());
                    defaults
                }
                None => terminals.clone(),
            };

            if *render && !cli.json {
                println!("Grid Structure (O=terminal, +=non-terminal):");
                print!("{}", render_grid(&grid, &terminals));
                println!();
            }

            let tree = SteinerTreeSolver::new(grid.graph(), config.solver.clone())
                .solve(&terminals)?;
            print_result(grid.graph(), &tree, cli.json)?;

            if *render && !cli.json {
                println!();
                println!("Steiner Tree (O=terminal, S=steiner point, .=unused):");
                print!("{}", render_tree(&grid, &tree));
            }
        }
        Command::File { path, terminals } => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read edge list {}", path.display()))?;
            let graph: Graph = content.parse()?;
            let tree = SteinerTreeSolver::new(&graph, config.solver.clone()).solve(terminals)?;
            print_result(&graph, &tree, cli.json)?;
        }
    }
    Ok(())
}

fn print_result(graph: &Graph, tree: &SteinerTree, json: bool) -> Result<()> {
    let report = tree.report(graph);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
    println!("Terminals: {}", report.terminals.join(", "));
    if !report.dropped_terminals.is_empty() {
        println!("Ignored terminals: {}", report.dropped_terminals.join(", "));
    }
    println!(
        "Tree: {} vertices ({} Steiner), {} edges",
        report.vertices.len(),
        report.steiner_vertices.len(),
        report.edges.len()
    );
    println!("Steiner vertices: {}", report.steiner_vertices.join(", "));
    println!("Edges: {}", report.edges.join(", "));
    println!(
        "Stats: {} closure pairs, {} MST paths, {} pruned in {} passes, {:.2} ms{}",
        report.stats.closure_pairs,
        report.stats.mst_paths,
        report.stats.removed_vertices,
        report.stats.prune_passes,
        report.stats.elapsed_ms,
        if report.stats.parallel { " (parallel)" } else { "" }
    );
    Ok(())
}
