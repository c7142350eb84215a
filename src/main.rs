use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tripcluster::{
    cluster_runs,
    config::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED, DEFAULT_TARGET_CAPACITY},
    csv_io::{read_runs_from_path, write_rows_to_path, CLUSTERED_RUN_HEADERS, SUMMARY_HEADERS},
    ClusterConfig, RunManifest,
};

/// Cluster student runs with k-means per (day, time window, university) group
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "data/generated/student_runs.csv")]
    in_csv: PathBuf,

    #[arg(long, default_value = "data/generated/student_clusters.csv")]
    out_clusters_csv: PathBuf,

    #[arg(long, default_value = "data/generated/cluster_summary.csv")]
    out_summary_csv: PathBuf,

    /// Approximate vehicle capacity used to decide K
    #[arg(long, default_value_t = DEFAULT_TARGET_CAPACITY)]
    target_capacity: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iter: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Also write a JSON run manifest with output checksums
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start_time = Instant::now();
    let config = ClusterConfig::new()
        .with_target_capacity(cli.target_capacity)
        .with_max_iterations(cli.max_iter)
        .with_seed(cli.seed);

    let runs = read_runs_from_path(&cli.in_csv)
        .context(format!("Failed to read runs: {}", cli.in_csv.display()))?;
    tracing::info!(rows = runs.len(), path = %cli.in_csv.display(), "loaded runs");

    let output = cluster_runs(&runs, &config, &cli.in_csv.display().to_string())?;

    let clusters_bytes = write_rows_to_path(&cli.out_clusters_csv, &CLUSTERED_RUN_HEADERS, &output.runs)
        .context(format!("Failed to write clusters: {}", cli.out_clusters_csv.display()))?;
    let summary_bytes = write_rows_to_path(&cli.out_summary_csv, &SUMMARY_HEADERS, &output.summaries)
        .context(format!("Failed to write summary: {}", cli.out_summary_csv.display()))?;

    if let Some(manifest_path) = &cli.manifest {
        let mut manifest = RunManifest::new(&cli.in_csv, config, output.stats);
        manifest.add_output(&cli.out_clusters_csv, &clusters_bytes);
        manifest.add_output(&cli.out_summary_csv, &summary_bytes);
        manifest
            .write_to_file(manifest_path)
            .context(format!("Failed to write manifest: {}", manifest_path.display()))?;
        tracing::info!(path = %manifest_path.display(), "wrote run manifest");
    }

    println!("✓ Groups processed: {}", output.stats.groups);
    println!("✓ Total clusters created: {}", output.stats.clusters);
    println!(
        "✓ Clustered rows: {} -> {}",
        output.runs.len(),
        cli.out_clusters_csv.display()
    );
    println!(
        "✓ Cluster summary: {} -> {}",
        output.summaries.len(),
        cli.out_summary_csv.display()
    );
    if output.stats.unconverged_groups > 0 {
        println!(
            "  {} group(s) stopped at max_iter without converging",
            output.stats.unconverged_groups
        );
    }
    println!(
        "Params: target_capacity={}, max_iter={}, seed={}",
        config.target_capacity, config.max_iterations, config.seed
    );
    println!("Total execution: {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
