// Score every Texas hex cell and write CSV, GeoJSON and console rankings.
//
// Usage: cargo run --release --bin score_region -- --out-dir outputs --top 20

use anyhow::{Context, Result};
use clap::Parser;
use dc_site_scorer::{
    Calibration, CombinedWeights, ConsoleReporter, CsvExporter, GeoJsonExporter, RegionScorer,
    ScoreExporter,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "score_region")]
#[command(about = "Score Texas hex cells for data center suitability")]
struct Args {
    /// Directory for texas_hex_scores.csv and texas_dc_scores.geojson
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Rows per console ranking
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// JSON calibration overrides
    #[arg(long)]
    calibration: Option<PathBuf>,

    /// Weight of the stranded composite in the combined score (cooling gets the rest)
    #[arg(long)]
    w_stranded: Option<f64>,

    #[arg(long)]
    no_csv: bool,

    #[arg(long)]
    no_geojson: bool,
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dc_site_scorer=info,score_region=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let total_start = Instant::now();

    let mut calibration = match &args.calibration {
        Some(path) => {
            tracing::info!("Loading calibration from {}", path.display());
            Calibration::load(path)?
        }
        None => Calibration::default(),
    };
    if let Some(w) = args.w_stranded {
        calibration.combined = CombinedWeights::from_stranded(w);
    }

    let scorer = RegionScorer::texas(calibration)?;
    let scores = scorer.score_region();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory: {}", args.out_dir.display()))?;

    let tiler = scorer.tiler();
    let mut exporters: Vec<Box<dyn ScoreExporter>> = Vec::new();
    if !args.no_csv {
        exporters.push(Box::new(CsvExporter::new(args.out_dir.join("texas_hex_scores.csv"))));
    }
    if !args.no_geojson {
        exporters.push(Box::new(GeoJsonExporter::new(
            args.out_dir.join("texas_dc_scores.geojson"),
            tiler.size_lat,
            tiler.size_lon,
        )));
    }
    exporters.push(Box::new(ConsoleReporter::new(args.top, "TEXAS")));

    for exporter in &exporters {
        exporter.export(&scores)?;
    }

    tracing::info!(
        "Done: {} cells scored in {:?}, outputs in {}",
        scores.len(),
        total_start.elapsed(),
        args.out_dir.display()
    );
    Ok(())
}
