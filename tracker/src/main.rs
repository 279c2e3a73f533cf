//! tracker — command-line sleigh tracker.
//!
//! Usage:
//!   tracker live --lat 47.6 --lon=-122.3 --message
//!   tracker live --at 2025-12-24T20:30:00 --once --json
//!   tracker replay --year 2025 --step-mins 15 --out ./trace

mod render;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};

use sleigh_core::{GeoPoint, JourneyWindow};
use sleigh_message::{MessageContext, OllamaClient, message_or_fallback};
use sleigh_output::{CsvTraceWriter, TraceRow, TraceWriter};
use sleigh_sim::snapshot_at;

#[derive(Parser, Debug)]
#[command(name = "tracker", about = "Track the sleigh from your location", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow the journey on the wall clock, one snapshot per interval.
    Live(LiveArgs),
    /// Fast-forward a whole night into a trace directory, no waiting.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct LiveArgs {
    /// Viewer latitude in degrees (requires --lon)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Viewer longitude in degrees (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Seconds between snapshots
    #[arg(long, env = "TRACKER_INTERVAL_SECS", default_value_t = 1)]
    interval_secs: u64,

    /// Compute snapshots for this fixed instant instead of the wall clock
    #[arg(long, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,

    /// Print one snapshot and exit
    #[arg(long)]
    once: bool,

    /// Emit each snapshot as a JSON line instead of the text block
    #[arg(long)]
    json: bool,

    /// Fetch one Santa message after the first snapshot
    #[arg(long)]
    message: bool,

    /// Ollama endpoint for --message
    #[arg(long, env = "OLLAMA_URL", default_value = sleigh_message::DEFAULT_BASE_URL)]
    ollama_url: String,

    /// Ollama model for --message
    #[arg(long, env = "OLLAMA_MODEL", default_value = sleigh_message::DEFAULT_MODEL)]
    model: String,

    /// Append journey_trace.csv rows under this directory
    #[arg(long)]
    trace_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Calendar year of the night to replay
    #[arg(long)]
    year: i32,

    /// Minutes between replayed snapshots
    #[arg(long, default_value_t = 15)]
    step_mins: i64,

    /// Directory for journey_trace.csv
    #[arg(long, default_value = "./trace")]
    out: PathBuf,

    /// Viewer latitude in degrees (requires --lon)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Viewer longitude in degrees (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Live(args) => live(args),
        Command::Replay(args) => replay(args),
    }
}

fn live(args: LiveArgs) -> Result<()> {
    let viewer = viewer_from(args.lat, args.lon)?;

    let mut trace = match &args.trace_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create trace directory {}", dir.display()))?;
            Some(CsvTraceWriter::new(dir)?)
        }
        None => None,
    };

    let mut first = true;
    loop {
        let now = args.at.unwrap_or_else(|| Local::now().naive_local());
        let snapshot = snapshot_at(now, viewer);

        if args.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            render::print_snapshot(now, viewer, &snapshot);
        }

        if let Some(writer) = trace.as_mut() {
            writer.write_row(&TraceRow::from_snapshot(now, &snapshot))?;
        }

        if first && args.message {
            let client = OllamaClient::new(args.ollama_url.clone(), args.model.clone());
            let ctx = MessageContext::from_snapshot(&snapshot);
            println!();
            println!("🎅 {}", message_or_fallback(&client, &ctx));
            println!();
        }
        first = false;

        if args.once {
            break;
        }
        thread::sleep(Duration::from_secs(args.interval_secs.max(1)));
    }

    if let Some(mut writer) = trace {
        writer.finish()?;
    }
    Ok(())
}

fn replay(args: ReplayArgs) -> Result<()> {
    if args.step_mins <= 0 {
        bail!("--step-mins must be positive");
    }
    let viewer = viewer_from(args.lat, args.lon)?;
    let window = JourneyWindow::for_year(args.year);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create trace directory {}", args.out.display()))?;
    let mut writer = CsvTraceWriter::new(&args.out)?;

    let step = chrono::Duration::minutes(args.step_mins);
    let mut t = window.departure;
    let mut rows = 0u64;
    while t <= window.return_home {
        let snapshot = snapshot_at(t, viewer);
        writer.write_row(&TraceRow::from_snapshot(t, &snapshot))?;
        rows += 1;
        t += step;
    }
    writer.finish()?;

    log::info!("replayed {rows} snapshots for {}", args.year);
    println!(
        "wrote {rows} snapshots to {}",
        args.out.join("journey_trace.csv").display()
    );
    Ok(())
}

/// Resolve and validate the optional viewer coordinate.
///
/// The simulator itself tolerates any finite values; range checking is the
/// caller's job, and this is the caller.
fn viewer_from(lat: Option<f64>, lon: Option<f64>) -> Result<Option<GeoPoint>> {
    match (lat, lon) {
        (None, None) => Ok(None),
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                bail!("latitude {lat} out of range [-90, 90]");
            }
            if !(-180.0..=180.0).contains(&lon) {
                bail!("longitude {lon} out of range [-180, 180]");
            }
            Ok(Some(GeoPoint::new(lat, lon)))
        }
        _ => bail!("--lat and --lon must be given together"),
    }
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| format!("expected e.g. 2025-12-24T18:30:00: {e}"))
}
