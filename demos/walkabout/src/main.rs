//! walkabout: headless front end for the arnav engine.
//!
//! Loads points of interest (a JSON or CSV file, or a seeded sample around
//! the start position), replays a key script such as `"RRFFFL"` one intent
//! per tick, and prints what an overlay would show: the status line, the
//! heading and position readouts, visible markers, and the nearby list.
//!
//! ```text
//! walkabout --script "RRFF" --ticks 20 --out output/walkabout
//! RUST_LOG=debug walkabout --points pois.json --realtime
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use arnav_core::{SimConfig, Tick};
use arnav_nav::{NavIntent, NavigationState};
use arnav_output::{
    CsvFrameWriter, FrameOutputObserver, format_heading, format_marker, format_nearby,
    format_position,
};
use arnav_poi::{CsvPoiSource, JsonPoiSource, PoiRecord, PointOfInterest, sample_points};
use arnav_projection::Viewport;
use arnav_sim::{FixedTicks, Frame, Realtime, Scheduler, Sim, SimBuilder, SimObserver, TickDecision};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Point list to load (`.csv` is read as CSV, anything else as JSON).
    #[arg(short, long)]
    points: Option<PathBuf>,

    /// JSON file with `SimConfig` fields; missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Intents to replay, one per tick: L/R rotate, F moves forward.
    #[arg(short, long, default_value = "")]
    script: String,

    /// Override `total_ticks`.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the seed used for sample points.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sample points generated when `--points` is absent.
    #[arg(long, default_value_t = 8)]
    sample: usize,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Directory for `points.csv` and `ticks.csv`.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pace ticks at `tick_interval_ms` on the wall clock.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Write the session's point list as JSON to this path.
    #[arg(long)]
    export_points: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints the readouts after each intent and forwards frames to the CSV
/// writer when one is configured.
struct ConsoleObserver {
    csv:    Option<FrameOutputObserver<CsvFrameWriter>>,
    frames: usize,
}

impl SimObserver for ConsoleObserver {
    fn on_intent(&mut self, tick: Tick, intent: NavIntent, state: &NavigationState) {
        println!(
            "{:>5}  {intent:<13} {}  {}",
            tick.to_string(),
            format_heading(state.heading_deg),
            format_position(state.position),
        );
    }

    fn on_frame(&mut self, frame: &Frame, pois: &[PointOfInterest]) {
        self.frames += 1;
        if let Some(csv) = self.csv.as_mut() {
            csv.on_frame(frame, pois);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_sim_end(final_tick);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_json_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn build_sim(args: &Args, config: SimConfig) -> Result<Sim> {
    let builder = SimBuilder::new(config.clone()).viewport(Viewport::new(args.width, args.height));
    let builder = match &args.points {
        Some(path) if has_extension(path, "csv") => builder.source(CsvPoiSource::from_path(path)),
        Some(path) => builder.source(JsonPoiSource::from_path(path)),
        None => builder.points(sample_points(config.start_position, args.sample, config.seed)),
    };
    Ok(builder.build()?)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn export_points(path: &Path, points: &[PointOfInterest]) -> Result<()> {
    let records: Vec<PoiRecord> = points.iter().map(PoiRecord::from).collect();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;
    Ok(())
}

fn print_frame(sim: &Sim, frame: &Frame) {
    println!("{}", format_heading(frame.state.heading_deg));
    println!("{}", format_position(frame.state.position));
    println!();

    println!("{:<24} {:>9} {:>9} {:>6}", "Marker", "x", "y", "scale");
    println!("{}", "-".repeat(51));
    for p in frame.visible() {
        let poi = &sim.points[p.poi.index()];
        println!(
            "{:<24} {:>9.1} {:>9.1} {:>6.2}",
            format_marker(poi, p.distance_m),
            p.screen_x,
            p.screen_y,
            p.scale,
        );
    }
    println!();

    println!("Nearby:");
    for line in format_nearby(&frame.nearby_entries(&sim.points)) {
        println!("  {line}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let script = NavIntent::parse_script(&args.script)?;
    let mut sim = build_sim(&args, config)?;

    println!("=== walkabout — arnav ===");
    println!("{}", sim.status);
    println!(
        "Ticks: {}  |  Interval: {} ms  |  Script: {} intents",
        sim.config.total_ticks,
        sim.config.tick_interval_ms,
        script.len(),
    );
    println!();

    if let Some(path) = &args.export_points {
        export_points(path, &sim.points)?;
        log::info!("exported {} points to {}", sim.points.len(), path.display());
    }

    let csv = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(FrameOutputObserver::new(CsvFrameWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = ConsoleObserver { csv, frames: 0 };

    let end = sim.config.end_tick();
    let mut scheduler: Box<dyn Scheduler> = if args.realtime {
        Box::new(Realtime::until(end))
    } else {
        Box::new(FixedTicks::until(end))
    };

    // One scripted intent per tick; ticks past the end of the script only
    // refresh the projection.
    let t0 = Instant::now();
    let mut intents = script.into_iter();
    while scheduler.next_tick(&sim.clock) == TickDecision::Run {
        if let Some(intent) = intents.next() {
            sim.push_intent(intent);
        }
        sim.run_ticks(1, &mut obs);
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    let leftover = intents.count();
    if leftover > 0 {
        log::warn!("script longer than the run: {leftover} intents not applied");
    }
    if let Some(e) = obs.csv.as_mut().and_then(|c| c.take_error()) {
        eprintln!("output error: {e}");
    }

    println!();
    println!("{} frames in {:.3} s (clock {})", obs.frames, elapsed.as_secs_f64(), sim.clock);
    println!();
    print_frame(&sim, &sim.frame());

    Ok(())
}
