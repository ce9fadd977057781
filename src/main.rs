use gravsim::{Engine, Scenario, ScenarioConfig};
use gravsim::run_3d;
use gravsim::{bench_gravity, bench_update};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive N-body gravity simulator")]
struct Args {
    /// Scenario file: a path, or a name under `scenarios/`
    #[arg(short, default_value = "binary.yaml")]
    file_name: String,

    /// Run this many 60 fps frames without a window, then exit
    #[arg(long)]
    headless: Option<usize>,

    /// Print force and frame timings instead of simulating
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<Engine> {
    let path = scenario_path(file_name);
    let cfg = ScenarioConfig::from_yaml_file(&path)?;
    let engine = Scenario::build(cfg).with_context(|| format!("failed to build scenario {}", path.display()))?;
    Ok(engine)
}

/// Step `frames` fixed frames and log how the system evolves
fn run_headless(mut engine: Engine, frames: usize) {
    let frame = 1.0 / 60.0;
    let e0 = engine.total_energy();
    let mut merges = 0;

    for i in 0..frames {
        merges += engine.update(frame).len();

        if (i + 1) % 60 == 0 {
            info!(
                t = engine.time(),
                bodies = engine.body_count(),
                energy = engine.total_energy(),
                merges,
                "tick"
            );
        }
    }

    let e1 = engine.total_energy();
    info!(
        frames,
        bodies = engine.body_count(),
        merges,
        drift = (e1 - e0) / e0.abs().max(f64::MIN_POSITIVE),
        bound = engine.is_bound(),
        "headless run finished"
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_update();
        return Ok(());
    }

    let engine = load_scenario(&args.file_name)?;

    match args.headless {
        Some(frames) => run_headless(engine, frames),
        None => run_3d(engine),
    }

    Ok(())
}
