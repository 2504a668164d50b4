use tribody::{canonical_roster, load_scenario, BodySnapshot, Engine, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Step the three-sun system and print body states as JSON lines")]
struct Args {
    /// Scenario file under scenarios/ (or any path); canonical roster if omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Number of steps to take
    #[arg(short, long, default_value_t = 1)]
    steps: u64,

    /// Step size in seconds; the scenario's default if omitted
    #[arg(long)]
    dt: Option<f64>,

    /// Print every k-th step
    #[arg(short, long, default_value_t = 1)]
    every: u64,
}

#[derive(Serialize)]
struct Frame<'a> {
    step: u64,
    t: f64,
    bodies: &'a [BodySnapshot],
}

// load here to keep main clean
fn load_config(file: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file else {
        return Ok(canonical_roster());
    };

    let mut path = PathBuf::from(file_name);
    if !path.exists() {
        path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }
    load_scenario(&path).with_context(|| format!("failed to load scenario {}", path.display()))
}

fn print_frame(step: u64, t: f64, bodies: &[BodySnapshot]) -> Result<()> {
    println!("{}", serde_json::to_string(&Frame { step, t, bodies })?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let engine = Engine::from_config(load_config(args.file.as_deref())?)?;
    print_frame(0, engine.time()?, &engine.read_state()?)?;

    let every = args.every.max(1);
    for step in 1..=args.steps {
        let bodies = engine.advance_state(args.dt)?;
        if step % every == 0 || step == args.steps {
            print_frame(step, engine.time()?, &bodies)?;
        }
    }

    Ok(())
}
