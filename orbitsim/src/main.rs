use orbitsim::{ScenarioConfig, Scenario, Driver, Pacing};
use orbitsim::{ConsoleRenderer, ViewerConfig, run_viewer};
use orbitsim::{load_record, append_record};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbitsim", about = "Gravitational n-body simulation with a live console view")]
struct Args {
    /// Scenario file, looked up in the crate's `scenarios/` directory unless it exists as given
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Parameter record file used by --load and --save
    #[arg(long, default_value = "records.txt")]
    records: PathBuf,

    /// Start from record N (1-based) instead of the scenario's bodies
    #[arg(long)]
    load: Option<usize>,

    /// Append the final state to the record file after the run
    #[arg(long)]
    save: bool,

    /// Stop after presenting this many frames
    #[arg(long)]
    frames: Option<u64>,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// --save only writes once the run ends, which needs a frame or tick limit
fn check_run_is_bounded(args: &Args, cfg: &ScenarioConfig) -> Result<()> {
    if args.save && args.frames.is_none() && cfg.driver.max_ticks.is_none() {
        bail!("--save needs a bounded run: pass --frames or set driver.max_ticks in the scenario");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_yaml_file(&path)?;
    check_run_is_bounded(&args, &scenario_cfg)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)
        .with_context(|| format!("cannot build scenario from {}", path.display()))?;

    // all file i/o happens before the loop starts or after it stops
    if let Some(index) = args.load {
        match load_record(&args.records, index) {
            Ok(bodies) => {
                info!("loaded {} bodies from record {index} of {}", bodies.len(), args.records.display());
                scenario = scenario.with_bodies(bodies);
            }
            Err(err) => warn!("could not load record {index}: {err}; using scenario bodies"),
        }
    }

    let driver = Driver::new(scenario, Pacing::from(&scenario_cfg.driver));
    let handle = driver.spawn().context("failed to start simulation thread")?;

    let mut renderer = ConsoleRenderer::new(io::stdout().lock(), scenario_cfg.display.stretch);
    let viewer = ViewerConfig {
        fps: scenario_cfg.display.fps,
        frames: args.frames,
    };
    let presented = run_viewer(&handle, &mut renderer, &viewer);

    let system = handle.stop().context("simulation failed")?;
    let presented = presented.context("viewer failed")?;
    info!("presented {presented} frames, final t = {}", system.t());

    if args.save {
        let index = append_record(&args.records, system.bodies())
            .with_context(|| format!("cannot save to {}", args.records.display()))?;
        info!("saved final state as record {index}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "parameters: {dt: 0.01, G: 1.0, softening: 0.0, min_separation: 0.0}\nbodies: []\n";

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("orbitsim").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn save_requires_bounded_run() {
        let open = ScenarioConfig::from_yaml_str(YAML).unwrap();
        assert!(check_run_is_bounded(&args(&["--save"]), &open).is_err());
        assert!(check_run_is_bounded(&args(&["--save", "--frames", "10"]), &open).is_ok());
        assert!(check_run_is_bounded(&args(&[]), &open).is_ok());

        let limited = ScenarioConfig::from_yaml_str(&format!("{YAML}driver: {{max_ticks: 100}}\n")).unwrap();
        assert!(check_run_is_bounded(&args(&["--save"]), &limited).is_ok());
    }
}
