use phys::{SimConfig, Scenario};
use phys::run_2d;
use phys::{bench_step, bench_step_curve};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML, a path or a file name under `scenarios/`; built-in defaults when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Time the stepper instead of opening the viewer
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV cost curve
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_config(file_name: Option<&str>) -> Result<SimConfig> {
    let Some(file_name) = file_name else {
        return Ok(SimConfig::default());
    };

    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    SimConfig::from_yaml_file(&config_path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve();
        } else {
            bench_step();
        }
        return Ok(());
    }

    let cfg = load_config(args.file_name.as_deref())?;
    cfg.validate()?;

    let scenario = Scenario::build_scenario(&cfg);
    run_2d(scenario);

    Ok(())
}
