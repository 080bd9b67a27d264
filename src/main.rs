use clap::Parser;
use hifitime::Epoch;
use log::info;
use orbitsim::export::{write_history, writer_for_path, TrajectoryWriter};
use orbitsim::{Scenario, SimulationConfig};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Satellite orbit simulation around Earth with a static Moon, drag and thrust.
#[derive(Parser, Debug)]
#[command(name = "orbitsim", version)]
struct Args {
    /// TOML run configuration; defaults describe a 500 kg satellite in LEO
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of steps from the configuration
    #[arg(long)]
    steps: Option<usize>,

    /// Trajectory CSV, `-` for stdout
    #[arg(short, long, default_value = "output/trajectory.csv")]
    output: PathBuf,

    /// Write every N-th step (the final step is always written)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// UTC epoch of step 0
    #[arg(long, default_value = "2000-01-01T12:00:00 UTC")]
    start: String,

    /// Also dump the full position history to this CSV
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.integration.steps = steps;
    }
    let start_epoch =
        Epoch::from_str(&args.start).map_err(|e| format!("invalid --start epoch: {e}"))?;

    let mut scenario = Scenario::from_config(&config)?;
    let last_step = scenario.steps() as u64;
    let mut writer = TrajectoryWriter::new(writer_for_path(&args.output)?, start_epoch);

    scenario.run(|snapshot| {
        if snapshot.step % args.every == 0 || snapshot.step == last_step {
            writer.write(snapshot)?;
        }
        Ok(())
    })?;
    let rows = writer.rows();
    writer.finish()?.flush()?;

    if let Some(path) = &args.history {
        write_history(writer_for_path(path)?, scenario.integrator().history())?;
        info!("Position history written to {}", path.display());
    }

    let to_stdout = args.output == Path::new("-");
    if !to_stdout {
        info!("{} rows written to {}", rows, args.output.display());
    }
    let snapshot = scenario.snapshot();
    if to_stdout {
        display_info(&mut io::stderr(), &snapshot)?;
    } else {
        display_info(&mut io::stdout(), &snapshot)?;
    }

    Ok(())
}

fn display_info(out: &mut dyn Write, s: &orbitsim::Snapshot) -> io::Result<()> {
    writeln!(out, "Position: ({:.3}, {:.3}) m", s.position.x, s.position.y)?;
    writeln!(out, "Velocity: ({:.6}, {:.6}) m/s", s.velocity.x, s.velocity.y)?;
    writeln!(out, "Altitude: {:.3} m", s.altitude)?;
    writeln!(
        out,
        "Engine: power {} N, direction ({:.6}, {:.6})",
        s.engine_power, s.engine_direction.x, s.engine_direction.y
    )
}
