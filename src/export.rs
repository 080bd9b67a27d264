//! CSV export of trajectories.

use crate::errors::{Result, SimulationError};
use crate::models::PositionHistory;
use crate::scenario::Snapshot;
use csv::Writer;
use hifitime::{Duration, Epoch};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Opens `path` for writing, creating parent directories. `-` means stdout.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

#[derive(Debug, Serialize)]
struct SnapshotRecord {
    step: u64,
    time_s: f64,
    utc: String,
    x_m: f64,
    y_m: f64,
    vx_m_s: f64,
    vy_m_s: f64,
    altitude_m: f64,
    energy_j: f64,
    angular_momentum_kg_m2_s: f64,
    engine_power_n: f64,
}

/// Writes sampled snapshots as CSV rows stamped with a UTC epoch.
pub struct TrajectoryWriter<W: Write> {
    writer: Writer<W>,
    start_epoch: Epoch,
    rows: usize,
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(inner: W, start_epoch: Epoch) -> Self {
        TrajectoryWriter {
            writer: Writer::from_writer(inner),
            start_epoch,
            rows: 0,
        }
    }

    pub fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        let epoch = self.start_epoch + Duration::from_seconds(snapshot.time);
        self.writer.serialize(SnapshotRecord {
            step: snapshot.step,
            time_s: snapshot.time,
            utc: epoch.to_string(),
            x_m: snapshot.position.x,
            y_m: snapshot.position.y,
            vx_m_s: snapshot.velocity.x,
            vy_m_s: snapshot.velocity.y,
            altitude_m: snapshot.altitude,
            energy_j: snapshot.energy,
            angular_momentum_kg_m2_s: snapshot.angular_momentum,
            engine_power_n: snapshot.engine_power,
        })?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| {
                SimulationError::Io(io::Error::new(e.error().kind(), e.error().to_string()))
            })
    }
}

/// Dumps the recorded positions as `index,x_m,y_m` rows.
pub fn write_history<W: Write>(inner: W, history: &PositionHistory) -> Result<()> {
    let mut writer = Writer::from_writer(inner);
    writer.write_record(["index", "x_m", "y_m"])?;
    for (i, p) in history.iter().enumerate() {
        let index = history.evicted() + i;
        writer.write_record([index.to_string(), p.x.to_string(), p.y.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
