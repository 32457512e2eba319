// SPDX-License-Identifier: LGPL-3.0-or-later

//! Append-only run log.
//!
//! One structured text entry per run: a topology banner, a UTC timestamp,
//! the run parameters including the stimulus seed, and the score. The log
//! accumulates across runs; it is never part of the cleanup set.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::config::{BenchConfig, Topology};
use crate::error::Result;
use crate::sim::Score;

/// Append one run record to the log at `path`.
pub fn append_log(path: &Path, config: &BenchConfig, seed: u64, score: &Score) -> Result<()> {
    let banner = match config.topology {
        Topology::SosIir => "sos iir test",
        Topology::RamFir => "ram fir test",
    };

    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        f,
        "---------------------------- {banner} ----------------------------"
    )?;
    writeln!(f, "Time: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(
        f,
        "Parameters: DW/CW {}/{} {} order: {} Fsample: {} cutoff: {} seed: {}",
        config.data_width,
        config.coeff_width,
        config.response.as_str(),
        config.order,
        config.sample_rate,
        config.cutoff,
        seed
    )?;
    writeln!(f, "Results: {score}")?;
    Ok(())
}
