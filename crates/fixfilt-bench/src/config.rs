// SPDX-License-Identifier: LGPL-3.0-or-later

//! Run configuration.
//!
//! Every parameter of a verification run lives in one immutable
//! [`BenchConfig`] record handed to each component entry point. Run-mode
//! and topology selection are explicit enums consumed only at the
//! orchestration boundary; the reference model never sees them.

use std::path::PathBuf;

use fixfilt_model::RoundingMode;

use crate::error::{BenchError, Result};

/// Stimulus vector file name, fixed by the hardware testbench contract.
pub const TEST_DATA_FNAME: &str = "input.txt";
/// Golden reference vector file name.
pub const REF_DATA_FNAME: &str = "ref.txt";
/// Verilog parameter descriptor consumed by the testbench wrapper.
pub const PARAMS_FNAME: &str = "testbench_parameters.v";
/// Score artifact written by the simulator's comparison routine.
pub const SCORE_FNAME: &str = "score.txt";
/// Append-only run log.
pub const LOG_FNAME: &str = "log";
/// Coefficient header written by the provider for the SOS IIR topology.
pub const IIR_COEFF_FNAME: &str = "sos_iir_coefficients.v";
/// Tap memory initialization file for the RAM FIR topology.
pub const FIR_MEM_FNAME: &str = "test.mem";
/// Simulator console transcript, produced as residue.
pub const TRANSCRIPT_FNAME: &str = "transcript";
/// Simulator waveform dump, produced as residue.
pub const WAVE_DUMP_FNAME: &str = "vsim.wlf";
/// Simulator compilation library directory.
pub const WORK_DIR: &str = "work";

/// Filter topology under verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Cascaded second-order sections, looped-SOS architecture.
    SosIir,
    /// Direct FIR with RAM-initialized taps.
    RamFir,
}

impl Topology {
    /// The coefficient memory file the provider writes for this topology.
    pub fn coefficient_file(&self) -> &'static str {
        match self {
            Topology::SosIir => IIR_COEFF_FNAME,
            Topology::RamFir => FIR_MEM_FNAME,
        }
    }

    /// Verilog `` `define `` selecting the testbench variant.
    pub fn define(&self) -> &'static str {
        match self {
            Topology::SosIir => "IIR",
            Topology::RamFir => "RAM_FIR",
        }
    }
}

/// Filter response type requested from the coefficient provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Lowpass,
    Highpass,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Lowpass => "lowpass",
            ResponseKind::Highpass => "highpass",
        }
    }
}

/// Whether the run drives the simulator itself or leaves the artifacts
/// for an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Emit vectors and parameters, then stop. Nothing is simulated,
    /// logged, or cleaned up.
    Manual,
    /// Full unattended cycle: simulate, score, log, clean up.
    Automatic,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Manual => "manual",
            RunMode::Automatic => "automatic",
        }
    }
}

/// Immutable configuration record for one verification run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub topology: Topology,
    /// Data width in bits (`dw`).
    pub data_width: u32,
    /// Coefficient width in bits (`cw`).
    pub coeff_width: u32,
    /// Filter order (IIR) or tap count (FIR).
    pub order: u32,
    /// Sample rate in Hz, only meaningful to the coefficient provider.
    pub sample_rate: u32,
    /// Cutoff frequency in Hz.
    pub cutoff: u32,
    pub response: ResponseKind,
    /// Architecture hint passed through to the testbench descriptor.
    pub architecture: String,
    /// Clock cycles the testbench allows per input sample.
    pub clk_per_sample: u32,
    /// Stimulus length.
    pub samples: usize,
    pub rounding: RoundingMode,
    /// Stimulus RNG seed; drawn fresh when absent and recorded in the log.
    pub seed: Option<u64>,
    pub mode: RunMode,
    /// Directory the artifacts are emitted to and the simulator runs in.
    pub workdir: PathBuf,
}

/// Default cycle budget per sample for a topology of the given order.
///
/// The looped-SOS datapath processes one section pair per pass; the RAM
/// FIR walks all taps. Both get a fixed setup margin.
pub fn default_clk_per_sample(topology: Topology, order: u32) -> u32 {
    match topology {
        Topology::SosIir => order / 2 + 10,
        Topology::RamFir => order + 10,
    }
}

impl BenchConfig {
    /// Configuration for an SOS IIR run with the customary defaults:
    /// 16/16-bit widths, 4th order lowpass at fs/8 of 44.1 kHz, 100 samples.
    pub fn sos_iir(workdir: impl Into<PathBuf>) -> Self {
        let fsample = 44_100;
        Self {
            topology: Topology::SosIir,
            data_width: 16,
            coeff_width: 16,
            order: 4,
            sample_rate: fsample,
            cutoff: fsample / 8,
            response: ResponseKind::Lowpass,
            architecture: "LOOPED SOS".to_string(),
            clk_per_sample: default_clk_per_sample(Topology::SosIir, 4),
            samples: 100,
            rounding: RoundingMode::HalfAwayFromZero,
            seed: None,
            mode: RunMode::Automatic,
            workdir: workdir.into(),
        }
    }

    /// Configuration for a RAM FIR run with the customary defaults:
    /// 24/24-bit widths, 511-tap highpass at 200 Hz, 1000 samples.
    pub fn ram_fir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            topology: Topology::RamFir,
            data_width: 24,
            coeff_width: 24,
            order: 511,
            sample_rate: 44_100,
            cutoff: 200,
            response: ResponseKind::Highpass,
            architecture: String::new(),
            clk_per_sample: default_clk_per_sample(Topology::RamFir, 511),
            samples: 1000,
            rounding: RoundingMode::HalfAwayFromZero,
            seed: None,
            mode: RunMode::Automatic,
            workdir: workdir.into(),
        }
    }

    /// Reject invalid parameter combinations before any file I/O.
    pub fn validate(&self) -> Result<()> {
        if !(2..=63).contains(&self.data_width) {
            return Err(BenchError::Config(format!(
                "data width must be between 2 and 63 bits, got {}",
                self.data_width
            )));
        }
        if !(1..=63).contains(&self.coeff_width) {
            return Err(BenchError::Config(format!(
                "coefficient width must be between 1 and 63 bits, got {}",
                self.coeff_width
            )));
        }
        if self.order == 0 {
            return Err(BenchError::Config("filter order must be at least 1".into()));
        }
        if self.samples == 0 {
            return Err(BenchError::Config(
                "stimulus length must be at least 1".into(),
            ));
        }
        if self.cutoff == 0 || u64::from(self.cutoff) * 2 >= u64::from(self.sample_rate) {
            return Err(BenchError::Config(format!(
                "cutoff {} Hz must lie strictly inside (0, fs/2) for fs = {} Hz",
                self.cutoff, self.sample_rate
            )));
        }
        if self.clk_per_sample == 0 {
            return Err(BenchError::Config(
                "clocks per sample must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BenchConfig::sos_iir("/tmp").validate().is_ok());
        assert!(BenchConfig::ram_fir("/tmp").validate().is_ok());
    }

    #[test]
    fn iir_defaults_match_the_testbench_contract() {
        let c = BenchConfig::sos_iir("/tmp");
        assert_eq!(c.data_width, 16);
        assert_eq!(c.coeff_width, 16);
        assert_eq!(c.order, 4);
        assert_eq!(c.cutoff, 44_100 / 8);
        assert_eq!(c.clk_per_sample, 12);
        assert_eq!(c.topology.coefficient_file(), IIR_COEFF_FNAME);
        assert_eq!(c.topology.define(), "IIR");
    }

    #[test]
    fn fir_defaults_match_the_testbench_contract() {
        let c = BenchConfig::ram_fir("/tmp");
        assert_eq!(c.data_width, 24);
        assert_eq!(c.order, 511);
        assert_eq!(c.clk_per_sample, 521);
        assert_eq!(c.response, ResponseKind::Highpass);
        assert_eq!(c.topology.coefficient_file(), FIR_MEM_FNAME);
        assert_eq!(c.topology.define(), "RAM_FIR");
    }

    #[test]
    fn validate_rejects_bad_widths() {
        let mut c = BenchConfig::sos_iir("/tmp");
        c.data_width = 1;
        assert!(matches!(c.validate(), Err(BenchError::Config(_))));

        let mut c = BenchConfig::sos_iir("/tmp");
        c.coeff_width = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_degenerate_run() {
        let mut c = BenchConfig::sos_iir("/tmp");
        c.order = 0;
        assert!(c.validate().is_err());

        let mut c = BenchConfig::sos_iir("/tmp");
        c.samples = 0;
        assert!(c.validate().is_err());

        let mut c = BenchConfig::sos_iir("/tmp");
        c.clk_per_sample = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_cutoff_outside_nyquist() {
        let mut c = BenchConfig::sos_iir("/tmp");
        c.cutoff = 0;
        assert!(c.validate().is_err());

        let mut c = BenchConfig::sos_iir("/tmp");
        c.cutoff = c.sample_rate / 2;
        assert!(c.validate().is_err());

        // Doubling must not overflow for any representable cutoff
        let mut c = BenchConfig::sos_iir("/tmp");
        c.cutoff = u32::MAX;
        assert!(c.validate().is_err());
    }
}
