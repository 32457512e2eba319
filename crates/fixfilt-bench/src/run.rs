// SPDX-License-Identifier: LGPL-3.0-or-later

//! Run orchestration.
//!
//! The strict sequential pipeline of one verification run: validate the
//! configuration, obtain coefficients, generate the stimulus, compute the
//! golden reference, emit the text artifacts, drive the simulator, parse
//! the score, log, clean up. The only blocking external step is the
//! simulator invocation; everything else is local and deterministic for
//! a given seed.

use std::fs;
use std::io;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use fixfilt_model::{Quantizer, RamFir, SosCascade, reference_vector, stimulus};

use crate::config::{
    BenchConfig, LOG_FNAME, PARAMS_FNAME, REF_DATA_FNAME, RunMode, SCORE_FNAME, TEST_DATA_FNAME,
    TRANSCRIPT_FNAME, WAVE_DUMP_FNAME, WORK_DIR,
};
use crate::error::{BenchError, Result};
use crate::provider::{CoefficientProvider, CoefficientSet, FilterRequest};
use crate::sim::{Score, Simulator};
use crate::{params, report, vectors};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Parsed score; `None` in manual mode (nothing was simulated).
    pub score: Option<Score>,
    /// Stimulus seed actually used, for reproducing the run.
    pub seed: u64,
    /// Stimulus/reference vector length.
    pub samples: usize,
}

/// Execute one verification run.
///
/// In [`RunMode::Manual`] the run stops after emitting the vectors and the
/// parameter descriptor, leaving the artifacts in place for an interactive
/// simulator session. In [`RunMode::Automatic`] it continues through
/// simulation, scoring, logging, and cleanup.
pub fn run(
    config: &BenchConfig,
    provider: &dyn CoefficientProvider,
    simulator: &Simulator,
) -> Result<RunOutcome> {
    config.validate()?;

    let memory_file = config.workdir.join(config.topology.coefficient_file());
    let request = FilterRequest {
        topology: config.topology,
        order: config.order,
        cutoff: config.cutoff,
        coeff_width: config.coeff_width,
        response: config.response,
        memory_file: &memory_file,
    };
    let coefficients = provider.generate(&request)?;
    if !coefficients.matches(config.topology) {
        return Err(BenchError::Config(format!(
            "coefficient provider returned a set unusable for the {:?} topology",
            config.topology
        )));
    }

    let quantizer = Quantizer::new(config.data_width, config.coeff_width, config.rounding)?;

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let test_data = stimulus::generate(config.samples, config.data_width, &mut rng)?;

    let ref_data = match &coefficients {
        CoefficientSet::Sections(sections) => {
            let cascade = SosCascade::from_direct_form(sections)?;
            reference_vector(&cascade, &test_data, &quantizer)
        }
        CoefficientSet::Taps(taps) => {
            let fir = RamFir::new(taps.clone())?;
            reference_vector(&fir, &test_data, &quantizer)
        }
    };
    debug_assert_eq!(ref_data.len(), test_data.len());

    vectors::write_vector(&config.workdir.join(TEST_DATA_FNAME), &test_data)?;
    vectors::write_vector(&config.workdir.join(REF_DATA_FNAME), &ref_data)?;
    params::write_parameters(&config.workdir.join(PARAMS_FNAME), config)?;
    info!(
        topology = ?config.topology,
        samples = config.samples,
        seed,
        "stimulus, reference, and parameter descriptor emitted"
    );

    if config.mode == RunMode::Manual {
        info!("manual mode: artifacts left in place for an interactive session");
        return Ok(RunOutcome {
            score: None,
            seed,
            samples: config.samples,
        });
    }

    let stdout = simulator.run(&config.workdir)?;
    debug!(stdout_bytes = stdout.len(), "simulation finished");

    let score = crate::sim::read_score(&config.workdir.join(SCORE_FNAME))?;
    if score == Score::Missing {
        warn!("simulation produced no score artifact");
    } else {
        info!(score = %score, "score parsed");
    }

    report::append_log(&config.workdir.join(LOG_FNAME), config, seed, &score)?;
    cleanup(config)?;

    Ok(RunOutcome {
        score: Some(score),
        seed,
        samples: config.samples,
    })
}

/// Delete the artifacts a run generated.
///
/// A file that is already missing is expected (the simulator may not have
/// produced it) and tolerated silently; any other removal error propagates.
/// The simulator's `work` library directory is removed best-effort.
fn cleanup(config: &BenchConfig) -> Result<()> {
    let files = [
        config.topology.coefficient_file(),
        PARAMS_FNAME,
        TEST_DATA_FNAME,
        REF_DATA_FNAME,
        SCORE_FNAME,
        TRANSCRIPT_FNAME,
        WAVE_DUMP_FNAME,
    ];
    for name in files {
        match fs::remove_file(config.workdir.join(name)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    if let Err(e) = fs::remove_dir_all(config.workdir.join(WORK_DIR)) {
        if e.kind() != io::ErrorKind::NotFound {
            debug!(error = %e, "could not remove simulator work directory");
        }
    }
    Ok(())
}
