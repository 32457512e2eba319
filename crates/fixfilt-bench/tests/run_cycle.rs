// SPDX-License-Identifier: LGPL-3.0-or-later
//
// Full verification-cycle tests: an in-memory coefficient provider and a
// shell one-liner standing in for the HDL simulator exercise the whole
// pipeline from artifact emission through scoring, logging and cleanup.

use std::fs;

use fixfilt_bench::config::{
    BenchConfig, LOG_FNAME, PARAMS_FNAME, REF_DATA_FNAME, SCORE_FNAME, TEST_DATA_FNAME, WORK_DIR,
};
use fixfilt_bench::{
    CoefficientProvider, CoefficientSet, FilterRequest, Result, Score, Simulator, run,
};
use fixfilt_model::SosSection;

struct FixedProvider(CoefficientSet);

impl CoefficientProvider for FixedProvider {
    fn generate(&self, request: &FilterRequest<'_>) -> Result<CoefficientSet> {
        // Real providers write a Verilog header or a $readmemb image here.
        fs::write(request.memory_file, "// coefficient memory\n")?;
        Ok(self.0.clone())
    }
}

fn iir_provider() -> FixedProvider {
    FixedProvider(CoefficientSet::Sections(vec![SosSection([
        0.2929, 0.5858, 0.2929, 1.0, 0.0, 0.1716,
    ])]))
}

fn fir_provider() -> FixedProvider {
    FixedProvider(CoefficientSet::Taps(vec![0.25, 0.5, 0.25]))
}

/// A "simulator" that plays along: writes a passing score file.
fn passing_simulator() -> Simulator {
    Simulator::new("sh", ["-c", "echo '{PASSED. errors: 0}' > score.txt"])
}

#[test]
fn automatic_iir_cycle_scores_logs_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfig::sos_iir(dir.path());
    config.seed = Some(1);

    let outcome = run(&config, &iir_provider(), &passing_simulator()).unwrap();

    assert_eq!(
        outcome.score,
        Some(Score::Reported("PASSED. errors: 0".to_string()))
    );
    assert_eq!(outcome.samples, 100);

    // Log survives, artifacts do not
    let log = fs::read_to_string(dir.path().join(LOG_FNAME)).unwrap();
    assert!(log.contains("sos iir test"));
    assert!(log.contains("Results: PASSED. errors: 0"));
    assert!(log.contains("seed: 1"));

    for name in [
        TEST_DATA_FNAME,
        REF_DATA_FNAME,
        PARAMS_FNAME,
        SCORE_FNAME,
        "sos_iir_coefficients.v",
    ] {
        assert!(
            !dir.path().join(name).exists(),
            "{name} must be removed at cleanup"
        );
    }
}

#[test]
fn automatic_fir_cycle_reference_leads_with_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfig::ram_fir(dir.path());
    config.order = 3;
    config.clk_per_sample = 13;
    config.samples = 50;
    config.seed = Some(2);

    // Capture the reference before cleanup by running manually first
    config.mode = fixfilt_bench::RunMode::Manual;
    run(&config, &fir_provider(), &passing_simulator()).unwrap();

    let reference = fs::read_to_string(dir.path().join(REF_DATA_FNAME)).unwrap();
    assert_eq!(
        reference.lines().next(),
        Some("0"),
        "FIR pipeline delay must zero the first reference sample"
    );
    assert_eq!(reference.lines().count(), 50);
}

#[test]
fn missing_score_is_logged_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfig::sos_iir(dir.path());
    config.seed = Some(3);

    // Simulator exits without writing score.txt (and with a failure code;
    // the exit status is not the signal)
    let silent = Simulator::new("sh", ["-c", "exit 1"]);
    let outcome = run(&config, &iir_provider(), &silent).unwrap();

    assert_eq!(outcome.score, Some(Score::Missing));
    let log = fs::read_to_string(dir.path().join(LOG_FNAME)).unwrap();
    assert!(log.contains("no score produced"));
}

#[test]
fn cleanup_tolerates_simulator_residue_and_its_absence() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfig::sos_iir(dir.path());
    config.seed = Some(4);

    // This simulator leaves the typical residue: transcript, wlf, work/
    let messy = Simulator::new(
        "sh",
        [
            "-c",
            "echo '{PASSED. errors: 0}' > score.txt; \
             touch transcript vsim.wlf; mkdir -p work; touch work/_lib.qdb",
        ],
    );
    run(&config, &iir_provider(), &messy).unwrap();
    assert!(!dir.path().join("transcript").exists());
    assert!(!dir.path().join("vsim.wlf").exists());
    assert!(!dir.path().join(WORK_DIR).exists());

    // And a second run where none of the residue exists is equally fine
    let dir2 = tempfile::tempdir().unwrap();
    let mut config2 = BenchConfig::sos_iir(dir2.path());
    config2.seed = Some(5);
    run(&config2, &iir_provider(), &passing_simulator()).unwrap();
}

#[test]
fn vectors_match_line_for_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfig::sos_iir(dir.path());
    config.mode = fixfilt_bench::RunMode::Manual;
    config.samples = 64;
    config.seed = Some(6);

    run(&config, &iir_provider(), &passing_simulator()).unwrap();

    let stim = fs::read_to_string(dir.path().join(TEST_DATA_FNAME)).unwrap();
    let reference = fs::read_to_string(dir.path().join(REF_DATA_FNAME)).unwrap();
    assert_eq!(stim.lines().count(), reference.lines().count());

    // Both files are plain decimal integers, one per line
    for line in stim.lines().chain(reference.lines()) {
        line.parse::<i64>()
            .unwrap_or_else(|_| panic!("non-decimal line: {line:?}"));
    }

    // Stimulus respects the quarter-range bound for dw=16
    for line in stim.lines() {
        let v: i64 = line.parse().unwrap();
        assert!((-8192..8192).contains(&v), "stimulus {v} out of range");
    }
}
