// SPDX-License-Identifier: LGPL-3.0-or-later

//! # fixfilt-bench
//!
//! Verification harness for hardware digital filter implementations.
//!
//! One run: request float coefficients from a [`CoefficientProvider`],
//! generate a bounded-integer stimulus, compute the fixed-point golden
//! reference with [`fixfilt_model`], emit the vectors and a hardware
//! parameter descriptor as text, invoke the external HDL simulator, parse
//! its score artifact, append a log entry, and clean up.
//!
//! Execution is strictly sequential and single-run-per-working-directory;
//! the simulator invocation is the only blocking external step.

pub mod config;
pub mod error;
pub mod params;
pub mod provider;
pub mod report;
pub mod run;
pub mod sim;
pub mod vectors;

pub use config::{BenchConfig, ResponseKind, RunMode, Topology};
pub use error::{BenchError, Result};
pub use provider::{CoefficientProvider, CoefficientSet, FilterRequest};
pub use run::{RunOutcome, run};
pub use sim::{Score, Simulator};
