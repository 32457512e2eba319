// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types for the verification harness.

use fixfilt_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid width/order/cutoff combination. Raised before any file I/O.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch simulator `{program}`: {source}")]
    SimulatorLaunch {
        program: String,
        source: std::io::Error,
    },
}
