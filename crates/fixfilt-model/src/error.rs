// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types for the reference model core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while constructing reference models.
///
/// All of these are configuration errors in the sense of the verification
/// flow: they must surface before any file is written or any simulator is
/// launched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("data width must be between 2 and 63 bits, got {0}")]
    InvalidDataWidth(u32),

    #[error("coefficient width must be between 1 and 63 bits, got {0}")]
    InvalidCoefficientWidth(u32),

    #[error("coefficient set is empty")]
    EmptyCoefficientSet,

    #[error("section {section}: leading denominator coefficient a0 is zero")]
    ZeroLeadingCoefficient { section: usize },

    #[error("coefficient at index {index} is not finite")]
    NonFiniteCoefficient { index: usize },
}
