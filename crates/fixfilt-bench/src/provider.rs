// SPDX-License-Identifier: LGPL-3.0-or-later

//! Coefficient provider interface.
//!
//! Coefficient synthesis (cutoff-to-coefficient transformation) is an
//! external capability; the harness only specifies the boundary. A
//! provider receives the request, writes the hardware-readable coefficient
//! memory file as a side effect, and returns the float coefficients the
//! reference model filters with.

use std::path::Path;

use fixfilt_model::SosSection;

use crate::config::{ResponseKind, Topology};
use crate::error::Result;

/// One coefficient request, derived from the run configuration.
#[derive(Debug, Clone, Copy)]
pub struct FilterRequest<'a> {
    pub topology: Topology,
    /// Filter order (IIR) or tap count (FIR).
    pub order: u32,
    /// Cutoff frequency in Hz.
    pub cutoff: u32,
    /// Coefficient width in bits.
    pub coeff_width: u32,
    pub response: ResponseKind,
    /// Where the provider must write the coefficient memory file.
    pub memory_file: &'a Path,
}

/// Float coefficients for one filter, immutable for the rest of the run.
#[derive(Debug, Clone)]
pub enum CoefficientSet {
    /// Direct-form second-order sections for the SOS IIR topology.
    Sections(Vec<SosSection>),
    /// Flat tap-weight sequence for the RAM FIR topology.
    Taps(Vec<f64>),
}

impl CoefficientSet {
    /// Whether this set is usable for the given topology.
    pub fn matches(&self, topology: Topology) -> bool {
        matches!(
            (self, topology),
            (CoefficientSet::Sections(_), Topology::SosIir)
                | (CoefficientSet::Taps(_), Topology::RamFir)
        )
    }
}

/// External coefficient synthesis, specified only at this boundary.
pub trait CoefficientProvider {
    /// Produce coefficients for the request and write the coefficient
    /// memory file named by `request.memory_file`.
    fn generate(&self, request: &FilterRequest<'_>) -> Result<CoefficientSet>;
}
