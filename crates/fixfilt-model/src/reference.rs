// SPDX-License-Identifier: LGPL-3.0-or-later

//! The polymorphic reference model: `quantize(filter(stimulus))`.
//!
//! Both filter topologies share one quantize/saturate path; each supplies
//! its own filtering strategy and structural transform (the direct-to-
//! transposed sign conversion for the SOS cascade, the pipeline delay
//! shift for the RAM FIR) behind the [`FilterTopology`] seam.

use crate::fir::RamFir;
use crate::quantize::Quantizer;
use crate::sos::SosCascade;

/// A topology-specific filtering strategy.
///
/// `response` maps an integer stimulus to the ideal full-precision response
/// the hardware datapath would compute before quantization, including any
/// structural transform the datapath imposes. Implementations must be pure:
/// the same stimulus always yields the same response.
pub trait FilterTopology {
    fn response(&self, stimulus: &[i64]) -> Vec<f64>;
}

impl FilterTopology for SosCascade {
    fn response(&self, stimulus: &[i64]) -> Vec<f64> {
        SosCascade::response(self, stimulus)
    }
}

impl FilterTopology for RamFir {
    fn response(&self, stimulus: &[i64]) -> Vec<f64> {
        RamFir::response(self, stimulus)
    }
}

/// Compute the golden reference vector for a stimulus.
///
/// Filters at full `f64` precision, then quantizes each sample with
/// saturation. The result has the same length as the stimulus and every
/// element lies in `[quantizer.min_val(), quantizer.max_val()]`.
pub fn reference_vector<T>(topology: &T, stimulus: &[i64], quantizer: &Quantizer) -> Vec<i64>
where
    T: FilterTopology + ?Sized,
{
    topology
        .response(stimulus)
        .iter()
        .map(|&x| quantizer.quantize(x))
        .collect()
}
