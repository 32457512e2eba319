// SPDX-License-Identifier: LGPL-3.0-or-later

//! RAM-tap FIR filtering for the direct (non-recursive) topology.
//!
//! The hardware stores tap weights in a RAM and buffers each input sample
//! for one extra clock cycle before the multiply-accumulate chain sees it.
//! The reference therefore shifts its ideal response right by one position:
//! a leading zero is inserted and the final sample is discarded. The shift
//! is a structural property of the datapath, not an artifact; without it
//! every comparison against the hardware output is misaligned by exactly
//! one sample.

use crate::error::{ModelError, Result};

/// Direct-form FIR filter with RAM-initialized tap weights.
#[derive(Debug, Clone)]
pub struct RamFir {
    taps: Vec<f64>,
}

impl RamFir {
    /// Create a filter from an ordered tap-weight sequence.
    ///
    /// Errors on an empty tap set or any non-finite weight.
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        if taps.is_empty() {
            return Err(ModelError::EmptyCoefficientSet);
        }
        if let Some(index) = taps.iter().position(|t| !t.is_finite()) {
            return Err(ModelError::NonFiniteCoefficient { index });
        }
        Ok(Self { taps })
    }

    /// Number of taps.
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Ideal floating-point response including the pipeline shift.
    ///
    /// Convolves the stimulus with the tap sequence (unit feedback), then
    /// delays the result by the one cycle of input buffering. The first
    /// output sample is always `0.0`; output length equals input length.
    pub fn response(&self, stimulus: &[i64]) -> Vec<f64> {
        let n = stimulus.len();
        let mut out = vec![0.0f64; n];

        for (i, y) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &b) in self.taps.iter().enumerate().take(i + 1) {
                acc += b * stimulus[i - k] as f64;
            }
            *y = acc;
        }

        // One extra input-buffering cycle in the RAM-tap datapath: shift
        // right with a leading zero, final sample dropped.
        out.rotate_right(1.min(n));
        if let Some(first) = out.first_mut() {
            *first = 0.0;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_tap_is_delayed_identity() {
        let fir = RamFir::new(vec![1.0]).unwrap();
        let out = fir.response(&[5, 7, 9]);
        assert_eq!(out, vec![0.0, 5.0, 7.0]);
    }

    #[test]
    fn first_sample_is_always_zero() {
        let fir = RamFir::new(vec![0.25, 0.5, 0.25]).unwrap();
        for stim in [&[1i64, 2, 3][..], &[100], &[-5, -5, -5, -5]] {
            let out = fir.response(stim);
            assert_eq!(out.len(), stim.len());
            assert_eq!(out[0], 0.0, "pipeline delay must zero the first sample");
        }
    }

    #[test]
    fn moving_average_with_shift() {
        let fir = RamFir::new(vec![0.5, 0.5]).unwrap();
        // Pre-shift convolution of [2, 4, 6, 8]: [1, 3, 5, 7]
        let out = fir.response(&[2, 4, 6, 8]);
        assert_eq!(out, vec![0.0, 1.0, 3.0, 5.0]);
    }

    #[test]
    fn taps_longer_than_stimulus() {
        let fir = RamFir::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        // Convolution truncated to stimulus length: [1*1, 1*0+2*1] = [1, 2]
        let out = fir.response(&[1, 0]);
        assert_eq!(out, vec![0.0, 1.0]);
    }

    #[test]
    fn empty_stimulus_is_safe() {
        let fir = RamFir::new(vec![1.0, -1.0]).unwrap();
        assert!(fir.response(&[]).is_empty());
    }

    #[test]
    fn rejects_bad_taps() {
        assert_eq!(
            RamFir::new(vec![]).unwrap_err(),
            ModelError::EmptyCoefficientSet
        );
        assert_eq!(
            RamFir::new(vec![1.0, f64::INFINITY]).unwrap_err(),
            ModelError::NonFiniteCoefficient { index: 1 }
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let fir = RamFir::new(vec![0.3, -0.2, 0.1]).unwrap();
        let stim = [10, -20, 30, -40, 50];
        assert_eq!(fir.response(&stim), fir.response(&stim));
    }
}
