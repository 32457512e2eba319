// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fixed-point quantization with saturation.
//!
//! The hardware computes with `cw`-bit coefficients and `dw`-bit data.
//! The reference reproduces this by rounding each ideal `f64` response
//! sample to the `cw`-bit fixed-point grid (scale factor `2^(cw-1)`),
//! truncating the fractional remainder toward zero, and clamping the
//! result into the signed `dw`-bit range. A wrong rounding direction or
//! saturation bound silently invalidates an entire verification run.

use crate::error::{ModelError, Result};

/// Tie-break rule applied when a scaled sample lands exactly between two
/// representable fixed-point values.
///
/// Which rule the hardware implements must be confirmed against the actual
/// design; it is a parameter here rather than an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round half away from zero (`f64::round`).
    #[default]
    HalfAwayFromZero,
    /// Round half to even (convergent rounding).
    HalfToEven,
}

/// Quantizer for a fixed `dw`/`cw` configuration.
///
/// # Examples
///
/// ```
/// use fixfilt_model::{Quantizer, RoundingMode};
///
/// let q = Quantizer::new(16, 16, RoundingMode::HalfAwayFromZero).unwrap();
/// assert_eq!(q.quantize(100.0), 100);
/// assert_eq!(q.quantize(1.0e9), q.max_val());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    data_width: u32,
    coeff_width: u32,
    mode: RoundingMode,
    scale: f64,
    min_val: i64,
    max_val: i64,
}

impl Quantizer {
    /// Create a quantizer for the given data and coefficient widths.
    ///
    /// Fails fast on widths the hardware cannot express: `dw < 2` leaves a
    /// degenerate sample range, and widths above 63 bits overflow `i64`.
    pub fn new(data_width: u32, coeff_width: u32, mode: RoundingMode) -> Result<Self> {
        if !(2..=63).contains(&data_width) {
            return Err(ModelError::InvalidDataWidth(data_width));
        }
        if !(1..=63).contains(&coeff_width) {
            return Err(ModelError::InvalidCoefficientWidth(coeff_width));
        }

        Ok(Self {
            data_width,
            coeff_width,
            mode,
            scale: f64::exp2((coeff_width - 1) as f64),
            min_val: -(1i64 << (data_width - 1)),
            max_val: (1i64 << (data_width - 1)) - 1,
        })
    }

    /// Smallest representable sample, `-2^(dw-1)`.
    pub fn min_val(&self) -> i64 {
        self.min_val
    }

    /// Largest representable sample, `2^(dw-1) - 1`.
    pub fn max_val(&self) -> i64 {
        self.max_val
    }

    /// Data width in bits.
    pub fn data_width(&self) -> u32 {
        self.data_width
    }

    /// Coefficient width in bits.
    pub fn coeff_width(&self) -> u32 {
        self.coeff_width
    }

    fn round(&self, x: f64) -> f64 {
        match self.mode {
            RoundingMode::HalfAwayFromZero => x.round(),
            RoundingMode::HalfToEven => x.round_ties_even(),
        }
    }

    /// Quantize one ideal response sample to a hardware data sample.
    ///
    /// Rounds on the `2^(cw-1)` fixed-point grid, truncates toward zero,
    /// then saturates. The bounds themselves are valid outputs: an ideal
    /// response of exactly `max_val` passes through unclamped.
    pub fn quantize(&self, x: f64) -> i64 {
        let fixed = self.round(x * self.scale) / self.scale;
        (fixed.trunc() as i64).clamp(self.min_val, self.max_val)
    }
}
