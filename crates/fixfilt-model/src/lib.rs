// SPDX-License-Identifier: LGPL-3.0-or-later

//! # fixfilt-model
//!
//! Fixed-point golden reference models for hardware digital filter
//! verification.
//!
//! Given float-valued filter coefficients and an integer stimulus, this
//! crate reproduces, bit for bit, the rounding, saturation, and delay
//! semantics of the target hardware:
//!
//! - **IIR**: cascaded second-order sections in transposed direct form II,
//!   converted from the direct-form sign convention ([`sos`]).
//! - **FIR**: direct RAM-tap convolution with one pipeline cycle of input
//!   buffering ([`fir`]).
//! - **Quantization**: round to `cw`-bit fixed point, truncate to an
//!   integer sample, saturate to the `dw`-bit range ([`quantize`]).
//! - **Stimulus**: quarter-range bounded uniform integers ([`stimulus`]).
//!
//! All filtering runs at full `f64` precision; only the final quantization
//! step leaves the floating-point domain. Any deviation from the hardware's
//! arithmetic model here produces false verification failures downstream.

pub mod error;
pub mod fir;
pub mod quantize;
pub mod reference;
pub mod sos;
pub mod stimulus;

pub use error::{ModelError, Result};
pub use fir::RamFir;
pub use quantize::{Quantizer, RoundingMode};
pub use reference::{FilterTopology, reference_vector};
pub use sos::{SosCascade, SosSection};
