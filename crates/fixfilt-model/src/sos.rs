// SPDX-License-Identifier: LGPL-3.0-or-later

//! Cascaded second-order sections (biquads) for the IIR topology.
//!
//! Coefficient providers hand over sections in *direct form*:
//! `[b0, b1, b2, a0, a1, a2]`. The textbook difference equation
//! *subtracts* the feedback terms
//! (`a0*y[n] = b0*x[n] + ... - a1*y[n-1] - a2*y[n-2]`); the hardware's
//! transposed datapath instead *adds* them:
//! ```text
//!   y    = b0 * x + d0
//!   d0   = b1 * x + a1 * y + d1
//!   d1   = b2 * x + a2 * y
//! ```
//! [`SosCascade::from_direct_form`] therefore normalizes each section by
//! its `a0` and keeps the feedback coefficients as given; relative to the
//! textbook convention their signs are flipped. Negating them here would
//! cancel the flip and filter with the wrong recursive sign, flipping
//! every odd-delay output sample and making every downstream comparison
//! fail.

use crate::error::{ModelError, Result};

/// A single second-order section in direct form.
///
/// Layout: `[b0, b1, b2, a0, a1, a2]`, three feedforward coefficients
/// followed by three feedback coefficients. The feedback terms at index
/// positions 4 and 5 carry the direct-form sign convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SosSection(pub [f64; 6]);

/// One section after normalization, in the hardware's addition convention.
#[derive(Debug, Clone, Copy)]
struct Transposed {
    b0: f64,
    b1: f64,
    b2: f64,
    /// `a1_direct / a0`, applied additively in the recursion.
    a1: f64,
    /// `a2_direct / a0`, applied additively in the recursion.
    a2: f64,
}

/// Cascade of biquad sections in the hardware's transposed convention.
#[derive(Debug, Clone)]
pub struct SosCascade {
    sections: Vec<Transposed>,
}

impl SosCascade {
    /// Build a cascade from direct-form sections.
    ///
    /// Each section is normalized by its `a0`; the feedback coefficients
    /// keep their direct-form values and enter the recursion additively.
    /// Errors on an empty set, a zero `a0`, or any non-finite coefficient.
    pub fn from_direct_form(sections: &[SosSection]) -> Result<Self> {
        if sections.is_empty() {
            return Err(ModelError::EmptyCoefficientSet);
        }

        let mut converted = Vec::with_capacity(sections.len());
        for (section, sos) in sections.iter().enumerate() {
            let c = sos.0;
            if let Some(index) = c.iter().position(|v| !v.is_finite()) {
                return Err(ModelError::NonFiniteCoefficient { index });
            }
            let a0 = c[3];
            if a0 == 0.0 {
                return Err(ModelError::ZeroLeadingCoefficient { section });
            }
            converted.push(Transposed {
                b0: c[0] / a0,
                b1: c[1] / a0,
                b2: c[2] / a0,
                a1: c[4] / a0,
                a2: c[5] / a0,
            });
        }

        Ok(Self {
            sections: converted,
        })
    }

    /// Number of cascaded sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Ideal floating-point response of the cascade to an integer stimulus.
    ///
    /// Delay state is fresh per call, so the same stimulus always produces
    /// the same response. Output length equals input length.
    pub fn response(&self, stimulus: &[i64]) -> Vec<f64> {
        let mut buf: Vec<f64> = stimulus.iter().map(|&x| x as f64).collect();

        for sec in &self.sections {
            let (mut d0, mut d1) = (0.0f64, 0.0f64);
            for s in buf.iter_mut() {
                let x = *s;
                let y = sec.b0 * x + d0;
                d0 = sec.b1 * x + sec.a1 * y + d1;
                d1 = sec.b2 * x + sec.a2 * y;
                *s = y;
            }
        }

        buf
    }
}
