// SPDX-License-Identifier: LGPL-3.0-or-later

//! Stimulus and reference vector emission.
//!
//! Wire format: one decimal integer per line, no header. The stimulus and
//! reference files match line-for-line; the testbench reads them in
//! lockstep.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Write a sample vector as newline-delimited decimal integers.
pub fn write_vector(path: &Path, samples: &[i64]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for s in samples {
        writeln!(w, "{s}")?;
    }
    w.flush()?;
    Ok(())
}
