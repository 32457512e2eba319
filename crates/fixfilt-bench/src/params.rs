// SPDX-License-Identifier: LGPL-3.0-or-later

//! Hardware parameter descriptor emission.
//!
//! The testbench wrapper includes a small Verilog file of `key = value;`
//! parameter declarations plus a `` `define `` selecting the topology
//! variant. The layout below is the contract the hardware side parses;
//! keep the column alignment when touching it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{BenchConfig, REF_DATA_FNAME, TEST_DATA_FNAME, Topology};
use crate::error::Result;

/// Write the testbench parameter descriptor for a run.
pub fn write_parameters(path: &Path, config: &BenchConfig) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, "`define {}", config.topology.define())?;
    match config.topology {
        Topology::SosIir => {
            writeln!(w, "parameter DATA_WIDTH        = {};", config.data_width)?;
            writeln!(w, "parameter COEFFICIENT_WIDTH = {};", config.coeff_width)?;
            writeln!(
                w,
                "parameter TYPE              = \"{}\";",
                config.response.as_str()
            )?;
            writeln!(w, "parameter ORDER             = {};", config.order)?;
            writeln!(
                w,
                "parameter ARCHITECTURE      = \"{}\";",
                config.architecture
            )?;
            writeln!(w, "parameter CLK_PER_SAMPLE    = {};", config.clk_per_sample)?;
            writeln!(w, "parameter TEST_DATA_FNAME   = \"{TEST_DATA_FNAME}\";")?;
            writeln!(w, "parameter REF_DATA_FNAME    = \"{REF_DATA_FNAME}\";")?;
            writeln!(
                w,
                "parameter TESTBENCH_MODE    = \"{}\";",
                config.mode.as_str()
            )?;
        }
        Topology::RamFir => {
            writeln!(w, "parameter DATA_WIDTH             = {};", config.data_width)?;
            writeln!(
                w,
                "parameter COEFFICIENT_WIDTH      = {};",
                config.coeff_width
            )?;
            writeln!(w, "parameter ORDER                  = {};", config.order)?;
            writeln!(
                w,
                "parameter RAM_FIR_INIT_FILE_NAME = \"{}\";",
                config.topology.coefficient_file()
            )?;
            writeln!(
                w,
                "parameter CLK_PER_SAMPLE         = {};",
                config.clk_per_sample
            )?;
            writeln!(w, "parameter TEST_DATA_FNAME        = \"{TEST_DATA_FNAME}\";")?;
            writeln!(w, "parameter REF_DATA_FNAME         = \"{REF_DATA_FNAME}\";")?;
            writeln!(
                w,
                "parameter TESTBENCH_MODE         = \"{}\";",
                config.mode.as_str()
            )?;
        }
    }

    w.flush()?;
    Ok(())
}
