// SPDX-License-Identifier: LGPL-3.0-or-later

//! External simulator invocation and score parsing.
//!
//! The simulator is a single blocking subprocess (by default ModelSim's
//! `vsim -c -do make.tcl`) run in the working directory. Its comparison
//! routine is expected to leave a one-line `score.txt`; a missing score
//! file is a valid, handled outcome: the testbench signals failure by
//! not producing one, so the exit status is deliberately not checked.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{BenchError, Result};

/// External simulator command.
#[derive(Debug, Clone)]
pub struct Simulator {
    program: String,
    args: Vec<String>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new("vsim", ["-c", "-do", "make.tcl"])
    }
}

impl Simulator {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the simulator to completion in `workdir`, returning its stdout.
    ///
    /// Blocks until the process exits; there is no timeout, so a hung
    /// simulator hangs the run. Launch failures propagate.
    pub fn run(&self, workdir: &Path) -> Result<String> {
        debug!(program = %self.program, ?workdir, "launching simulator");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(workdir)
            .output()
            .map_err(|source| BenchError::SimulatorLaunch {
                program: self.program.clone(),
                source,
            })?;
        debug!(status = ?output.status, "simulator exited");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Outcome token parsed from the score artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Score {
    /// The token from the first line of the score file.
    Reported(String),
    /// No score file was produced.
    Missing,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Reported(s) => f.write_str(s),
            Score::Missing => f.write_str("no score produced by the simulation routine"),
        }
    }
}

/// Parse the score artifact at `path`.
///
/// Takes the first line, strips surrounding whitespace and the enclosing
/// delimiter characters the comparison script wraps the token in. Absence
/// of the file (or an empty token) maps to [`Score::Missing`]; any other
/// read error propagates.
pub fn read_score(path: &Path) -> Result<Score> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Score::Missing),
        Err(e) => return Err(e.into()),
    };

    let token = text
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches(|c| matches!(c, '{' | '}' | '[' | ']' | '(' | ')' | '"'));

    if token.is_empty() {
        Ok(Score::Missing)
    } else {
        Ok(Score::Reported(token.to_string()))
    }
}
