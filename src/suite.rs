//! Batch runner over a directory of edge-list files.
//!
//! Each `*.dimacs` file carries its expected verdict in its name: a name
//! starting with `nonplanar` is expected non-planar, everything else planar.
//! The runner parses every file, queries the tester, and accumulates the
//! outcome into a [`SuiteReport`] returned to the caller; nothing is kept in
//! process-wide state and nothing is printed, mismatches are only logged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algs::is_planar;
use crate::error::PlanarityError;
use crate::io::dimacs::read_dimacs_file;

/// One file whose reported verdict disagreed with its expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteFailure {
    pub file: String,
    pub vertex_count: usize,
    pub expected_planar: bool,
    pub reported_planar: bool,
}

/// Accumulated outcome of one suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<SuiteFailure>,
}

impl SuiteReport {
    /// Fraction of files with the expected verdict, as a percentage.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.passed as f64 * 100.0 / self.total as f64
        }
    }

    /// The mismatching file with the fewest vertices, if any mismatched.
    pub fn smallest_failure(&self) -> Option<&SuiteFailure> {
        self.failures.iter().min_by_key(|f| f.vertex_count)
    }
}

/// Run the tester over every `*.dimacs` file in `dir`.
///
/// Files are visited in name order so the report is reproducible. Any file
/// that fails to parse aborts the run with its error.
pub fn run_suite<P: AsRef<Path>>(dir: P) -> Result<SuiteReport, PlanarityError> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir)
        .map_err(|e| PlanarityError::Io(format!("failed to read {}: {e}", dir.display())))?;

    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "dimacs"))
        .collect();
    files.sort();

    let mut report = SuiteReport::default();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let expected_planar = !name.starts_with("nonplanar");
        let graph = read_dimacs_file(&path)?;
        let reported_planar = is_planar(&graph)?;

        report.total += 1;
        if reported_planar == expected_planar {
            report.passed += 1;
        } else {
            log::warn!(
                "{name}: reported {reported_planar}, expected {expected_planar} \
                 ({:.2}% correct so far)",
                report.passed as f64 * 100.0 / report.total as f64
            );
            report.failures.push(SuiteFailure {
                file: name,
                vertex_count: graph.vertex_count(),
                expected_planar,
                reported_planar,
            });
        }
    }
    Ok(report)
}

/// Parse one edge-list file and return its verdict.
pub fn run_file<P: AsRef<Path>>(path: P) -> Result<bool, PlanarityError> {
    let graph = read_dimacs_file(path)?;
    is_planar(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_fully_passing() {
        let report = SuiteReport::default();
        assert_eq!(report.pass_rate(), 100.0);
        assert!(report.smallest_failure().is_none());
    }

    #[test]
    fn smallest_failure_picks_fewest_vertices() {
        let failure = |file: &str, vertex_count| SuiteFailure {
            file: file.into(),
            vertex_count,
            expected_planar: true,
            reported_planar: false,
        };
        let report = SuiteReport {
            total: 3,
            passed: 1,
            failures: vec![failure("big.dimacs", 40), failure("small.dimacs", 6)],
        };
        assert_eq!(report.smallest_failure().unwrap().file, "small.dimacs");
        assert!((report.pass_rate() - 100.0 / 3.0).abs() < 1e-9);
    }
}
