use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Timings for one iteration of the experiment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IterationTimes {
    /// Sequential product computed for the persisted reference.
    pub reference: Duration,
    pub parallel: Duration,
    pub sequential: Duration,
}

/// Running totals across iterations.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    iterations: usize,
    total: IterationTimes,
}

impl RunSummary {
    pub fn record(&mut self, times: &IterationTimes) {
        self.iterations += 1;
        self.total.reference += times.reference;
        self.total.parallel += times.parallel;
        self.total.sequential += times.sequential;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Mean reference time in seconds.
    pub fn average_reference(&self) -> f64 {
        self.average(self.total.reference)
    }

    /// Mean row-parallel time in seconds.
    pub fn average_parallel(&self) -> f64 {
        self.average(self.total.parallel)
    }

    /// Mean sequential time in seconds.
    pub fn average_sequential(&self) -> f64 {
        self.average(self.total.sequential)
    }

    fn average(&self, total: Duration) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        total.as_secs_f64() / self.iterations as f64
    }
}

/// Human-readable timing report.
///
/// Each entry is flushed as soon as it is written, so a run that stops on a
/// validation failure still leaves the completed iterations on disk.
pub struct Report<W: Write> {
    out: W,
}

impl Report<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Report::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Report { out }
    }

    /// Append the block for a 1-based iteration index.
    pub fn write_iteration(&mut self, index: usize, times: &IterationTimes) -> io::Result<()> {
        writeln!(self.out, "Iteration {}", index)?;
        writeln!(
            self.out,
            "Reference multiplication time: {:.4} seconds",
            times.reference.as_secs_f64()
        )?;
        writeln!(
            self.out,
            "Row-parallel multiplication time: {:.4} seconds",
            times.parallel.as_secs_f64()
        )?;
        writeln!(
            self.out,
            "Sequential multiplication time: {:.4} seconds",
            times.sequential.as_secs_f64()
        )?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn write_averages(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Average times over {} iterations",
            summary.iterations()
        )?;
        writeln!(
            self.out,
            "Average reference multiplication time: {:.4} seconds",
            summary.average_reference()
        )?;
        writeln!(
            self.out,
            "Average row-parallel multiplication time: {:.4} seconds",
            summary.average_parallel()
        )?;
        writeln!(
            self.out,
            "Average sequential multiplication time: {:.4} seconds",
            summary.average_sequential()
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn times(reference_ms: u64, parallel_ms: u64, sequential_ms: u64) -> IterationTimes {
        IterationTimes {
            reference: Duration::from_millis(reference_ms),
            parallel: Duration::from_millis(parallel_ms),
            sequential: Duration::from_millis(sequential_ms),
        }
    }

    #[test]
    fn test_summary_averages() {
        let mut summary = RunSummary::default();
        summary.record(&times(100, 100, 50));
        summary.record(&times(300, 300, 150));
        assert_eq!(summary.iterations(), 2);
        assert_relative_eq!(summary.average_reference(), 0.2, epsilon = 1e-9);
        assert_relative_eq!(summary.average_parallel(), 0.2, epsilon = 1e-9);
        assert_relative_eq!(summary.average_sequential(), 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::default();
        assert_eq!(summary.average_parallel(), 0.0);
    }

    #[test]
    fn test_report_layout() {
        let mut report = Report::new(Vec::new());
        let mut summary = RunSummary::default();
        let t = times(1500, 250, 125);
        summary.record(&t);
        report.write_iteration(1, &t).unwrap();
        report.write_averages(&summary).unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "Iteration 1\n\
             Reference multiplication time: 1.5000 seconds\n\
             Row-parallel multiplication time: 0.2500 seconds\n\
             Sequential multiplication time: 0.1250 seconds\n\
             \n\
             Average times over 1 iterations\n\
             Average reference multiplication time: 1.5000 seconds\n\
             Average row-parallel multiplication time: 0.2500 seconds\n\
             Average sequential multiplication time: 0.1250 seconds\n"
        );
    }
}
