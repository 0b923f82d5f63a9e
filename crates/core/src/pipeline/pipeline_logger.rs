use std::time::Instant;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Decouples the use case from its output mechanism so the CLI can print
/// progress lines while tests record them.
pub trait PipelineLogger {
    /// Log a human-readable status line.
    fn info(&mut self, message: &str);

    /// Log a recoverable or fatal problem.
    fn warn(&mut self, message: &str);

    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Emit an end-of-pipeline summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn info(&mut self, _message: &str) {}
    fn warn(&mut self, _message: &str) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
}

/// CLI logger: status lines to stdout, problems to stderr.
///
/// Stage timings are kept in call order and reported through the `log`
/// crate by [`PipelineLogger::summary`], so they only show with `RUST_LOG`.
pub struct StdoutPipelineLogger {
    timings: Vec<(String, f64)>,
    start_time: Instant,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no stage was timed.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Pipeline summary ({:.1}ms total):", elapsed_ms)];
        for (stage, ms) in &self.timings {
            lines.push(format!("  {stage:<10} {ms:>8.1}ms"));
        }
        Some(lines.join("\n"))
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings.push((stage.to_string(), duration_ms));
    }

    fn summary(&self) {
        if let Some(s) = self.summary_string() {
            log::info!("{s}");
        }
    }
}
