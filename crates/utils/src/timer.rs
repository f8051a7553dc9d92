use std::time::{Duration, Instant};

/// Monotonic stopwatch that accumulates wall-clock time across start/stop cycles.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Set while the stopwatch is running.
    start: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    /// Creates a stopwatch that is already running.
    pub fn start_new() -> Self {
        Self {
            start: Some(Instant::now()),
            accumulated: Duration::ZERO,
        }
    }

    /// Total elapsed time, including the current run if the stopwatch is running.
    pub fn elapsed(&self) -> Duration {
        self.start
            .map_or(self.accumulated, |start| self.accumulated + start.elapsed())
    }

    pub const fn is_running(&self) -> bool {
        self.start.is_some()
    }

    /// Resumes a stopped stopwatch. Does nothing if it is already running.
    pub fn start(&mut self) {
        if self.start.is_none() {
            self.start = Some(Instant::now());
        }
    }

    /// Freezes the stopwatch and returns the final elapsed time.
    ///
    /// Stopping an already stopped stopwatch returns the frozen value unchanged.
    pub fn stop(&mut self) -> Duration {
        if let Some(start) = self.start.take() {
            self.accumulated += start.elapsed();
        }
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_start_new_is_running() {
        let stopwatch = Stopwatch::start_new();
        assert!(stopwatch.is_running());
    }

    #[test]
    fn test_default_is_stopped_and_zero() {
        let stopwatch = Stopwatch::default();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_is_monotonic_while_running() {
        let stopwatch = Stopwatch::start_new();
        let first = stopwatch.elapsed();
        sleep(Duration::from_millis(5));
        let second = stopwatch.elapsed();
        assert!(second >= first);
        assert!(second >= Duration::from_millis(5));
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut stopwatch = Stopwatch::start_new();
        sleep(Duration::from_millis(10));
        let stopped = stopwatch.stop();
        sleep(Duration::from_millis(10));
        assert_eq!(stopwatch.elapsed(), stopped);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut stopwatch = Stopwatch::start_new();
        sleep(Duration::from_millis(5));
        let first = stopwatch.stop();
        sleep(Duration::from_millis(5));
        let second = stopwatch.stop();
        assert_eq!(first, second);
    }

    #[test]
    fn test_start_resumes_and_accumulates() {
        let mut stopwatch = Stopwatch::start_new();
        sleep(Duration::from_millis(10));
        let first = stopwatch.stop();
        sleep(Duration::from_millis(200));
        stopwatch.start();
        sleep(Duration::from_millis(10));
        let total = stopwatch.stop();
        assert!(total >= first + Duration::from_millis(10));
        // the stopped gap must not be counted
        assert!(total < first + Duration::from_millis(200));
    }
}
