//! Scoped stop clock that writes a single duration line when it goes out of scope.
//!
//! ```no_run
//! use stopclock::StopClock;
//!
//! # fn main() -> stopclock::Result<()> {
//! {
//!     let _clock = StopClock::with_title(std::io::stderr(), "Optional Title")?;
//!     // do stuff
//! }
//! // "Optional Title Duration: 00:00:00.0001234" has been written to stderr
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use stopclock_utils::Stopwatch;
use tracing::{debug, trace, warn};

use crate::error::{ClockError, Result};
use crate::format::report_line;
use crate::sink::Sink;

/// Times the enclosing scope and reports the elapsed time to a sink exactly once.
///
/// The report is written by [`finish`](Self::finish), [`dispose`](Self::dispose),
/// or on drop, whichever comes first. Only the explicit paths can return a
/// write failure; a failure on drop is logged instead.
pub struct StopClock<S: Sink> {
    title: Option<String>,
    sink: S,
    stopwatch: Stopwatch,
    disposed: bool,
}

impl<S: Sink> StopClock<S> {
    /// Starts a clock without a title.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Unwritable`] if the sink rejects writes.
    pub fn new(sink: S) -> Result<Self> {
        Self::start(sink, None)
    }

    /// Starts a clock whose report line is prefixed with `title`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Unwritable`] if the sink rejects writes.
    pub fn with_title(sink: S, title: impl Into<String>) -> Result<Self> {
        Self::start(sink, Some(title.into()))
    }

    pub const fn builder() -> StopClockBuilder<S> {
        StopClockBuilder::new()
    }

    fn start(sink: S, title: Option<String>) -> Result<Self> {
        if !sink.can_write() {
            return Err(ClockError::Unwritable);
        }

        trace!(?title, "stop clock started");
        Ok(Self {
            title,
            sink,
            stopwatch: Stopwatch::start_new(),
            disposed: false,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Current elapsed time. Does not stop the clock.
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Stops the clock and returns the final elapsed time. Repeated calls
    /// return the same value.
    pub fn stop(&mut self) -> Duration {
        let was_running = self.stopwatch.is_running();
        let elapsed = self.stopwatch.stop();
        if was_running {
            trace!(title = ?self.title, ?elapsed, "stop clock stopped");
        }
        elapsed
    }

    /// Writes the current elapsed time to the sink and flushes it.
    ///
    /// This does not stop or dispose the clock, so the final report is still
    /// written on scope exit.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to or flushing the sink.
    pub fn report(&mut self) -> io::Result<()> {
        let line = report_line(self.title.as_deref(), self.stopwatch.elapsed());
        writeln!(self.sink, "{line}")?;
        self.sink.flush()
    }

    /// Stops the clock and writes the final report. Only the first call does
    /// anything; later calls return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Io`] if the report could not be written. The clock
    /// is disposed either way.
    pub fn dispose(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        // set first so a failed write is not retried from drop
        self.disposed = true;

        let elapsed = self.stop();
        self.report()?;
        debug!(title = ?self.title, ?elapsed, "duration reported");
        Ok(())
    }

    /// Disposes the clock and returns the final elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Io`] if the report could not be written.
    pub fn finish(mut self) -> Result<Duration> {
        self.dispose()?;
        Ok(self.stopwatch.elapsed())
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<S: Sink> Drop for StopClock<S> {
    fn drop(&mut self) {
        if let Err(err) = self.dispose() {
            warn!(title = ?self.title, error = %err, "failed to write duration report on drop");
        }
    }
}

/// Builder for [`StopClock`]. The clock starts when [`start`](Self::start) is called.
pub struct StopClockBuilder<S: Sink> {
    title: Option<String>,
    sink: Option<S>,
}

impl<S: Sink> StopClockBuilder<S> {
    pub const fn new() -> Self {
        Self {
            title: None,
            sink: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validates the sink and starts the clock.
    ///
    /// # Errors
    ///
    /// Fails with [`ClockError::MissingSink`] if no sink was set and with
    /// [`ClockError::Unwritable`] if the sink rejects writes.
    pub fn start(self) -> Result<StopClock<S>> {
        let sink = self.sink.ok_or(ClockError::MissingSink)?;
        StopClock::start(sink, self.title)
    }
}

impl<S: Sink> Default for StopClockBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
