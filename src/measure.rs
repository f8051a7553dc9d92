//! Stateless helpers that time a single invocation of a closure.
//!
//! Failures are never timed: a panic unwinds straight through, and
//! [`try_invoke`] hands an `Err` back untouched without the elapsed time.

use std::time::Duration;

use stopclock_utils::Stopwatch;
use tracing::trace;

/// Runs `work` once and returns its output together with how long it took.
pub fn invoke<F, T>(work: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let mut stopwatch = Stopwatch::start_new();
    let output = work();
    let elapsed = stopwatch.stop();
    trace!(target: "stopclock::measure", ?elapsed, "invocation finished");
    (output, elapsed)
}

/// Runs `work` once for its side effects and returns how long it took.
pub fn invoke_unit<F>(work: F) -> Duration
where
    F: FnOnce(),
{
    invoke(work).1
}

/// Runs `work` once, storing the elapsed time in `elapsed` and returning the output.
///
/// `elapsed` is left untouched if `work` panics.
pub fn invoke_into<F, T>(work: F, elapsed: &mut Duration) -> T
where
    F: FnOnce() -> T,
{
    let (output, measured) = invoke(work);
    *elapsed = measured;
    output
}

/// Runs a fallible `work` once. On success returns the value and the elapsed
/// time; on failure the error is propagated and the timing is dropped.
///
/// # Errors
///
/// Returns the error produced by `work`, unchanged.
pub fn try_invoke<F, T, E>(work: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let (output, elapsed) = invoke(work);
    output.map(|value| (value, elapsed))
}
