//! Elapsed-time measurement.
//!
//! [`measure`] times a single closure call. [`StopClock`] times a scope and
//! writes a `"Title Duration: hh:mm:ss.fffffff"` line to a sink when the
//! scope ends.

pub mod error;
pub mod format;
pub mod measure;
pub mod sink;
pub mod stop_clock;

pub use crate::error::{ClockError, Result};
pub use crate::format::{FormattedDuration, format_duration};
pub use crate::measure::{invoke, invoke_into, invoke_unit, try_invoke};
pub use crate::sink::Sink;
pub use crate::stop_clock::{StopClock, StopClockBuilder};
pub use stopclock_utils::{Stopwatch, init_logging};
