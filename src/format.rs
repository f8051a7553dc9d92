//! Rendering of elapsed durations as `[d.]hh:mm:ss[.fffffff]`.

use std::fmt;
use std::time::Duration;

const NANOS_PER_TICK: u32 = 100;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Displays a [`Duration`] in the fixed hours:minutes:seconds layout used by reports.
///
/// The fraction has seven digits of 100ns ticks and is left out when it is zero.
/// A day prefix appears only for durations of a day or longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedDuration(pub Duration);

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let days = secs / SECS_PER_DAY;
        let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
        let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = secs % SECS_PER_MINUTE;
        let ticks = self.0.subsec_nanos() / NANOS_PER_TICK;

        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")?;
        if ticks > 0 {
            write!(f, ".{ticks:07}")?;
        }
        Ok(())
    }
}

pub fn format_duration(duration: Duration) -> String {
    FormattedDuration(duration).to_string()
}

/// Builds a report line, without the trailing newline.
pub fn report_line(title: Option<&str>, elapsed: Duration) -> String {
    let elapsed = FormattedDuration(elapsed);
    title.map_or_else(
        || format!("Duration: {elapsed}"),
        |title| format!("{title} Duration: {elapsed}"),
    )
}
