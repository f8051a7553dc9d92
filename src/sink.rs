//! Output destinations a [`StopClock`](crate::StopClock) can report to.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};

/// A writable destination for duration reports.
///
/// `can_write` is checked once, when the clock is constructed. Implement it
/// for sinks that can exist in a read-only state.
pub trait Sink: Write {
    fn can_write(&self) -> bool {
        true
    }
}

impl Sink for Vec<u8> {}
impl Sink for Cursor<Vec<u8>> {}
impl Sink for Cursor<&mut Vec<u8>> {}
impl Sink for io::Sink {}
impl Sink for io::Stdout {}
impl Sink for io::Stderr {}
impl Sink for io::StdoutLock<'_> {}
impl Sink for io::StderrLock<'_> {}

impl Sink for File {
    /// Probes the handle with an empty write; a read-only handle rejects it.
    fn can_write(&self) -> bool {
        let mut file: &Self = self;
        file.write(&[]).is_ok_and(|written| written == 0)
    }
}

impl<S: Sink> Sink for BufWriter<S> {
    fn can_write(&self) -> bool {
        self.get_ref().can_write()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn can_write(&self) -> bool {
        (**self).can_write()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn can_write(&self) -> bool {
        (**self).can_write()
    }
}
