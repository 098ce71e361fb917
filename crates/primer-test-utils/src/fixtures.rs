//! Reusable `io::Write` fixtures.
//!
//! - [`LineCapture`]: collects everything written, split into lines.
//! - [`FailingWriter`]: accepts a fixed number of writes, then fails.

use std::io::{self, Write};

/// Collects written bytes in memory.
#[derive(Default)]
pub struct LineCapture {
    bytes: Vec<u8>,
}

impl LineCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Everything written so far, one entry per line, terminators removed.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for LineCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts `succeed_count` calls to `write`, then fails every call with
/// `BrokenPipe`.
pub struct FailingWriter {
    succeed_count: usize,
    calls: usize,
}

impl FailingWriter {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// Number of `write` calls made, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls > self.succeed_count {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "writer closed"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
