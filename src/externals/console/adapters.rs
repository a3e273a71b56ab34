use std::io::{self, Stdout, Write};

use crate::internals::poller::ports::ReportPort;

/// Writes each report line to a `Write` target and flushes straight away so
/// lines show up while the poller sleeps.
pub struct EmitToWriterAdapter<W: Write> {
    writer: W,
}

pub type EmitToStdoutAdapter = EmitToWriterAdapter<Stdout>;

impl<W: Write> EmitToWriterAdapter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportPort for EmitToWriterAdapter<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}
