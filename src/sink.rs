/// Destination for diagnostic text lines.
pub trait DiagnosticSink {
    fn write_line(&mut self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

/// Writes each line, CRLF terminated, to an [`embedded_io::Write`] such as a UART.
///
/// Write errors are dropped.
pub struct IoSink<W> {
    writer: W,
}

impl<W: embedded_io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> DiagnosticSink for IoSink<W> {
    fn write_line(&mut self, line: &str) {
        let _ = self.writer.write_all(line.as_bytes());
        let _ = self.writer.write_all(b"\r\n");
    }
}

/// Prints lines through the global `defmt` logger.
#[cfg(feature = "defmt")]
#[derive(Copy, Clone, Debug, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl DiagnosticSink for DefmtSink {
    fn write_line(&mut self, line: &str) {
        defmt::println!("{=str}", line);
    }
}
