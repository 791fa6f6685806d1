use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;
pub const STMT_BUFFER_COUNT: usize = 100;

/// Line-oriented statement sink.
///
/// Each statement is written followed by a newline; the buffer is flushed
/// every [`STMT_BUFFER_COUNT`] statements so output streams steadily.
pub struct StatementWriter<W: Write> {
    writer: BufWriter<W>,
    write_count: usize,
    max_stmt_buffer: usize,
    total: u64,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
            write_count: 0,
            max_stmt_buffer: STMT_BUFFER_COUNT,
            total: 0,
        }
    }

    pub fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        self.writer.write_all(stmt.as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.total += 1;
        self.write_count += 1;
        if self.write_count >= self.max_stmt_buffer {
            self.write_count = 0;
            self.writer.flush()?;
        }

        Ok(())
    }

    /// Number of statements written so far
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.write_count = 0;
        self.writer.flush()
    }

    /// Flush and hand back the underlying sink
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl StatementWriter<Box<dyn Write>> {
    /// Writer for the given file, or stdout when `path` is `None`
    pub fn open(path: Option<&Path>) -> std::io::Result<Self> {
        let inner: Box<dyn Write> = match path {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(std::io::stdout()),
        };
        Ok(Self::new(inner))
    }
}
