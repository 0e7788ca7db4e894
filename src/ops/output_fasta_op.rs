use std::io::Write;
use std::path::Path;

use crate::errors::*;
use crate::ops::{FastaRecord, OutputWriter};

/// Sequence line width used when none is configured.
pub const DEFAULT_LINE_WIDTH: usize = 60;

pub struct OutputFastaOp<'writer> {
    writer: OutputWriter<'writer>,
    origin: String,
    line_width: usize,
    written: usize,
}

impl<'writer> OutputFastaOp<'writer> {
    const NAME: &'static str = "OutputFastaOp";

    /// Output records to a file, creating parent directories as needed.
    ///
    /// Sequences are wrapped at `line_width` characters. A width of zero writes each
    /// sequence on a single line.
    pub fn from_file(file: impl AsRef<Path>, line_width: usize) -> Result<Self> {
        let path = file.as_ref();
        let origin = path.display().to_string();
        let writer = OutputWriter::create(path).map_err(|e| Error::FileIo {
            file: origin.clone(),
            source: Box::new(e),
        })?;

        Ok(Self {
            writer,
            origin,
            line_width,
            written: 0,
        })
    }

    /// Output records to a `Write`r.
    pub fn from_writer(writer: impl Write + Send + 'writer, line_width: usize) -> Self {
        Self {
            writer: OutputWriter::plain(writer),
            origin: String::from("bytes"),
            line_width,
            written: 0,
        }
    }

    pub fn write_record(&mut self, record: &FastaRecord) -> Result<()> {
        write_fasta_record(
            &mut self.writer,
            (record.name(), record.seq()),
            self.line_width,
        )
        .map_err(|e| Error::FileIo {
            file: self.origin.clone(),
            source: Box::new(e),
        })?;
        self.written += 1;
        Ok(())
    }

    /// Write out buffered output and return the number of records written.
    pub fn finish(self) -> Result<usize> {
        self.writer.finish().map_err(|e| Error::FileIo {
            file: self.origin.clone(),
            source: Box::new(e),
        })?;
        log::debug!(
            "{}: wrote {} records to \"{}\"",
            Self::NAME,
            self.written,
            self.origin
        );
        Ok(self.written)
    }
}

pub fn write_fasta_record(
    writer: &mut (dyn Write + Send + '_),
    record: (&[u8], &[u8]),
    line_width: usize,
) -> std::io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(record.0)?;
    writer.write_all(b"\n")?;

    if line_width == 0 {
        writer.write_all(record.1)?;
        writer.write_all(b"\n")?;
    } else {
        for line in record.1.chunks(line_width) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[FastaRecord], line_width: usize) -> String {
        let mut out = Vec::new();
        let mut op = OutputFastaOp::from_writer(&mut out, line_width);
        for r in records {
            op.write_record(r).unwrap();
        }
        assert_eq!(op.finish().unwrap(), records.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn wraps_long_sequences() {
        let record = FastaRecord::new(&b"q1 desc"[..], &b"ACGTACGTAC"[..]);
        assert_eq!(render(&[record], 4), ">q1 desc\nACGT\nACGT\nAC\n");
    }

    #[test]
    fn zero_width_writes_one_line() {
        let record = FastaRecord::new(&b"q1"[..], &b"ACGTACGTAC"[..]);
        assert_eq!(render(&[record], 0), ">q1\nACGTACGTAC\n");
    }

    #[test]
    fn empty_sequence_writes_header_only() {
        let record = FastaRecord::new(&b"q1"[..], &b""[..]);
        assert_eq!(render(&[record], DEFAULT_LINE_WIDTH), ">q1\n");
    }
}
