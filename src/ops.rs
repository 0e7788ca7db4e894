//! Ops that load, filter, and write hits and query records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::{write::GzEncoder, Compression};

mod threshold_op;
pub use threshold_op::*;

mod input_fasta_op;
pub use input_fasta_op::*;

mod output_fasta_op;
pub use output_fasta_op::*;

mod output_tsv_op;
pub use output_tsv_op::*;

/// Buffered output, gzip-compressed on request, that must be finished explicitly.
pub(crate) enum OutputWriter<'writer> {
    Plain(BufWriter<Box<dyn Write + Send + 'writer>>),
    Gz(BufWriter<GzEncoder<Box<dyn Write + Send + 'writer>>>),
}

impl<'writer> OutputWriter<'writer> {
    pub(crate) fn plain(writer: impl Write + Send + 'writer) -> Self {
        let writer: Box<dyn Write + Send + 'writer> = Box::new(writer);
        Self::Plain(BufWriter::new(writer))
    }

    pub(crate) fn gzip(writer: impl Write + Send + 'writer) -> Self {
        let writer: Box<dyn Write + Send + 'writer> = Box::new(writer);
        Self::Gz(BufWriter::new(GzEncoder::new(writer, Compression::default())))
    }

    /// Create the file and its parent directories. Paths ending in ".gz" are compressed.
    pub(crate) fn create(file_path: &Path) -> io::Result<Self> {
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(file_path)?;
        if file_path.extension().is_some_and(|ext| ext == "gz") {
            Ok(Self::gzip(file))
        } else {
            Ok(Self::plain(file))
        }
    }

    /// Write out everything still buffered, including the gzip trailer.
    pub(crate) fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut w) => w.flush(),
            Self::Gz(w) => {
                let encoder = w.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

impl Write for OutputWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(w) => w.write(buf),
            Self::Gz(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(w) => w.flush(),
            Self::Gz(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::MultiGzDecoder;

    use super::*;

    // accepts writes until the first flush, like a disk that fills up once synced
    struct FullAfterFlush<'a> {
        buf: &'a mut Vec<u8>,
        full: bool,
    }

    impl Write for FullAfterFlush<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.full {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.full = true;
            Ok(())
        }
    }

    struct AlwaysFull;

    impl Write for AlwaysFull {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn gzip_trailer_is_written_before_the_final_flush() {
        let mut out = Vec::new();
        let mut writer = OutputWriter::gzip(FullAfterFlush {
            buf: &mut out,
            full: false,
        });
        writer.write_all(b">q1\nACGT\n").unwrap();
        writer.finish().unwrap();

        let mut decoded = String::new();
        MultiGzDecoder::new(&out[..])
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, ">q1\nACGT\n");
    }

    #[test]
    fn gzip_finish_reports_write_failures() {
        let mut writer = OutputWriter::gzip(AlwaysFull);
        writer.write_all(b"qseqid\tevalue\n").unwrap();
        assert!(writer.finish().is_err());
    }

    #[test]
    fn plain_finish_reports_write_failures() {
        let mut writer = OutputWriter::plain(AlwaysFull);
        writer.write_all(b"qseqid\tevalue\n").unwrap();
        assert!(writer.finish().is_err());
    }
}
