use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::*;
use crate::hit_table::NamedHitTable;
use crate::ops::OutputWriter;

pub struct OutputTsvOp<'writer> {
    writer: csv::Writer<OutputWriter<'writer>>,
    origin: String,
}

impl<'writer> OutputTsvOp<'writer> {
    const NAME: &'static str = "OutputTsvOp";

    /// Output hits as UTF-8 tab-separated values to a file, gzip-compressed if it ends in `.gz`.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let path = file.as_ref();
        let origin = path.display().to_string();
        let writer = OutputWriter::create(path).map_err(|e| Error::FileIo {
            file: origin.clone(),
            source: Box::new(e),
        })?;

        Ok(Self::new(writer, origin))
    }

    /// Output hits as tab-separated values to a `Write`r.
    pub fn from_writer(writer: impl Write + Send + 'writer) -> Self {
        Self::new(OutputWriter::plain(writer), String::from("bytes"))
    }

    fn new(writer: OutputWriter<'writer>, origin: String) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);

        Self { writer, origin }
    }

    /// Write a header of column names, then every row unmodified. Returns the number of rows.
    pub fn write_table(self, table: &NamedHitTable) -> Result<usize> {
        let Self { mut writer, origin } = self;
        let to_err = |e: std::io::Error| Error::FileIo {
            file: origin.clone(),
            source: Box::new(e),
        };

        write_rows(&mut writer, table).map_err(|e| Error::FileIo {
            file: origin.clone(),
            source: Box::new(e),
        })?;
        writer
            .into_inner()
            .map_err(|e| to_err(std::io::Error::new(e.error().kind(), e.error().to_string())))?
            .finish()
            .map_err(to_err)?;

        log::debug!(
            "{}: wrote {} hits to \"{}\"",
            Self::NAME,
            table.len(),
            origin
        );
        Ok(table.len())
    }

    /// Create an empty marker file, truncating anything already there.
    pub fn touch(file: impl AsRef<Path>) -> Result<()> {
        let path = file.as_ref();
        let to_err = |e: std::io::Error| Error::FileIo {
            file: path.display().to_string(),
            source: Box::new(e),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(to_err)?;
        }
        File::create(path).map_err(to_err)?;
        Ok(())
    }
}

fn write_rows(writer: &mut csv::Writer<impl Write>, table: &NamedHitTable) -> csv::Result<()> {
    writer.write_record(table.outfmt().names())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
