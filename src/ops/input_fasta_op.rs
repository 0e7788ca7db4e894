use std::path::Path;

use needletail::errors::ParseErrorKind;
use needletail::*;

use crate::errors::*;
use crate::parse_utils::record_id;

/// A query sequence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    name: Vec<u8>,
    seq: Vec<u8>,
}

impl FastaRecord {
    pub fn new(name: impl Into<Vec<u8>>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
        }
    }

    /// The full header line, without the leading `>`.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The header up to the first whitespace.
    pub fn id(&self) -> &[u8] {
        record_id(&self.name)
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }
}

/// Stream records from a FASTA file once, in file order.
pub struct InputFastaOp<'reader> {
    // `None` when the input held no records at all
    reader: Option<Box<dyn FastxReader + 'reader>>,
    origin: String,
    idx: usize,
}

impl<'reader> InputFastaOp<'reader> {
    const NAME: &'static str = "InputFastaOp";

    /// Stream records from an input file. Compressed files are detected automatically.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let path = file.as_ref();
        let origin = path.display().to_string();

        let reader = match parse_fastx_file(path) {
            Ok(r) => Some(r),
            Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => None,
            Err(e) if matches!(e.kind, ParseErrorKind::Io) => {
                return Err(Error::FileIo {
                    file: origin,
                    source: Box::new(e),
                })
            }
            Err(e) => {
                return Err(Error::ParseRecord {
                    origin,
                    idx: 0,
                    source: Box::new(e),
                })
            }
        };

        Ok(Self {
            reader,
            origin,
            idx: 0,
        })
    }

    /// Stream records from an arbitrary `Read`er.
    pub fn from_reader(reader: impl std::io::Read + Send + 'reader) -> Result<Self> {
        let origin = String::from("bytes");

        let reader = match parse_fastx_reader(reader) {
            Ok(r) => Some(r),
            Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => None,
            Err(e) => {
                return Err(Error::ParseRecord {
                    origin,
                    idx: 0,
                    source: Box::new(e),
                })
            }
        };

        Ok(Self {
            reader,
            origin,
            idx: 0,
        })
    }
}

impl<'reader> Iterator for InputFastaOp<'reader> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let idx = self.idx;
        self.idx += 1;

        let result = reader
            .next()?
            .map(|record| FastaRecord::new(record.id(), record.seq().into_owned()));

        match result {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                log::debug!("{}: failed at record {idx} of \"{}\"", Self::NAME, self.origin);
                // a reader that failed once does not recover
                self.reader = None;
                Some(Err(Error::ParseRecord {
                    origin: self.origin.clone(),
                    idx,
                    source: Box::new(e),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_records_in_order() {
        let input = b">A first\nACGT\nAC\n>B\nGGGG\n";
        let records = InputFastaOp::from_reader(&input[..])
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), b"A");
        assert_eq!(records[0].name(), b"A first");
        assert_eq!(records[0].seq(), b"ACGTAC");
        assert_eq!(records[1].id(), b"B");
    }

    #[test]
    fn empty_input_has_no_records() {
        let mut op = InputFastaOp::from_reader(&b""[..]).unwrap();
        assert!(op.next().is_none());
    }

    #[test]
    fn file_with_unknown_format_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.fa");
        std::fs::write(&path, "qseqid\tsseqid\n").unwrap();

        let err = InputFastaOp::from_file(&path).err().unwrap();
        assert!(matches!(err, Error::ParseRecord { idx: 0, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = InputFastaOp::from_file("this/path/does/not/exist.fa")
            .err()
            .unwrap();
        assert!(matches!(err, Error::FileIo { .. }));
    }

    #[test]
    fn malformed_input_is_reported() {
        let res = InputFastaOp::from_reader(&b"not a fasta file\n"[..]);
        let err = match res {
            Ok(op) => op.collect::<Result<Vec<_>>>().unwrap_err(),
            Err(e) => e,
        };
        assert!(matches!(err, Error::ParseRecord { .. }));
    }
}
