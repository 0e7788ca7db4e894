//! Loading tabular alignment hits.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::StringRecord;
use flate2::read::MultiGzDecoder;
use rustc_hash::FxHashSet;

use crate::errors::*;
use crate::field::*;
use crate::outfmt::*;

/// Prefix of the comment lines BLAST writes with `-outfmt 7`.
pub const COMMENT_PREFIX: &str = "# ";

// ids may start with '#', BLAST comments are single-cell lines starting with "# "
fn is_comment(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].starts_with(COMMENT_PREFIX)
}

/// Tab-separated hits with positional, unnamed columns.
#[derive(Debug, Clone, Default)]
pub struct HitTable {
    rows: Vec<StringRecord>,
    num_columns: usize,
}

impl HitTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load hits from a tab-separated file, gzip-compressed if it ends in `.gz`.
    ///
    /// A file that does not exist, or that holds no data rows, loads as an empty table.
    /// BLAST comment lines (starting with `# `) are skipped.
    pub fn from_file(file: impl AsRef<Path>, has_header: bool) -> Result<Self> {
        let path = file.as_ref();
        let origin = path.display().to_string();

        let f = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Hit table \"{origin}\" does not exist, treating it as empty");
                return Ok(Self::empty());
            }
            Err(e) => {
                return Err(Error::FileIo {
                    file: origin,
                    source: Box::new(e),
                })
            }
        };

        if path.extension().is_some_and(|ext| ext == "gz") {
            Self::read(MultiGzDecoder::new(BufReader::new(f)), has_header, &origin)
        } else {
            Self::read(f, has_header, &origin)
        }
    }

    /// Load hits from an arbitrary `Read`er.
    pub fn from_reader(reader: impl io::Read, has_header: bool) -> Result<Self> {
        Self::read(reader, has_header, "bytes")
    }

    fn read(reader: impl io::Read, has_header: bool, origin: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let mut rows: Vec<StringRecord> = Vec::new();
        let mut skip_header = has_header;

        for result in rdr.records() {
            let record = result.map_err(|e| Error::ParseTable {
                origin: origin.to_owned(),
                row: rows.len(),
                source: Box::new(e),
            })?;

            if is_comment(&record) {
                continue;
            }

            if skip_header {
                skip_header = false;
                continue;
            }

            if let Some(first) = rows.first() {
                if record.len() != first.len() {
                    return Err(Error::ParseTable {
                        origin: origin.to_owned(),
                        row: rows.len(),
                        source: format!(
                            "expected {} columns, found {}",
                            first.len(),
                            record.len()
                        )
                        .into(),
                    });
                }
            }

            rows.push(record);
        }

        let num_columns = rows.first().map(|r| r.len()).unwrap_or(0);
        Ok(Self { rows, num_columns })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Name the columns positionally.
    pub fn with_columns(self, outfmt: OutFmt) -> Result<NamedHitTable> {
        NamedHitTable::new(self, outfmt)
    }
}

/// A hit table whose columns are named by an [`OutFmt`] of matching width.
#[derive(Debug, Clone)]
pub struct NamedHitTable {
    table: HitTable,
    outfmt: OutFmt,
}

impl NamedHitTable {
    pub fn new(table: HitTable, outfmt: OutFmt) -> Result<Self> {
        if outfmt.len() != table.num_columns() {
            return Err(Error::ColumnMismatch {
                expected: outfmt.len(),
                found: table.num_columns(),
            });
        }

        Ok(Self { table, outfmt })
    }

    pub fn outfmt(&self) -> &OutFmt {
        &self.outfmt
    }

    pub fn rows(&self) -> &[StringRecord] {
        self.table.rows()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Column index of a field the caller cannot do without.
    pub fn column(&self, field: &Field, name: &'static str) -> Result<usize> {
        self.outfmt
            .position(field)
            .ok_or_else(|| Error::MissingField {
                field: name,
                outfmt: self.outfmt.to_string(),
            })
    }

    /// Keep only the rows for which `keep` returns true.
    pub(crate) fn retain_rows(
        self,
        mut keep: impl FnMut(usize, &StringRecord) -> Result<bool>,
    ) -> Result<Self> {
        let mut rows = Vec::with_capacity(self.table.rows.len());
        for (i, row) in self.table.rows.into_iter().enumerate() {
            if keep(i, &row)? {
                rows.push(row);
            }
        }

        Ok(Self {
            table: HitTable {
                rows,
                num_columns: self.table.num_columns,
            },
            outfmt: self.outfmt,
        })
    }

    /// Distinct query identifiers among the rows.
    pub fn query_ids(&self) -> Result<FxHashSet<Vec<u8>>> {
        let col = self.column(&Field::Qseqid, "qseqid")?;
        Ok(self
            .rows()
            .iter()
            .filter_map(|r| r.get(col))
            .map(|id| id.as_bytes().to_owned())
            .collect())
    }
}
