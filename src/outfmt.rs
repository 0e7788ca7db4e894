//! Resolving a BLAST `-outfmt` specification into column names.

use std::fmt;

use crate::errors::*;
use crate::field::*;
use crate::parse_utils::*;

/// Shorthand token for the 12 standard tabular fields.
pub const STD_TOKEN: &str = "std";

/// Tokens containing this are output format version markers and carry no column.
pub const VERSION_MARKER: &str = "6";

/// The ordered columns of a tabular hit table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutFmt {
    fields: Vec<Field>,
}

impl OutFmt {
    /// Resolve a format specification such as `"6 std"` or `"6 qseqid sseqid evalue"`.
    ///
    /// `std` expands to [`STD_FIELDS`] in place, and every token containing
    /// [`VERSION_MARKER`] is dropped. The remaining tokens keep their order.
    pub fn parse(spec: impl AsRef<str>) -> Result<Self> {
        let raw = spec.as_ref();
        let spec = strip_quotes(raw);
        let mut fields = Vec::new();

        for token in spec.split_ascii_whitespace() {
            if token == STD_TOKEN {
                fields.extend_from_slice(&STD_FIELDS);
                continue;
            }

            if token.contains(VERSION_MARKER) {
                continue;
            }

            let name = check_valid_name(token).ok_or_else(|| Error::InvalidField {
                string: token.to_owned(),
                context: raw.to_owned(),
            })?;
            fields.push(Field::from_token(name));
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn position(&self, field: &Field) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.as_str())
    }
}

impl fmt::Display for OutFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
