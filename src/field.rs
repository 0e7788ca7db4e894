//! Field specifiers of the BLAST tabular output format.

use std::fmt;

macro_rules! fields {
    ($($variant:ident => $token:literal,)*) => {
        /// A single column of a tabular hit table, named by its BLAST `-outfmt` token.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant,)*
            /// A token this crate does not recognize. It is still a valid column name.
            Other(String),
        }

        impl Field {
            pub fn from_token(token: &str) -> Self {
                match token {
                    $($token => Field::$variant,)*
                    other => Field::Other(other.to_owned()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Field::$variant => $token,)*
                    Field::Other(name) => name,
                }
            }
        }
    };
}

fields! {
    Qseqid => "qseqid",
    Qgi => "qgi",
    Qacc => "qacc",
    Qaccver => "qaccver",
    Qlen => "qlen",
    Sseqid => "sseqid",
    Sallseqid => "sallseqid",
    Sgi => "sgi",
    Sacc => "sacc",
    Saccver => "saccver",
    Slen => "slen",
    Qstart => "qstart",
    Qend => "qend",
    Sstart => "sstart",
    Send => "send",
    Qseq => "qseq",
    Sseq => "sseq",
    Evalue => "evalue",
    Bitscore => "bitscore",
    Score => "score",
    Length => "length",
    Pident => "pident",
    Nident => "nident",
    Mismatch => "mismatch",
    Positive => "positive",
    Gapopen => "gapopen",
    Gaps => "gaps",
    Ppos => "ppos",
    Qframe => "qframe",
    Sframe => "sframe",
    Btop => "btop",
    Staxid => "staxid",
    Staxids => "staxids",
    Sscinames => "sscinames",
    Stitle => "stitle",
    Sstrand => "sstrand",
    Qcovs => "qcovs",
    Qcovhsp => "qcovhsp",
}

/// The 12 fields that `std` stands for, in BLAST's fixed order.
pub const STD_FIELDS: [Field; 12] = [
    Field::Qseqid,
    Field::Sseqid,
    Field::Pident,
    Field::Length,
    Field::Mismatch,
    Field::Gapopen,
    Field::Qstart,
    Field::Qend,
    Field::Sstart,
    Field::Send,
    Field::Evalue,
    Field::Bitscore,
];

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_round_trip() {
        for field in STD_FIELDS.iter() {
            assert_eq!(&Field::from_token(field.as_str()), field);
        }
    }

    #[test]
    fn unknown_token_is_kept_verbatim() {
        let field = Field::from_token("customcol");
        assert_eq!(field, Field::Other("customcol".to_owned()));
        assert_eq!(field.to_string(), "customcol");
    }
}
