use crate::errors::*;
use crate::field::Field;
use crate::hit_table::NamedHitTable;

pub struct ThresholdOp {
    e_cutoff: f64,
}

impl ThresholdOp {
    const NAME: &'static str = "ThresholdOp";

    /// Keep hits whose e-value is at or below the cutoff.
    pub fn new(e_cutoff: f64) -> Self {
        Self { e_cutoff }
    }

    pub fn run(&self, table: NamedHitTable) -> Result<NamedHitTable> {
        let col = table.column(&Field::Evalue, "evalue")?;
        let total = table.len();

        let kept = table.retain_rows(|row, record| {
            let value = record.get(col).unwrap_or_default().trim();
            let evalue = value.parse::<f64>().map_err(|_| Error::ParseValue {
                field: Field::Evalue.to_string(),
                value: value.to_owned(),
                row,
            })?;
            // NaN never passes
            Ok(evalue <= self.e_cutoff)
        })?;

        log::debug!(
            "{}: kept {} of {total} hits with evalue <= {}",
            Self::NAME,
            kept.len(),
            self.e_cutoff
        );

        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit_table::HitTable;
    use crate::outfmt::OutFmt;

    fn named(input: &str, outfmt: &str) -> NamedHitTable {
        HitTable::from_reader(input.as_bytes(), false)
            .unwrap()
            .with_columns(OutFmt::parse(outfmt).unwrap())
            .unwrap()
    }

    #[test]
    fn cutoff_is_inclusive() {
        let table = named("A\t1e-5\nB\t0.00001\nC\t0.0001\n", "6 qseqid evalue");
        let kept = ThresholdOp::new(1e-5).run(table).unwrap();
        let ids = kept.rows().iter().map(|r| &r[0]).collect::<Vec<_>>();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn keeps_rows_in_order_and_unmodified() {
        let table = named(
            "A\tx\t0.001\t55.1\nB\ty\t10\t20.0\nC\tz\t0.0\t99.9\n",
            "6 qseqid sseqid evalue bitscore",
        );
        let kept = ThresholdOp::new(1.0).run(table).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.rows()[0].iter().collect::<Vec<_>>(), ["A", "x", "0.001", "55.1"]);
        assert_eq!(&kept.rows()[1][0], "C");
    }

    #[test]
    fn nan_evalue_is_never_kept() {
        let table = named("A\tNaN\n", "6 qseqid evalue");
        assert!(ThresholdOp::new(f64::INFINITY).run(table).unwrap().is_empty());
    }

    #[test]
    fn unparsable_evalue_is_reported() {
        let table = named("A\t0.1\nB\tlow\n", "6 qseqid evalue");
        let err = ThresholdOp::new(1.0).run(table).unwrap_err();
        assert!(matches!(err, Error::ParseValue { row: 1, ref value, .. } if value == "low"));
    }

    #[test]
    fn evalue_column_is_required() {
        let table = named("A\tx\n", "6 qseqid sseqid");
        assert!(matches!(
            ThresholdOp::new(1.0).run(table),
            Err(Error::MissingField { field: "evalue", .. })
        ));
    }
}
