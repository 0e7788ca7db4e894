//! Partitioning queries into mapped and unmapped sets.

use rustc_hash::FxHashSet;

use crate::config::SplitConfig;
use crate::errors::*;
use crate::hit_table::HitTable;
use crate::ops::*;
use crate::outfmt::OutFmt;

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Rows in the hit table.
    pub hits: usize,
    /// Rows at or below the cutoff, written to the mapped output.
    pub mapped_hits: usize,
    /// Distinct query identifiers among the mapped hits.
    pub mapped_queries: usize,
    /// Records in the query file.
    pub queries: usize,
    /// Records written to the unmapped output.
    pub unmapped_queries: usize,
}

/// Split the queries named in `config`.
///
/// Hits at or below `e_cutoff` are written to `mapped` as a headed TSV table, and every
/// query record whose identifier has no such hit is written to `unmapped` as FASTA.
/// If the hit table is absent or has no rows, `mapped` is created as an empty file and
/// all queries are unmapped.
pub fn parse_blast(config: &SplitConfig) -> Result<SplitSummary> {
    config.validate()?;

    let table = HitTable::from_file(&config.blast_result, config.has_header)?;
    let mut summary = SplitSummary {
        hits: table.len(),
        ..Default::default()
    };

    let known_ids = if table.is_empty() {
        log::info!(
            "No hits in \"{}\", all queries are unmapped",
            config.blast_result.display()
        );
        OutputTsvOp::touch(&config.mapped)?;
        FxHashSet::default()
    } else {
        let outfmt = OutFmt::parse(&config.outfmt)?;
        log::debug!("Hit table columns: {outfmt}");

        let known = ThresholdOp::new(config.e_cutoff).run(table.with_columns(outfmt)?)?;
        let known_ids = known.query_ids()?;

        summary.mapped_hits = OutputTsvOp::from_file(&config.mapped)?.write_table(&known)?;
        summary.mapped_queries = known_ids.len();
        known_ids
    };

    let input = InputFastaOp::from_file(&config.query)?;
    let output = OutputFastaOp::from_file(&config.unmapped, config.line_width)?;
    let (queries, unmapped) = split_queries(input, &known_ids, output)?;
    summary.queries = queries;
    summary.unmapped_queries = unmapped;

    log::info!(
        "{} of {} hits passed evalue <= {} ({} queries mapped), {} of {} queries unmapped",
        summary.mapped_hits,
        summary.hits,
        config.e_cutoff,
        summary.mapped_queries,
        summary.unmapped_queries,
        summary.queries
    );

    Ok(summary)
}

/// Write every record whose identifier is not in `known_ids`, in input order.
///
/// Returns the number of records read and the number written.
pub fn split_queries<'w>(
    input: impl Iterator<Item = Result<FastaRecord>>,
    known_ids: &FxHashSet<Vec<u8>>,
    mut output: OutputFastaOp<'w>,
) -> Result<(usize, usize)> {
    let mut read = 0;

    for record in input {
        let record = record?;
        read += 1;

        if !known_ids.contains(record.id()) {
            output.write_record(&record)?;
        }
    }

    let written = output.finish()?;
    Ok((read, written))
}
