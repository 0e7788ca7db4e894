use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use blastsplit::config::{DEFAULT_E_CUTOFF, DEFAULT_OUTFMT};
use blastsplit::logging::init_logger;
use blastsplit::ops::DEFAULT_LINE_WIDTH;
use blastsplit::{parse_blast, SplitConfig};

#[derive(Parser)]
#[command(name = "blastsplit")]
#[command(about = "Split query sequences into mapped and unmapped sets from BLAST tabular results")]
#[command(after_help = "EXAMPLES:
  # Keep queries without a hit at or below 1e-5 for the next search
  blastsplit --blast-result hits.tsv --query query.fa \\
    --mapped mapped.tsv --unmapped unmapped.fa --e-cutoff 1e-5 --outfmt '6 std'

  # Read all parameters from a rule file with input, output and params groups
  blastsplit --config rule.yaml")]
struct Args {
    /// YAML file with `input`, `output` and `params` groups
    #[arg(long, conflicts_with_all = ["blast_result", "query", "mapped", "unmapped"])]
    config: Option<PathBuf>,

    /// Tab-separated BLAST hit table
    #[arg(short = 'b', long, required_unless_present = "config")]
    blast_result: Option<PathBuf>,

    /// FASTA file with the query sequences
    #[arg(short = 'q', long, required_unless_present = "config")]
    query: Option<PathBuf>,

    /// Output TSV for hits at or below the cutoff
    #[arg(short = 'm', long, required_unless_present = "config")]
    mapped: Option<PathBuf>,

    /// Output FASTA for queries without such a hit
    #[arg(short = 'u', long, required_unless_present = "config")]
    unmapped: Option<PathBuf>,

    /// Inclusive e-value cutoff
    #[arg(short = 'e', long, default_value_t = DEFAULT_E_CUTOFF)]
    e_cutoff: f64,

    /// Output format specification the hit table was produced with
    #[arg(short = 'f', long, default_value = DEFAULT_OUTFMT)]
    outfmt: String,

    /// The hit table starts with a header row
    #[arg(long)]
    has_header: bool,

    /// FASTA sequence line width, 0 for no wrapping
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: usize,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<SplitConfig> {
        if let Some(file) = self.config {
            return SplitConfig::from_yaml_file(&file)
                .with_context(|| format!("loading configuration from {}", file.display()));
        }

        // clap guarantees these when --config is absent
        let (Some(blast_result), Some(query), Some(mapped), Some(unmapped)) =
            (self.blast_result, self.query, self.mapped, self.unmapped)
        else {
            anyhow::bail!("--blast-result, --query, --mapped and --unmapped are required");
        };

        Ok(
            SplitConfig::new(blast_result, query, mapped, unmapped, self.e_cutoff, self.outfmt)
                .with_header(self.has_header)
                .with_line_width(self.line_width),
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = args.into_config()?;
    let summary = parse_blast(&config).with_context(|| {
        format!(
            "splitting {} by hits in {}",
            config.query.display(),
            config.blast_result.display()
        )
    })?;

    log::info!(
        "Wrote {} mapped hits to {} and {} unmapped queries to {}",
        summary.mapped_hits,
        config.mapped.display(),
        summary.unmapped_queries,
        config.unmapped.display()
    );

    Ok(())
}
