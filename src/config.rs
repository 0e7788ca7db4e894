//! Parameters of a single split run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::ops::DEFAULT_LINE_WIDTH;

pub const DEFAULT_E_CUTOFF: f64 = 10.0;
pub const DEFAULT_OUTFMT: &str = "6 std";

/// Everything [`parse_blast`](crate::parse_blast) needs, as named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Tab-separated hit table.
    pub blast_result: PathBuf,
    /// FASTA query sequences that were searched.
    pub query: PathBuf,
    /// Destination for hits at or below the cutoff.
    pub mapped: PathBuf,
    /// Destination for queries without such a hit.
    pub unmapped: PathBuf,
    /// Inclusive upper bound on the e-value.
    #[serde(default = "default_e_cutoff")]
    pub e_cutoff: f64,
    /// Format specification the hit table was produced with, e.g. `"6 std"`.
    #[serde(default = "default_outfmt")]
    pub outfmt: String,
    #[serde(default)]
    pub has_header: bool,
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_e_cutoff() -> f64 {
    DEFAULT_E_CUTOFF
}

fn default_outfmt() -> String {
    DEFAULT_OUTFMT.to_owned()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl SplitConfig {
    pub fn new(
        blast_result: impl Into<PathBuf>,
        query: impl Into<PathBuf>,
        mapped: impl Into<PathBuf>,
        unmapped: impl Into<PathBuf>,
        e_cutoff: f64,
        outfmt: impl Into<String>,
    ) -> Self {
        Self {
            blast_result: blast_result.into(),
            query: query.into(),
            mapped: mapped.into(),
            unmapped: unmapped.into(),
            e_cutoff,
            outfmt: outfmt.into(),
            has_header: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Parse a workflow rule layout with `input`, `output` and `params` groups.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str::<RuleConfig>(yaml).map(Self::from)
    }

    pub fn from_yaml_file(file: impl AsRef<Path>) -> Result<Self> {
        let path = file.as_ref();
        let to_err = |e: Box<dyn std::error::Error + Send + Sync>| Error::FileIo {
            file: path.display().to_string(),
            source: e,
        };

        let yaml = std::fs::read_to_string(path).map_err(|e| to_err(Box::new(e)))?;
        Self::from_yaml_str(&yaml).map_err(|e| to_err(Box::new(e)))
    }

    pub fn validate(&self) -> Result<()> {
        // negative cutoffs are valid and map nothing
        if self.e_cutoff.is_nan() {
            return Err(Error::Config(String::from("e_cutoff must be a number, got NaN")));
        }

        if self.mapped == self.unmapped {
            return Err(Error::Config(format!(
                "mapped and unmapped outputs are both \"{}\"",
                self.mapped.display()
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleConfig {
    input: RuleInput,
    output: RuleOutput,
    #[serde(default)]
    params: RuleParams,
}

#[derive(Debug, Deserialize)]
struct RuleInput {
    blast_result: PathBuf,
    query: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RuleOutput {
    mapped: PathBuf,
    unmapped: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RuleParams {
    #[serde(default = "default_e_cutoff")]
    e_cutoff: f64,
    #[serde(default = "default_outfmt")]
    outfmt: String,
    #[serde(default)]
    has_header: bool,
    #[serde(default = "default_line_width")]
    line_width: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            e_cutoff: DEFAULT_E_CUTOFF,
            outfmt: default_outfmt(),
            has_header: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl From<RuleConfig> for SplitConfig {
    fn from(rule: RuleConfig) -> Self {
        Self {
            blast_result: rule.input.blast_result,
            query: rule.input.query,
            mapped: rule.output.mapped,
            unmapped: rule.output.unmapped,
            e_cutoff: rule.params.e_cutoff,
            outfmt: rule.params.outfmt,
            has_header: rule.params.has_header,
            line_width: rule.params.line_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rule_groups() {
        let yaml = "
input:
  blast_result: results/hits.tsv
  query: results/query.fa
output:
  mapped: results/mapped.tsv
  unmapped: results/unmapped.fa
params:
  e_cutoff: 1e-5
  outfmt: '6 qseqid sseqid evalue'
";
        let config = SplitConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            SplitConfig::new(
                "results/hits.tsv",
                "results/query.fa",
                "results/mapped.tsv",
                "results/unmapped.fa",
                1e-5,
                "6 qseqid sseqid evalue",
            )
        );
    }

    #[test]
    fn params_default_when_absent() {
        let yaml = "
input: { blast_result: h.tsv, query: q.fa }
output: { mapped: m.tsv, unmapped: u.fa }
";
        let config = SplitConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.e_cutoff, DEFAULT_E_CUTOFF);
        assert_eq!(config.outfmt, DEFAULT_OUTFMT);
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
        assert!(!config.has_header);
    }

    #[test]
    fn missing_output_is_rejected() {
        let yaml = "input: { blast_result: h.tsv, query: q.fa }\n";
        assert!(SplitConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn validate_rejects_only_nan_cutoffs() {
        let config = SplitConfig::new("h", "q", "m", "u", f64::NAN, DEFAULT_OUTFMT);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        for e_cutoff in [-1.0, 0.0, 1e-5, f64::INFINITY, f64::NEG_INFINITY] {
            let config = SplitConfig::new("h", "q", "m", "u", e_cutoff, DEFAULT_OUTFMT);
            assert!(config.validate().is_ok(), "cutoff {e_cutoff} rejected");
        }
    }

    #[test]
    fn validate_rejects_shared_output() {
        let config = SplitConfig::new("h", "q", "out", "out", 1.0, DEFAULT_OUTFMT);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
