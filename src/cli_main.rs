use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{NplotError, Result};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutFormat {
    Pdf,
    Png,
    Svg,
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "nplot",
    version,
    about = "Plot cumulative N-statistics for files of sequence lengths",
    long_about = "Takes any number of lengths files (one non-negative integer per line,\n\
                  .gz accepted) and produces a figure comparing their cumulative\n\
                  proportion-of-genome curves, with optional N50 reporting."
)]
pub struct Cli {
    /// Input lengths files, one profile per file
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Total genome length used as the denominator; defaults to the largest
    /// sum of input lengths across the batch
    #[arg(long)]
    pub genome_length: Option<f64>,

    /// Title of the plot
    #[arg(long, default_value = "N-Statistics")]
    pub title: String,

    /// Use a linear y axis
    #[arg(long, conflicts_with = "log")]
    pub linear: bool,

    /// Use a logarithmic y axis (the default)
    #[arg(long)]
    pub log: bool,

    /// Draw dashed reference lines from the y axis to each curve's N50
    #[arg(long)]
    pub n50_line: bool,

    /// Label on the x axis
    #[arg(long, default_value = "Cumulative length proportional to genome length")]
    pub xlabel: String,

    /// Print per-profile N10/N50/N90/N95 values to stdout
    #[arg(long)]
    pub report_n50_values: bool,

    /// Format of the N-statistics report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report_format: ReportFormat,

    /// Skip the descending sort; the caller asserts every input is already
    /// sorted largest-first
    #[arg(long)]
    pub pre_sorted: bool,

    /// Dots per inch of PNG output
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Output image format
    #[arg(long, value_enum, default_value_t = OutFormat::Pdf)]
    pub out_format: OutFormat,

    /// Output path/basename; any trailing .png/.pdf/.svg is stripped
    #[arg(long, default_value = "nplot")]
    pub out: PathBuf,
}

impl Cli {
    /// Post-parse validation. Runs before any input is read or output
    /// created, so a bad invocation never leaves partial files behind.
    pub fn validate(&self) -> Result<()> {
        for path in &self.inputs {
            if !path.exists() {
                return Err(NplotError::NotFound(path.clone()));
            }
        }
        if self.dpi < 72 {
            return Err(NplotError::Usage(format!(
                "--dpi {} is below screen resolution; must be >= 72",
                self.dpi
            )));
        }
        Ok(())
    }

    pub fn log_scale(&self) -> bool {
        !self.linear
    }

    /// Output basename with any known image extension stripped; the chosen
    /// format appends its own.
    pub fn out_base(&self) -> PathBuf {
        match self.out.extension() {
            Some(ext) if ext == "png" || ext == "pdf" || ext == "svg" => {
                self.out.with_extension("")
            }
            _ => self.out.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["nplot", "lengths.txt"]);
        assert_eq!(cli.title, "N-Statistics");
        assert_eq!(cli.dpi, 300);
        assert_eq!(cli.out_format, OutFormat::Pdf);
        assert!(cli.log_scale());
        assert!(!cli.n50_line);
    }

    #[test]
    fn requires_at_least_one_input() {
        assert!(Cli::try_parse_from(["nplot"]).is_err());
    }

    #[test]
    fn linear_and_log_conflict() {
        assert!(Cli::try_parse_from(["nplot", "a.txt", "--linear", "--log"]).is_err());
        let cli = Cli::parse_from(["nplot", "a.txt", "--linear"]);
        assert!(!cli.log_scale());
    }

    #[test]
    fn unknown_out_format_is_rejected() {
        assert!(Cli::try_parse_from(["nplot", "a.txt", "--out-format", "eps"]).is_err());
    }

    #[test]
    fn low_dpi_is_a_usage_error() {
        // The input must exist, otherwise validation stops at NotFound
        // before the dpi check is reached.
        let file = tempfile::NamedTempFile::new().unwrap();
        let input = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["nplot", input, "--dpi", "40"]);
        assert!(matches!(cli.validate(), Err(NplotError::Usage(_))));
        let cli = Cli::parse_from(["nplot", input, "--dpi", "72"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn missing_input_is_a_not_found_error() {
        let cli = Cli::parse_from(["nplot", "/no/such/lengths.txt"]);
        assert!(matches!(cli.validate(), Err(NplotError::NotFound(_))));
    }

    #[test]
    fn out_extension_is_stripped() {
        let cli = Cli::parse_from(["nplot", "a.txt", "--out", "figures/asm.png"]);
        assert_eq!(cli.out_base(), PathBuf::from("figures/asm"));
        let cli = Cli::parse_from(["nplot", "a.txt", "--out", "figures/asm.v2"]);
        assert_eq!(cli.out_base(), PathBuf::from("figures/asm.v2"));
    }
}
