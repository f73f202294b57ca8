use clap::Parser;
use freqhist_common::{Config, Variant};
use freqhist_core::{print_summary, run, RangeFilter, RunSettings, MAX_BIN_COUNT};
use std::path::PathBuf;

fn parse_bins(s: &str) -> Result<usize, String> { // validate bin count at CLI parse time
    let v: usize = s.parse().map_err(|_| format!("not a positive integer: {s}"))?;
    if v > 0 && v <= MAX_BIN_COUNT { Ok(v) } else { Err(format!("bins must be in [1, {MAX_BIN_COUNT}], got {v}")) }
}

#[derive(Parser, Debug)]
#[command(name = "freqhist", version, about = "Render a frequency histogram of numeric samples to PNG")]
struct Cli {
    /// input file; the image is written to <PATH>.png unless --output is given
    path: PathBuf,
    /// integer-range | integer-fixed | csv-rescale
    #[arg(long)]
    variant: Option<Variant>,
    /// fixed number of equal-width bins, replacing the variant's default
    #[arg(long, value_parser = parse_bins)]
    bins: Option<usize>,
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,
    /// header lines skipped by csv-rescale
    #[arg(long)]
    header_lines: Option<usize>,
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    /// cli flags take precedence over the config file
    fn settings(&self, config: &Config) -> RunSettings {
        let mut s = RunSettings::from_config(config);
        if let Some(v) = self.variant { s.variant = v; }
        if self.bins.is_some() { s.bin_count = self.bins; }
        s.filter = RangeFilter::new(self.min.or(s.filter.min), self.max.or(s.filter.max));
        if let Some(n) = self.header_lines { s.csv_header_lines = n; }
        s.output = self.output.clone();
        s
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let settings = cli.settings(&config);
    let report = run(&cli.path, &settings)?;
    if !cli.quiet { print_summary(&report); }
    Ok(())
}
