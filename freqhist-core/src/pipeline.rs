use crate::bounds::RangeFilter;
use crate::histogram::{bin_samples, BinPolicy, Histogram};
use crate::loader::read_lines;
use crate::render::render_png;
use crate::transform::parse_samples;
use freqhist_common::{Config, FreqHistError, RenderConfig, Result, Variant};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIXED_BINS: usize = 255;

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub variant: Variant,
    pub bin_count: Option<usize>, // overrides the variant policy when set
    pub filter: RangeFilter,
    pub csv_header_lines: usize,
    pub render: RenderConfig,
    pub output: Option<PathBuf>, // None -> default_output_path
}

impl RunSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            variant: cfg.histogram.variant,
            bin_count: cfg.histogram.bin_count,
            filter: RangeFilter::new(cfg.histogram.min, cfg.histogram.max),
            csv_header_lines: cfg.histogram.csv_header_lines,
            render: cfg.render.clone(),
            output: None,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        let mut cfg = Config::default();
        cfg.histogram.variant = variant;
        Self::from_config(&cfg)
    }

    pub fn policy(&self) -> BinPolicy {
        match self.bin_count {
            Some(n) => BinPolicy::Fixed(n),
            None => default_policy(self.variant),
        }
    }

    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| default_output_path(input))
    }
}

pub fn default_policy(variant: Variant) -> BinPolicy {
    match variant {
        Variant::IntegerRange => BinPolicy::PerValue,
        Variant::IntegerFixed | Variant::CsvRescale => BinPolicy::Fixed(DEFAULT_FIXED_BINS),
    }
}

/// `<input>.png`, appended rather than replacing any extension
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".png");
    PathBuf::from(name)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub variant: Variant,
    pub policy: BinPolicy,
    pub parsed_samples: usize,
    pub excluded: usize,
    pub bounds: (i64, i64),
    pub histogram: Histogram,
}

/// load -> parse -> filter -> bin, without touching the output path
pub fn compute(input: &Path, settings: &RunSettings) -> Result<HistogramReport> {
    let lines = read_lines(input)?;
    let samples = parse_samples(settings.variant, &lines, settings.csv_header_lines)?;
    let parsed_samples = samples.len();
    let filtered = settings.filter.apply(samples)?;
    let policy = settings.policy();
    let histogram = bin_samples(&filtered.samples, filtered.bounds, policy)?;
    Ok(HistogramReport {
        input: input.to_path_buf(),
        output: settings.output_path(input),
        variant: settings.variant,
        policy,
        parsed_samples,
        excluded: filtered.excluded,
        bounds: filtered.bounds,
        histogram,
    })
}

pub fn run(input: &Path, settings: &RunSettings) -> Result<HistogramReport> {
    let report = compute(input, settings)?;
    let is_png = report
        .output
        .extension()
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if !is_png {
        return Err(FreqHistError::OutputWrite {
            path: report.output.clone(),
            reason: "output must use the .png extension".into(),
        });
    }
    render_png(&report.histogram, &report.output, &settings.render)?;
    Ok(report)
}

pub fn print_summary(report: &HistogramReport) {
    println!("{:<12} {}", "input:", report.input.display());
    println!("{:<12} {}", "variant:", report.variant);
    println!("{:<12} {}", "samples:", report.parsed_samples);
    println!("{:<12} {}", "excluded:", report.excluded);
    println!("{:<12} [{}, {}]", "bounds:", report.bounds.0, report.bounds.1);
    println!("{:<12} {}", "bins:", report.histogram.bin_count());
    println!("{:<12} {}", "peak:", report.histogram.max_count());
    println!("{:<12} {}", "output:", report.output.display());
}
