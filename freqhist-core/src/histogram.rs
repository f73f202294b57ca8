use freqhist_common::{FreqHistError, Result};
use serde::{Deserialize, Serialize};

/// upper limit on bins, derived or configured
pub const MAX_BIN_COUNT: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinPolicy {
    /// one bin per integer value in the bounds
    PerValue,
    /// n equal-width bins spanning the bounds
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub range_start: f64,
    pub bin_width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn range_end(&self) -> f64 {
        self.range_start + self.bin_width * self.counts.len() as f64
    }

    /// (start, end, count) per bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.counts.iter().enumerate().map(move |(i, &c)| {
            let start = self.range_start + i as f64 * self.bin_width;
            (start, start + self.bin_width, c)
        })
    }
}

fn too_many_bins(n: u128) -> FreqHistError {
    FreqHistError::DegenerateData(format!("{n} bins exceeds the limit of {MAX_BIN_COUNT}"))
}

/// Buckets samples lying in the inclusive `bounds`; samples outside are not counted.
pub fn bin_samples(samples: &[i64], bounds: (i64, i64), policy: BinPolicy) -> Result<Histogram> {
    let (lo, hi) = bounds;
    if lo > hi {
        return Err(FreqHistError::DegenerateData(format!(
            "lower bound {lo} is above upper bound {hi}"
        )));
    }
    let in_bounds = |v: i64| v >= lo && v <= hi;
    match policy {
        BinPolicy::PerValue => {
            let span = (hi as i128 - lo as i128 + 1) as u128;
            if span > MAX_BIN_COUNT as u128 {
                return Err(too_many_bins(span));
            }
            let mut counts = vec![0u64; span as usize];
            for &v in samples.iter().filter(|&&v| in_bounds(v)) {
                counts[(v as i128 - lo as i128) as usize] += 1;
            }
            Ok(Histogram { range_start: lo as f64, bin_width: 1.0, counts })
        }
        BinPolicy::Fixed(0) => Err(FreqHistError::DegenerateData("bin count must be positive".into())),
        BinPolicy::Fixed(n) => {
            if n > MAX_BIN_COUNT {
                return Err(too_many_bins(n as u128));
            }
            // a single distinct value gets a unit-wide range centred on it
            let (start, end) = if lo == hi {
                (lo as f64 - 0.5, hi as f64 + 0.5)
            } else {
                (lo as f64, hi as f64)
            };
            let width = (end - start) / n as f64;
            let mut counts = vec![0u64; n];
            for &v in samples.iter().filter(|&&v| in_bounds(v)) {
                let idx = ((v as f64 - start) / width) as usize;
                counts[idx.min(n - 1)] += 1; // last bin is closed on the right
            }
            Ok(Histogram { range_start: start, bin_width: width, counts })
        }
    }
}
