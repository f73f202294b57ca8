use freqhist_common::{FreqHistError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive bounds applied to samples before binning.
///
/// Each side falls back to the data's own extreme when unset, so the
/// default filter keeps every sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub samples: Vec<i64>,
    pub bounds: (i64, i64),
    pub excluded: usize,
}

impl RangeFilter {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn apply(&self, samples: Vec<i64>) -> Result<Filtered> {
        let (data_min, data_max) = match (samples.iter().min(), samples.iter().max()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => return Err(FreqHistError::DegenerateData("no samples in input".into())),
        };
        let lo = self.min.unwrap_or(data_min);
        let hi = self.max.unwrap_or(data_max);
        if lo > hi {
            return Err(FreqHistError::DegenerateData(format!(
                "lower bound {lo} is above upper bound {hi}"
            )));
        }
        let total = samples.len();
        let kept: Vec<i64> = samples.into_iter().filter(|&v| v >= lo && v <= hi).collect();
        if kept.is_empty() {
            return Err(FreqHistError::DegenerateData(format!(
                "all {total} samples fall outside [{lo}, {hi}]"
            )));
        }
        Ok(Filtered {
            excluded: total - kept.len(),
            samples: kept,
            bounds: (lo, hi),
        })
    }
}
