pub mod bounds;
pub mod histogram;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod transform;

pub use bounds::{Filtered, RangeFilter};
pub use freqhist_common::{Config, FreqHistError, RenderConfig, Result, Variant};
pub use histogram::{bin_samples, BinPolicy, Histogram, MAX_BIN_COUNT};
pub use loader::read_lines;
pub use pipeline::{
    compute, default_output_path, default_policy, print_summary, run, HistogramReport, RunSettings,
};
pub use render::render_png;
pub use transform::{parse_csv_rescaled, parse_integers, parse_samples, rescale_to_byte};
