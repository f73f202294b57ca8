pub mod config;
pub use config::{Config, HistogramConfig, RenderConfig, Variant};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqHistError {
    #[error("cannot read input {}: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error on line {line} ({text:?}): {reason}")]
    Parse {
        line: usize,
        text: String,
        reason: String,
    },
    #[error("degenerate data: {0}")]
    DegenerateData(String),
    #[error("cannot write output {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FreqHistError>;
