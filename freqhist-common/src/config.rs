use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// which parser/bin policy the pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// one integer per line, one bin per integer value
    #[default]
    IntegerRange,
    /// one integer per line, 255 equal-width bins
    IntegerFixed,
    /// csv rows rescaled from [-1, 1] to [0, 255], 255 equal-width bins
    CsvRescale,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::IntegerRange, Variant::IntegerFixed, Variant::CsvRescale];

    pub fn name(self) -> &'static str {
        match self {
            Variant::IntegerRange => "integer-range",
            Variant::IntegerFixed => "integer-fixed",
            Variant::CsvRescale => "csv-rescale",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
                format!("unknown variant {s:?}, expected one of: {}", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub bin_count: Option<usize>, // None keeps the variant's own policy
    #[serde(default = "default_header_lines")]
    pub csv_header_lines: usize,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

fn default_header_lines() -> usize {
    2
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            bin_count: None,
            csv_header_lines: default_header_lines(),
            min: None,
            max: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_bar_color")]
    pub bar_color: [u8; 3],
    #[serde(default = "default_margin")]
    pub margin: u32,
}

fn default_width() -> u32 {
    1200
}
fn default_height() -> u32 {
    800
}
fn default_bar_color() -> [u8; 3] {
    [70, 130, 180]
}
fn default_margin() -> u32 {
    20
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            bar_color: default_bar_color(),
            margin: default_margin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub histogram: HistogramConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("freqhist")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("FREQHIST_CONFIG") {
            PathBuf::from(env_path) // $FREQHIST_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        Self::load_from(&path)
    }

    /// missing file -> defaults; unreadable or malformed file -> `Config` error
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::FreqHistError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| crate::FreqHistError::Config(e.to_string()))?;
        if cfg.render.width == 0 || cfg.render.height == 0 {
            return Err(crate::FreqHistError::Config(format!(
                "render size must be non-zero, got {}x{}",
                cfg.render.width, cfg.render.height
            )));
        }
        Ok(cfg)
    }
}
