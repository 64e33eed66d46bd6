use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinningConfig {
    #[serde(default = "default_living_area_edges")]
    pub living_area_edges: Vec<f64>,
}

fn default_living_area_edges() -> Vec<f64> {
    vec![0.0, 1000.0, 2000.0, 3500.0, f64::INFINITY]
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            living_area_edges: default_living_area_edges(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_bar_width")]
    pub width: u32,
    #[serde(default = "default_bar_height")]
    pub height: u32,
    #[serde(default = "default_bar_y_max")]
    pub y_max: f64,
}

fn default_bar_width() -> u32 {
    800
}
fn default_bar_height() -> u32 {
    400
}
fn default_bar_y_max() -> f64 {
    850_000.0
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: default_bar_width(),
            height: default_bar_height(),
            y_max: default_bar_y_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxPlotConfig {
    #[serde(default = "default_plot_width")]
    pub width: u32,
    #[serde(default = "default_plot_height")]
    pub height: u32,
    #[serde(default = "default_plot_y_max")]
    pub y_max: f64,
    #[serde(default = "default_quality_min")]
    pub quality_min: u8,
    #[serde(default = "default_quality_max")]
    pub quality_max: u8,
}

fn default_plot_width() -> u32 {
    800
}
fn default_plot_height() -> u32 {
    500
}
fn default_plot_y_max() -> f64 {
    1_000_000.0
}
fn default_quality_min() -> u8 {
    1
}
fn default_quality_max() -> u8 {
    10
}

impl BoxPlotConfig {
    pub fn quality_domain(&self) -> RangeInclusive<u8> {
        self.quality_min..=self.quality_max
    }
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            width: default_plot_width(),
            height: default_plot_height(),
            y_max: default_plot_y_max(),
            quality_min: default_quality_min(),
            quality_max: default_quality_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterConfig {
    #[serde(default = "default_plot_width")]
    pub width: u32,
    #[serde(default = "default_plot_height")]
    pub height: u32,
    #[serde(default = "default_scatter_x_max")]
    pub x_max: f64,
    #[serde(default = "default_plot_y_max")]
    pub y_max: f64,
}

fn default_scatter_x_max() -> f64 {
    6000.0
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: default_plot_width(),
            height: default_plot_height(),
            x_max: default_scatter_x_max(),
            y_max: default_plot_y_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_format() -> String {
    "json".into()
}
fn default_output_dir() -> String {
    ".".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub binning: BinningConfig,
    #[serde(default)]
    pub bar_chart: BarChartConfig,
    #[serde(default)]
    pub box_plot: BoxPlotConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ames-lens")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("AMES_LENS_CONFIG") {
            PathBuf::from(env_path) // $AMES_LENS_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::AmesLensError::Other(e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::AmesLensError::Other(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
