pub mod aggregate;
pub mod binning;
pub mod export;
pub mod loader;
pub mod record;
pub mod stats;

pub use ames_lens_common::{AmesLensError, Config, DatasetInfo, Result};

pub use aggregate::{
    material_bin_medians, prepare_charts, quality_price_summaries, scatter_points, BinMedian,
    BoxStats, DatasetCharts, MaterialMedians, QualitySummary, ScatterPoint,
};
pub use binning::AreaBins;
pub use export::{export_charts, export_csv, export_json, print_summary};
pub use loader::load_dataset;
pub use record::{HousingDataset, HousingRecord, RawHousingRecord, RecordError};
pub use stats::{median, quantile, quartiles, tukey_outliers, Quartiles};
