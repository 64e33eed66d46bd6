use std::collections::HashMap;
use std::ops::RangeInclusive;

use ames_lens_common::{AmesLensError, Config, DatasetInfo, Result};
use serde::{Deserialize, Serialize};

use crate::binning::AreaBins;
use crate::record::{HousingDataset, HousingRecord};
use crate::stats;

// --- bar chart: material × size-bin medians ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinMedian {
    pub bin: String,
    pub bin_index: usize,
    pub median_price: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialMedians {
    pub material: String,
    pub medians: Vec<BinMedian>,
}

/// Median sale price per (exterior material, living-area bin) pair.
/// Materials keep their first-seen dataset order; within a material the
/// entries are ordered by bin index. A pair with zero records produces no
/// entry — never a zero or null placeholder.
pub fn material_bin_medians(
    records: &[HousingRecord],
    bins: &AreaBins,
) -> Result<Vec<MaterialMedians>> {
    check_clean(records)?;
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Vec<f64>>> = HashMap::new();
    for r in records {
        let per_bin = groups
            .entry(r.exterior_material.clone())
            .or_insert_with(|| {
                order.push(r.exterior_material.clone());
                vec![Vec::new(); bins.bin_count()]
            });
        if let Some(i) = bins.bin_index(r.living_area) {
            per_bin[i].push(r.sale_price);
        }
    }
    let out = order
        .into_iter()
        .map(|material| {
            let per_bin = &groups[&material];
            let medians = per_bin
                .iter()
                .enumerate()
                .filter_map(|(i, prices)| {
                    stats::median(prices).map(|m| BinMedian {
                        bin: bins.label(i).to_string(),
                        bin_index: i,
                        median_price: m,
                        count: prices.len(),
                    })
                })
                .collect();
            MaterialMedians { material, medians }
        })
        .collect();
    Ok(out)
}

// --- box plot: per-quality-score summaries ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualitySummary {
    pub quality: u8,
    pub count: usize,
    /// `None` marks a score with no records: quartiles are undefined and
    /// the renderer must not draw a box for it.
    pub stats: Option<BoxStats>,
}

/// Box-plot summary of sale prices for every score in `domain`. Scores with
/// zero records stay in the output with `stats: None` so the degenerate case
/// is visible instead of silently drawn as a garbled shape.
pub fn quality_price_summaries(
    records: &[HousingRecord],
    domain: RangeInclusive<u8>,
) -> Result<Vec<QualitySummary>> {
    check_clean(records)?;
    let mut out = Vec::new();
    for quality in domain {
        let prices: Vec<f64> = records
            .iter()
            .filter(|r| r.overall_quality == quality)
            .map(|r| r.sale_price)
            .collect();
        out.push(QualitySummary {
            quality,
            count: prices.len(),
            stats: box_stats(&prices),
        });
    }
    Ok(out)
}

fn box_stats(prices: &[f64]) -> Option<BoxStats> {
    let q = stats::quartiles(prices)?;
    // min/max feed the whisker endpoints
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(BoxStats {
        q1: q.q1,
        median: q.median,
        q3: q.q3,
        iqr: q.iqr(),
        min,
        max,
        outliers: stats::tukey_outliers(prices, &q),
    })
}

// --- scatter: pass-through point list ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub living_area: f64,
    pub sale_price: f64,
}

pub fn scatter_points(records: &[HousingRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            living_area: r.living_area,
            sale_price: r.sale_price,
        })
        .collect()
}

// --- one bundle per render pass ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetCharts {
    pub source: DatasetInfo,
    pub bar_chart: Vec<MaterialMedians>,
    pub box_plot: Vec<QualitySummary>,
    pub scatter: Vec<ScatterPoint>,
}

/// Prepare all three chart payloads from a loaded dataset. Summaries are
/// computed fresh on every call, never cached; each group is independent,
/// so a degenerate group never corrupts its siblings.
pub fn prepare_charts(dataset: &HousingDataset, config: &Config) -> Result<DatasetCharts> {
    let bins = AreaBins::new(config.binning.living_area_edges.clone())?;
    let bar_chart = material_bin_medians(&dataset.records, &bins)?;
    let box_plot = quality_price_summaries(&dataset.records, config.box_plot.quality_domain())?;
    let scatter = scatter_points(&dataset.records);
    log::debug!(
        "prepared charts: {} materials, {} quality scores, {} scatter points",
        bar_chart.len(),
        box_plot.len(),
        scatter.len()
    );
    Ok(DatasetCharts {
        source: dataset.info.clone(),
        bar_chart,
        box_plot,
        scatter,
    })
}

/// Fail fast on dirty input instead of folding NaN into a summary. The
/// loader's validation makes this unreachable in the normal pipeline.
fn check_clean(records: &[HousingRecord]) -> Result<()> {
    for (i, r) in records.iter().enumerate() {
        if !r.living_area.is_finite() || !r.sale_price.is_finite() {
            return Err(AmesLensError::MalformedRecord(format!(
                "record {i}: living_area={} sale_price={}",
                r.living_area, r.sale_price
            )));
        }
    }
    Ok(())
}
