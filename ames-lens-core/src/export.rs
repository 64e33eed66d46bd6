use std::path::{Path, PathBuf};

use ames_lens_common::{AmesLensError, Config, Result};

use crate::aggregate::DatasetCharts;

// --- headless summary output ---

pub fn print_summary(charts: &DatasetCharts) {
    println!("{:<16} {}", "Source:", charts.source.path);
    println!("{:<16} {}", "Rows:", charts.source.row_count);
    println!("{:<16} {}", "Skipped:", charts.source.skipped_rows);
    println!("{:<16} {}", "Materials:", charts.bar_chart.len());
    let populated = charts.box_plot.iter().filter(|s| s.stats.is_some()).count();
    let degenerate = charts.box_plot.len() - populated;
    println!(
        "{:<16} {} populated, {} degenerate",
        "Quality scores:", populated, degenerate
    );
    if degenerate > 0 {
        let empty: Vec<String> = charts
            .box_plot
            .iter()
            .filter(|s| s.stats.is_none())
            .map(|s| s.quality.to_string())
            .collect();
        println!("{:<16} {}", "No data for:", empty.join(", "));
    }
    println!("{:<16} {}", "Scatter points:", charts.scatter.len());
}

// --- JSON export ---

pub fn export_json(output_path: &Path, charts: &DatasetCharts) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, charts)?;
    Ok(())
}

// --- CSV export: the bar-chart median table ---

#[derive(serde::Serialize)]
struct BarCsvRow<'a> {
    material: &'a str,
    bin: &'a str,
    median_price: f64,
    count: usize,
}

pub fn export_csv(output_path: &Path, charts: &DatasetCharts) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    for series in &charts.bar_chart {
        for entry in &series.medians {
            writer.serialize(BarCsvRow {
                material: &series.material,
                bin: &entry.bin,
                median_price: entry.median_price,
                count: entry.count,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the chart bundle in the configured format and return the path.
pub fn export_charts(charts: &DatasetCharts, config: &Config) -> Result<PathBuf> {
    let dir = PathBuf::from(&config.export.output_dir);
    match config.export.format.as_str() {
        "json" => {
            let path = dir.join("ames-lens-charts.json");
            export_json(&path, charts)?;
            Ok(path)
        }
        "csv" => {
            let path = dir.join("ames-lens-charts.csv");
            export_csv(&path, charts)?;
            Ok(path)
        }
        other => Err(AmesLensError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{BinMedian, MaterialMedians, QualitySummary, ScatterPoint};
    use ames_lens_common::DatasetInfo;

    fn sample_charts() -> DatasetCharts {
        DatasetCharts {
            source: DatasetInfo {
                path: "train.json".into(),
                row_count: 1,
                skipped_rows: 0,
            },
            bar_chart: vec![MaterialMedians {
                material: "VinylSd".into(),
                medians: vec![BinMedian {
                    bin: "0-999".into(),
                    bin_index: 0,
                    median_price: 100_000.0,
                    count: 1,
                }],
            }],
            box_plot: vec![QualitySummary {
                quality: 5,
                count: 0,
                stats: None,
            }],
            scatter: vec![ScatterPoint {
                living_area: 500.0,
                sale_price: 100_000.0,
            }],
        }
    }

    #[test]
    fn json_round_trips() {
        let tmp = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        export_json(tmp.path(), &sample_charts()).unwrap();
        let text = std::fs::read_to_string(tmp.path()).unwrap();
        let back: DatasetCharts = serde_json::from_str(&text).unwrap();
        assert_eq!(back.bar_chart[0].material, "VinylSd");
        assert_eq!(back.bar_chart[0].medians[0].median_price, 100_000.0);
        assert!(back.box_plot[0].stats.is_none());
    }

    #[test]
    fn csv_has_header_and_rows() {
        let tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        export_csv(tmp.path(), &sample_charts()).unwrap();
        let content = std::fs::read_to_string(tmp.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "material,bin,median_price,count");
        assert_eq!(lines[1], "VinylSd,0-999,100000.0,1");
    }

    #[test]
    fn dispatch_rejects_unknown_format() {
        let mut config = Config::default();
        config.export.format = "yaml".into();
        let err = export_charts(&sample_charts(), &config).unwrap_err();
        assert!(matches!(err, AmesLensError::UnsupportedFormat(_)));
    }

    #[test]
    fn dispatch_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.output_dir = dir.path().display().to_string();
        let path = export_charts(&sample_charts(), &config).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
