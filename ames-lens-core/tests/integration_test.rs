use ames_lens_core::{load_dataset, prepare_charts, Config};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_json_fixture() -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    // two rows are malformed: a null SalePrice and an out-of-domain quality
    let rows = serde_json::json!([
        { "GrLivArea": 500, "SalePrice": 100000, "OverallQual": 5, "Exterior1st": "VinylSd" },
        { "GrLivArea": 1500, "SalePrice": 200000, "OverallQual": 5, "Exterior1st": "VinylSd" },
        { "GrLivArea": 2500, "SalePrice": 350000, "OverallQual": 8, "Exterior1st": "Wd Sdng" },
        { "GrLivArea": 4000, "SalePrice": 755000, "OverallQual": 10, "Exterior1st": "Wd Sdng" },
        { "GrLivArea": 900, "SalePrice": null, "OverallQual": 5, "Exterior1st": "VinylSd" },
        { "GrLivArea": 1200, "SalePrice": 150000, "OverallQual": 0, "Exterior1st": "MetalSd" }
    ]);
    tmp.write_all(serde_json::to_string_pretty(&rows).unwrap().as_bytes())
        .unwrap();
    tmp
}

fn write_csv_fixture() -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    // extra columns must be ignored; the NA row must be skipped, not abort
    writeln!(tmp, "Id,GrLivArea,SalePrice,OverallQual,Exterior1st,Neighborhood").unwrap();
    writeln!(tmp, "1,500,100000,5,VinylSd,NAmes").unwrap();
    writeln!(tmp, "2,1500,200000,5,VinylSd,NAmes").unwrap();
    writeln!(tmp, "3,NA,350000,8,Wd Sdng,OldTown").unwrap();
    tmp
}

#[test]
fn load_json_counts_rows_and_skips() {
    let tmp = write_json_fixture();
    let ds = load_dataset(tmp.path()).unwrap();
    assert_eq!(ds.info.row_count, 4);
    assert_eq!(ds.info.skipped_rows, 2);
    assert_eq!(ds.materials(), vec!["VinylSd", "Wd Sdng"]);
}

#[test]
fn load_csv_skips_bad_row() {
    let tmp = write_csv_fixture();
    let ds = load_dataset(tmp.path()).unwrap();
    assert_eq!(ds.info.row_count, 2);
    assert_eq!(ds.info.skipped_rows, 1);
    assert_eq!(ds.records[0].living_area, 500.0);
    assert_eq!(ds.records[1].sale_price, 200_000.0);
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = load_dataset(Path::new("train.xlsx")).unwrap_err();
    assert!(err.to_string().contains("unsupported"));
}

#[test]
fn prepare_charts_end_to_end() {
    let tmp = write_json_fixture();
    let ds = load_dataset(tmp.path()).unwrap();
    let charts = prepare_charts(&ds, &Config::default()).unwrap();

    // bar chart: materials in first-seen order, entries per populated bin
    assert_eq!(charts.bar_chart.len(), 2);
    let vinyl = &charts.bar_chart[0];
    assert_eq!(vinyl.material, "VinylSd");
    assert_eq!(vinyl.medians.len(), 2);
    assert_eq!(vinyl.medians[0].bin, "0-999");
    assert_eq!(vinyl.medians[0].median_price, 100_000.0);
    assert_eq!(vinyl.medians[1].bin, "1000-1999");
    assert_eq!(vinyl.medians[1].median_price, 200_000.0);
    let wood = &charts.bar_chart[1];
    assert_eq!(wood.material, "Wd Sdng");
    assert_eq!(wood.medians[0].bin, "2000-3499");
    assert_eq!(wood.medians[1].bin, "3500+");
    assert_eq!(wood.medians[1].median_price, 755_000.0);

    // box plot: full 1..=10 domain, empty scores carry an explicit None
    assert_eq!(charts.box_plot.len(), 10);
    let q5 = &charts.box_plot[4];
    assert_eq!(q5.count, 2);
    assert_eq!(q5.stats.as_ref().unwrap().median, 150_000.0);
    let q8 = &charts.box_plot[7];
    assert_eq!(q8.count, 1);
    assert_eq!(q8.stats.as_ref().unwrap().iqr, 0.0);
    assert!(charts.box_plot[0].stats.is_none());

    assert_eq!(charts.scatter.len(), 4);
}

#[test]
fn export_round_trip_through_config() {
    let tmp = write_json_fixture();
    let ds = load_dataset(tmp.path()).unwrap();
    let charts = prepare_charts(&ds, &Config::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.export.output_dir = dir.path().display().to_string();

    let json_path = ames_lens_core::export_charts(&charts, &config).unwrap();
    let text = std::fs::read_to_string(&json_path).unwrap();
    let back: ames_lens_core::DatasetCharts = serde_json::from_str(&text).unwrap();
    assert_eq!(back.bar_chart.len(), charts.bar_chart.len());
    assert_eq!(back.scatter.len(), 4);

    config.export.format = "csv".into();
    let csv_path = ames_lens_core::export_charts(&charts, &config).unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "material,bin,median_price,count");
    assert_eq!(lines.len(), 5); // header + 4 populated (material, bin) pairs
}
