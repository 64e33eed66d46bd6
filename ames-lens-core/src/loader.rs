use std::path::Path;

use ames_lens_common::{AmesLensError, DatasetInfo, Result};
use serde_json::Value as JsonValue;

use crate::record::{HousingDataset, HousingRecord, RawHousingRecord};

/// Load a housing dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – top-level array of row objects (the converted `train.json`)
/// * `.csv`  – the dataset's native form, header row required
///
/// A whole-file parse failure is a hard error. A bad row (missing field,
/// wrong type, value outside its domain) is counted and skipped; it never
/// aborts the load.
pub fn load_dataset(path: &Path) -> Result<HousingDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(AmesLensError::UnsupportedFormat(format!(".{other}"))),
    }
}

fn load_json(path: &Path) -> Result<HousingDataset> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| AmesLensError::Other("expected top-level JSON array".into()))?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for (i, row) in rows.iter().enumerate() {
        // per-row parse so one bad row is a skip, not an abort
        match serde_json::from_value::<RawHousingRecord>(row.clone()) {
            Ok(raw) => match raw.validate() {
                Ok(rec) => records.push(rec),
                Err(e) => {
                    log::warn!("skipping row {i}: {e}");
                    skipped += 1;
                }
            },
            Err(e) => {
                log::warn!("skipping row {i}: {e}");
                skipped += 1;
            }
        }
    }
    finish(path, records, skipped)
}

fn load_csv(path: &Path) -> Result<HousingDataset> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (i, row) in reader.deserialize::<RawHousingRecord>().enumerate() {
        match row {
            Ok(raw) => match raw.validate() {
                Ok(rec) => records.push(rec),
                Err(e) => {
                    log::warn!("skipping row {i}: {e}");
                    skipped += 1;
                }
            },
            Err(e) => {
                log::warn!("skipping row {i}: {e}");
                skipped += 1;
            }
        }
    }
    finish(path, records, skipped)
}

fn finish(path: &Path, records: Vec<HousingRecord>, skipped: usize) -> Result<HousingDataset> {
    let info = DatasetInfo {
        path: path.display().to_string(),
        row_count: records.len(),
        skipped_rows: skipped,
    };
    log::debug!(
        "loaded {} rows from {} ({} skipped)",
        info.row_count,
        info.path,
        info.skipped_rows
    );
    Ok(HousingDataset::new(records, info))
}
