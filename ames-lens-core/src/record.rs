use ames_lens_common::DatasetInfo;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Serde view of one input row, keyed by the dataset's native column names.
/// Every field is optional so a bad row surfaces as a per-row validation
/// error instead of aborting the whole parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHousingRecord {
    #[serde(rename = "GrLivArea")]
    pub gr_liv_area: Option<f64>,
    #[serde(rename = "SalePrice")]
    pub sale_price: Option<f64>,
    #[serde(rename = "OverallQual")]
    pub overall_qual: Option<u8>,
    #[serde(rename = "Exterior1st")]
    pub exterior1st: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("{field} is not finite: {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("negative living area: {0}")]
    NegativeLivingArea(f64),
    #[error("overall quality {0} outside 1-10")]
    QualityOutOfRange(u8),
    #[error("empty exterior material")]
    EmptyMaterial,
}

/// One validated housing sale. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingRecord {
    pub living_area: f64,
    pub sale_price: f64,
    pub overall_quality: u8,
    pub exterior_material: String,
}

impl RawHousingRecord {
    /// Validate once at the load boundary; downstream code assumes clean
    /// numeric fields.
    pub fn validate(self) -> Result<HousingRecord, RecordError> {
        let living_area = self
            .gr_liv_area
            .ok_or(RecordError::MissingField("GrLivArea"))?;
        if !living_area.is_finite() {
            return Err(RecordError::NotFinite {
                field: "GrLivArea",
                value: living_area,
            });
        }
        if living_area < 0.0 {
            return Err(RecordError::NegativeLivingArea(living_area));
        }
        let sale_price = self
            .sale_price
            .ok_or(RecordError::MissingField("SalePrice"))?;
        if !sale_price.is_finite() {
            return Err(RecordError::NotFinite {
                field: "SalePrice",
                value: sale_price,
            });
        }
        let overall_quality = self
            .overall_qual
            .ok_or(RecordError::MissingField("OverallQual"))?;
        if !(1..=10).contains(&overall_quality) {
            return Err(RecordError::QualityOutOfRange(overall_quality));
        }
        let exterior_material = self
            .exterior1st
            .ok_or(RecordError::MissingField("Exterior1st"))?;
        if exterior_material.is_empty() {
            return Err(RecordError::EmptyMaterial);
        }
        Ok(HousingRecord {
            living_area,
            sale_price,
            overall_quality,
            exterior_material,
        })
    }
}

/// A fully materialized, validated record set plus its provenance.
#[derive(Debug, Clone)]
pub struct HousingDataset {
    pub records: Vec<HousingRecord>,
    pub info: DatasetInfo,
}

impl HousingDataset {
    pub fn new(records: Vec<HousingRecord>, info: DatasetInfo) -> Self {
        Self { records, info }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct exterior materials in first-seen order. Order affects only
    /// display, not correctness.
    pub fn materials(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in &self.records {
            if seen.insert(r.exterior_material.as_str()) {
                out.push(r.exterior_material.clone());
            }
        }
        out
    }
}
