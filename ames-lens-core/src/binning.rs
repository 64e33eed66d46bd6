use ames_lens_common::{AmesLensError, Result};

/// Half-open interval buckets over a fixed ascending boundary list. Bin `i`
/// covers `[edges[i], edges[i+1])`, so the bins partition
/// `[edges[0], edges[last])` with no gaps or overlaps.
#[derive(Debug, Clone)]
pub struct AreaBins {
    edges: Vec<f64>,
    labels: Vec<String>,
}

impl AreaBins {
    /// Validate a boundary list: at least two edges, strictly ascending,
    /// no NaN, and only the last edge may be infinite.
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(AmesLensError::InvalidBinEdges(format!(
                "need at least 2 boundaries, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| e.is_nan()) {
            return Err(AmesLensError::InvalidBinEdges("NaN boundary".into()));
        }
        if let Some(w) = edges.windows(2).find(|w| w[0] >= w[1]) {
            return Err(AmesLensError::InvalidBinEdges(format!(
                "boundaries must be strictly ascending: {} before {}",
                w[0], w[1]
            )));
        }
        if edges[..edges.len() - 1].iter().any(|e| e.is_infinite()) {
            return Err(AmesLensError::InvalidBinEdges(
                "only the last boundary may be infinite".into(),
            ));
        }
        let labels = make_labels(&edges);
        Ok(Self { edges, labels })
    }

    /// Index of the bin containing `v`, or `None` for anything outside
    /// `[edges[0], edges[last])` — NaN, negatives, infinities. The sentinel
    /// is the only failure mode; callers filter malformed values upstream.
    pub fn bin_index(&self, v: f64) -> Option<usize> {
        if v.is_nan() {
            return None;
        }
        self.edges.windows(2).position(|w| w[0] <= v && v < w[1])
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }
}

/// Display labels in the renderer's legend form: `0-999`, `1000-1999`,
/// `3500+`. Non-integer boundaries fall back to half-open notation.
fn make_labels(edges: &[f64]) -> Vec<String> {
    edges
        .windows(2)
        .map(|w| {
            let (lo, hi) = (w[0], w[1]);
            if hi.is_infinite() {
                format!("{}+", fmt_edge(lo))
            } else if lo.fract() == 0.0 && hi.fract() == 0.0 {
                format!("{}-{}", fmt_edge(lo), fmt_edge(hi - 1.0))
            } else {
                format!("[{},{})", fmt_edge(lo), fmt_edge(hi))
            }
        })
        .collect()
}

fn fmt_edge(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
