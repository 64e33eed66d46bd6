use serde::{Deserialize, Serialize};

/// Median of a sample: the middle element for odd lengths, the mean of the
/// two central elements for even. `None` when the sample is empty.
///
/// Order of the input is irrelevant; duplicates are allowed. Inputs are
/// assumed finite (the load boundary filters NaN).
pub fn median(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let sorted = sorted_copy(xs);
    Some(median_sorted(&sorted))
}

/// Linear-interpolation quantile: interpolates between the two order
/// statistics bracketing position `q * (n - 1)` in the sorted sample.
/// `None` for an empty sample or `q` outside `[0, 1]`.
pub fn quantile(xs: &[f64], q: f64) -> Option<f64> {
    if xs.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let sorted = sorted_copy(xs);
    Some(quantile_sorted(&sorted, q))
}

/// The quartile triple at q = 0.25 / 0.5 / 0.75.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn lower_fence(&self) -> f64 {
        self.q1 - 1.5 * self.iqr()
    }

    pub fn upper_fence(&self) -> f64 {
        self.q3 + 1.5 * self.iqr()
    }
}

/// Quartiles of a sample, sorting once for all three. `None` when empty.
pub fn quartiles(xs: &[f64]) -> Option<Quartiles> {
    if xs.is_empty() {
        return None;
    }
    let sorted = sorted_copy(xs);
    Some(Quartiles {
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
    })
}

/// Classical Tukey fence rule: every `x` strictly beyond 1.5×IQR from the
/// nearest quartile. No other outlier definition is supported.
pub fn tukey_outliers(xs: &[f64], q: &Quartiles) -> Vec<f64> {
    let (lo, hi) = (q.lower_fence(), q.upper_fence());
    xs.iter().copied().filter(|&x| x < lo || x > hi).collect()
}

fn sorted_copy(xs: &[f64]) -> Vec<f64> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let a = sorted[idx];
    let b = sorted[(idx + 1).min(sorted.len() - 1)];
    a + (b - a) * frac
}
