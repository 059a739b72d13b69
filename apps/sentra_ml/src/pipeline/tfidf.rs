use serde::Deserialize;

use crate::error::PredictError;

/// IDF re-weighting with L2 normalization. The stored `idf` vector already
/// includes the training side's smoothing, so application is a plain
/// per-column multiply.
#[derive(Debug, Deserialize)]
pub struct TfidfTransform {
    pub idf: Vec<f64>,
}

impl TfidfTransform {
    pub fn transform(&self, counts: &[(usize, f64)]) -> Result<Vec<(usize, f64)>, PredictError> {
        let mut weighted = Vec::with_capacity(counts.len());
        for &(col, count) in counts {
            let idf = self.idf.get(col).copied().ok_or(PredictError::Shape(col))?;
            weighted.push((col, count * idf));
        }
        let norm = weighted.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut weighted {
                *v /= norm;
            }
        }
        Ok(weighted)
    }
}
