// Cosine / Euclidean scoring and top-k lookup over embedding-style vectors.
use std::cmp::Ordering;

use log::debug;

use crate::array::NumericArray;
use crate::error::Result;
use crate::linalg::{distance, dot_unchecked, l2_norm};
use crate::utils::require_same_len;

pub trait SimilarityMeasure {
    /// Scores two equal-length arrays; higher means more similar.
    fn calculate(&self, a: &NumericArray, b: &NumericArray) -> Result<f64>;
}

pub struct CosineSimilarity;

impl SimilarityMeasure for CosineSimilarity {
    fn calculate(&self, a: &NumericArray, b: &NumericArray) -> Result<f64> {
        require_same_len("cosine_similarity", a.len(), b.len())?;
        let norm_product = l2_norm(a) * l2_norm(b);
        if norm_product == 0.0 {
            return Ok(0.0);
        }
        Ok(dot_unchecked(a.as_slice(), b.as_slice()) / norm_product)
    }
}

/// Raw inner product. Equals cosine similarity for unit-length inputs.
pub struct DotSimilarity;

impl SimilarityMeasure for DotSimilarity {
    fn calculate(&self, a: &NumericArray, b: &NumericArray) -> Result<f64> {
        a.dot(b)
    }
}

pub struct EuclideanSimilarity {
    /// Decay rate applied to the distance.
    gamma: f64,
}

impl EuclideanSimilarity {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Default for EuclideanSimilarity {
    fn default() -> Self {
        Self { gamma: 1.0 }
    }
}

impl SimilarityMeasure for EuclideanSimilarity {
    fn calculate(&self, a: &NumericArray, b: &NumericArray) -> Result<f64> {
        Ok((-self.gamma * distance(a, b)?).exp())
    }
}

/// Scores every candidate against `query` and keeps the best `k` at or above
/// `min_score`, highest first. Equal scores keep candidate order.
pub fn rank<S: SimilarityMeasure>(
    query: &NumericArray,
    candidates: &[NumericArray],
    measure: &S,
    k: usize,
    min_score: f64,
) -> Result<Vec<(usize, f64)>> {
    let mut scored = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let score = measure.calculate(query, candidate)?;
        if score >= min_score {
            scored.push((index, score));
        }
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(k);
    debug!(
        "rank: kept {} of {} candidates",
        scored.len(),
        candidates.len()
    );
    Ok(scored)
}
