//! Multinomial logistic regression on sparse TF-IDF rows.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::tfidf::SparseVector;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub max_iter: usize,
    pub learning_rate: f64,
    /// L2 penalty strength on the weights (bias is not penalized).
    pub l2: f64,
    /// Stop once the loss improves by less than this between iterations.
    pub tolerance: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        TrainingParams {
            max_iter: 300,
            learning_rate: 2.0,
            l2: 1e-4,
            tolerance: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// `n_classes × n_features`
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    pub n_features: usize,
    /// Iterations actually run during fitting.
    pub iterations: usize,
}

impl LogisticRegression {
    /// Full-batch gradient descent from a zero initialization.
    pub fn fit(
        rows: &[SparseVector],
        targets: &[usize],
        n_classes: usize,
        n_features: usize,
        params: &TrainingParams,
    ) -> Result<Self> {
        if rows.is_empty() {
            bail!("cannot fit a classifier on zero samples");
        }
        if rows.len() != targets.len() {
            bail!(
                "sample/target length mismatch: {} rows, {} targets",
                rows.len(),
                targets.len()
            );
        }
        if n_classes < 2 {
            bail!("need at least two classes, got {n_classes}");
        }
        if let Some(bad) = targets.iter().find(|&&t| t >= n_classes) {
            bail!("target {bad} out of range for {n_classes} classes");
        }

        let mut model = LogisticRegression {
            weights: vec![vec![0.0; n_features]; n_classes],
            bias: vec![0.0; n_classes],
            n_features,
            iterations: 0,
        };

        let n = rows.len() as f64;
        let mut grad_w = vec![vec![0.0; n_features]; n_classes];
        let mut grad_b = vec![0.0; n_classes];
        let mut previous_loss = f64::INFINITY;

        for iteration in 1..=params.max_iter {
            grad_w.iter_mut().for_each(|g| g.iter_mut().for_each(|v| *v = 0.0));
            grad_b.iter_mut().for_each(|v| *v = 0.0);
            let mut loss = 0.0;

            for (row, &target) in rows.iter().zip(targets) {
                let probs = model.predict_proba(row);
                loss -= probs[target].max(f64::MIN_POSITIVE).ln();

                for (class, p) in probs.iter().enumerate() {
                    let residual = p - if class == target { 1.0 } else { 0.0 };
                    grad_b[class] += residual;
                    for &(feature, value) in row {
                        grad_w[class][feature] += residual * value;
                    }
                }
            }

            loss /= n;
            let mut penalty = 0.0;
            for (class, weights) in model.weights.iter_mut().enumerate() {
                for (feature, w) in weights.iter_mut().enumerate() {
                    penalty += *w * *w;
                    let gradient = grad_w[class][feature] / n + params.l2 * *w;
                    *w -= params.learning_rate * gradient;
                }
                model.bias[class] -= params.learning_rate * grad_b[class] / n;
            }
            loss += 0.5 * params.l2 * penalty;
            model.iterations = iteration;

            if iteration % 50 == 0 {
                debug!("iteration {iteration}: loss {loss:.6}");
            }
            if (previous_loss - loss).abs() < params.tolerance {
                info!("Converged after {iteration} iterations (loss {loss:.6})");
                break;
            }
            previous_loss = loss;
        }

        Ok(model)
    }

    pub fn n_classes(&self) -> usize {
        self.bias.len()
    }

    /// Softmax class probabilities for one row.
    pub fn predict_proba(&self, row: &SparseVector) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(weights, bias)| {
                bias + row
                    .iter()
                    .filter(|(feature, _)| *feature < weights.len())
                    .map(|&(feature, value)| weights[feature] * value)
                    .sum::<f64>()
            })
            .collect();

        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    /// Most probable class; the lowest index wins ties.
    pub fn predict(&self, row: &SparseVector) -> usize {
        let probs = self.predict_proba(row);
        let mut best = 0;
        for (class, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = class;
            }
        }
        best
    }
}
