//! Entropie de Shannon par fenêtre

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Calcule l'entropie de Shannon (en bits) de la distribution des symboles
///
/// H = -Σ p·log2(p), avec p = occurrences / longueur. Les symboles sont
/// accumulés dans un ordre fixe pour que le résultat soit reproductible au
/// bit près.
pub fn entropy(window: &str) -> Result<f64> {
    if window.is_empty() {
        return Err(Error::InvalidParameter {
            name: "window",
            value: 0,
            reason: "entropie indéfinie pour une fenêtre vide",
        });
    }

    if window.is_ascii() {
        let mut freq = [0usize; 128];
        for &b in window.as_bytes() {
            freq[b as usize] += 1;
        }
        Ok(from_counts(freq.iter().copied(), window.len()))
    } else {
        let mut freq: BTreeMap<char, usize> = BTreeMap::new();
        let mut len = 0;
        for c in window.chars() {
            *freq.entry(c).or_insert(0) += 1;
            len += 1;
        }
        Ok(from_counts(freq.into_values(), len))
    }
}

/// Entropie à partir d'effectifs; les effectifs nuls sont ignorés
pub fn from_counts(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    let total = total as f64;
    let mut h = 0.0;
    for count in counts {
        if count > 0 {
            let p = count as f64 / total;
            h -= p * p.log2();
        }
    }
    // -0.0 pour une fenêtre homogène
    h.max(0.0)
}

/// Entropie de chaque fenêtre, dans l'ordre
pub fn entropy_series<'a, I>(windows: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    windows.into_iter().map(entropy).collect()
}

/// Statistiques descriptives d'une série d'entropies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropySummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl EntropySummary {
    /// `None` pour une série vide
    pub fn from_series(series: &[f64]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = series.iter().sum::<f64>() / series.len() as f64;
        Some(Self {
            count: series.len(),
            min,
            max,
            mean,
        })
    }
}
