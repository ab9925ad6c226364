//! Spectrogramme par transformée de Fourier à court terme
//!
//! Chaque segment est centré (tendance constante retirée), pondéré par une
//! fenêtre de Hamming périodique, puis transformé. La puissance est une
//! densité spectrale unilatérale mise à l'échelle par `1 / (fs · Σw²)`.

use crate::error::{Result, SpectralError};
use crate::numeric::to_signal;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Paramètres du spectrogramme
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    /// Longueur d'un segment
    pub segment_len: usize,
    /// Recouvrement entre segments consécutifs
    pub overlap: usize,
    /// Fréquence d'échantillonnage
    pub sample_rate: f64,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            segment_len: 100,
            overlap: 50,
            sample_rate: 1.0,
        }
    }
}

impl SpectrogramConfig {
    pub fn validate(&self) -> Result<()> {
        if self.segment_len == 0 {
            return Err(SpectralError::InvalidConfig(
                "segment_len doit être strictement positif".to_string(),
            ));
        }
        if self.overlap >= self.segment_len {
            return Err(SpectralError::InvalidConfig(format!(
                "overlap ({}) doit être inférieur à segment_len ({})",
                self.overlap, self.segment_len
            )));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(SpectralError::InvalidConfig(format!(
                "sample_rate invalide: {}",
                self.sample_rate
            )));
        }
        Ok(())
    }
}

/// Surface temps-fréquence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrogram {
    /// Fréquences des lignes, `k · fs / segment_len`
    pub frequencies: Vec<f64>,
    /// Centre de chaque segment
    pub times: Vec<f64>,
    /// Puissance, indexée `[segment][fréquence]`
    pub power: Vec<Vec<f64>>,
    /// Longueur de segment effectivement utilisée
    pub segment_len: usize,
    /// Recouvrement effectivement utilisé
    pub overlap: usize,
}

/// Fenêtre de Hamming périodique de longueur `n`
fn hamming(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / n as f64).cos())
        .collect()
}

impl Spectrogram {
    /// Calcule le spectrogramme d'un signal réel
    pub fn compute(signal: &[f64], config: &SpectrogramConfig) -> Result<Self> {
        config.validate()?;
        if signal.is_empty() {
            return Err(SpectralError::EmptySignal);
        }

        let (nperseg, overlap) = if signal.len() < config.segment_len {
            let nperseg = signal.len();
            let overlap = config.overlap.min(nperseg / 2);
            warn!(
                segment_requested = config.segment_len,
                segment_used = nperseg,
                overlap_requested = config.overlap,
                overlap_used = overlap,
                "Signal plus court qu'un segment: segment et recouvrement réduits"
            );
            (nperseg, overlap)
        } else {
            (config.segment_len, config.overlap)
        };

        let step = nperseg - overlap;
        let segments = (signal.len() - overlap) / step;
        let fs = config.sample_rate;

        let window = hamming(nperseg);
        let scale = 1.0 / (fs * window.iter().map(|w| w * w).sum::<f64>());
        let bins = nperseg / 2 + 1;

        let power: Vec<Vec<f64>> = (0..segments)
            .into_par_iter()
            .map(|s| {
                let start = s * step;
                periodogram(&signal[start..start + nperseg], &window, scale)
            })
            .collect();

        let frequencies = (0..bins).map(|k| k as f64 * fs / nperseg as f64).collect();
        let times = (0..segments)
            .map(|s| (s * step) as f64 / fs + nperseg as f64 / (2.0 * fs))
            .collect();

        debug!(segments, bins, nperseg, "Spectrogramme calculé");

        Ok(Self {
            frequencies,
            times,
            power,
            segment_len: nperseg,
            overlap,
        })
    }

    /// Spectrogramme d'une séquence de bases (A→0, T→1, G→2, C→3, autre→-1)
    pub fn from_sequence(sequence: &str, config: &SpectrogramConfig) -> Result<Self> {
        Self::compute(&to_signal(sequence), config)
    }

    /// Puissance en décibels, `10 · log10(p)`
    pub fn to_decibels(&self) -> Vec<Vec<f64>> {
        self.power
            .iter()
            .map(|row| row.iter().map(|p| 10.0 * p.log10()).collect())
            .collect()
    }

    /// Indice de la fréquence dominante (hors composante continue) par segment
    pub fn dominant_bins(&self) -> Vec<usize> {
        self.power
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .skip(1)
                    .fold((0, f64::NEG_INFINITY), |best, (k, &p)| {
                        if p > best.1 {
                            (k, p)
                        } else {
                            best
                        }
                    })
                    .0
            })
            .collect()
    }
}

/// Densité spectrale unilatérale d'un segment
fn periodogram(segment: &[f64], window: &[f64], scale: f64) -> Vec<f64> {
    let n = segment.len();
    let mean = segment.iter().sum::<f64>() / n as f64;
    let tapered: Vec<f64> = segment
        .iter()
        .zip(window)
        .map(|(x, w)| (x - mean) * w)
        .collect();

    let bins = n / 2 + 1;
    (0..bins)
        .map(|k| {
            let (mut re, mut im) = (0.0, 0.0);
            for (i, y) in tapered.iter().enumerate() {
                let angle = 2.0 * PI * (k * i % n) as f64 / n as f64;
                re += y * angle.cos();
                im -= y * angle.sin();
            }
            let p = (re * re + im * im) * scale;
            // Repli du spectre négatif, sauf DC et Nyquist
            let nyquist = n % 2 == 0 && k == n / 2;
            if k == 0 || nyquist {
                p
            } else {
                2.0 * p
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_periodic() {
        let w = hamming(4);
        assert!((w[0] - 0.08).abs() < 1e-12);
        assert!((w[2] - 1.0).abs() < 1e-12);
        assert!((w[1] - w[3]).abs() < 1e-12);
    }

    #[test]
    fn test_config_validation() {
        assert!(SpectrogramConfig::default().validate().is_ok());

        let bad = SpectrogramConfig {
            overlap: 100,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(SpectralError::InvalidConfig(_))));

        let bad = SpectrogramConfig {
            segment_len: 0,
            overlap: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_constant_signal_has_no_power() {
        let spec = Spectrogram::compute(&[2.0; 300], &SpectrogramConfig::default()).unwrap();
        for row in &spec.power {
            for p in row {
                assert!(p.abs() < 1e-20);
            }
        }
    }

    #[test]
    fn test_empty_signal() {
        let err = Spectrogram::compute(&[], &SpectrogramConfig::default()).unwrap_err();
        assert_eq!(err, SpectralError::EmptySignal);
    }
}
