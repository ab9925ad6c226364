//! Orchestration: lecture → encodage → fenêtrage → entropie

use crate::encoder::{BaseEncoder, UnknownBasePolicy};
use crate::entropy::{entropy_series, EntropySummary};
use crate::error::{Error, Result};
use crate::reader::SequenceReader;
use crate::sequence::{EncodedSequence, Sequence};
use crate::window::{validate_params, windows, Windows};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

// Importer les macros depuis la racine du crate
use crate::log_operation;

/// Comportement face à un enregistrement en échec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Le premier échec (dans l'ordre de la source) interrompt l'exécution
    #[default]
    Abort,
    /// L'enregistrement est écarté et signalé, les autres sont traités
    Skip,
}

/// Configuration du pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Taille des fenêtres, en caractères encodés
    pub window_size: usize,
    /// Pas entre deux fenêtres
    pub step: usize,
    pub failure_policy: FailurePolicy,
    pub unknown_bases: UnknownBasePolicy,
    /// Traiter les séquences indépendantes en parallèle
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            step: 10,
            failure_policy: FailurePolicy::Abort,
            unknown_bases: UnknownBasePolicy::PassThrough,
            parallel: true,
        }
    }
}

impl PipelineConfig {
    pub fn new(window_size: usize, step: usize) -> Self {
        Self {
            window_size,
            step,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_params(self.window_size, self.step)
    }
}

/// Série d'entropies d'une séquence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceEntropy {
    pub id: String,
    /// Nombre de symboles de la séquence source
    pub bases: usize,
    pub encoded: EncodedSequence,
    pub window_size: usize,
    pub step: usize,
    /// Une valeur par fenêtre, dans l'ordre des positions
    pub entropies: Vec<f64>,
}

impl SequenceEntropy {
    /// Fenêtres de la séquence encodée, recalculées à la demande
    pub fn windows(&self) -> Result<Windows<'_>> {
        windows(&self.encoded.bits, self.window_size, self.step)
    }

    pub fn summary(&self) -> Option<EntropySummary> {
        EntropySummary::from_series(&self.entropies)
    }
}

/// Enregistrement écarté avec `FailurePolicy::Skip`
#[derive(Debug)]
pub struct RecordFailure {
    pub id: String,
    pub error: Error,
}

/// Résultat d'une exécution, dans l'ordre de la source
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub sequences: Vec<SequenceEntropy>,
    pub skipped: Vec<RecordFailure>,
}

impl PipelineReport {
    /// Résultat d'une séquence par identifiant
    pub fn get(&self, id: &str) -> Option<&SequenceEntropy> {
        self.sequences.iter().find(|s| s.id == id)
    }

    /// Série d'entropies d'une séquence par identifiant
    pub fn series(&self, id: &str) -> Option<&[f64]> {
        self.get(id).map(|s| s.entropies.as_slice())
    }

    pub fn first(&self) -> Option<&SequenceEntropy> {
        self.sequences.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Pipeline complet
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    reader: SequenceReader,
    encoder: BaseEncoder,
}

impl Pipeline {
    /// Crée un pipeline; les paramètres de fenêtrage sont vérifiés ici
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            encoder: BaseEncoder::new(config.unknown_bases),
            reader: SequenceReader::new(),
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Exécute le pipeline sur une source FASTA
    pub fn run<R: BufRead>(&self, source: R) -> Result<PipelineReport> {
        let sequences = self.reader.read(source)?;
        self.process_all(&sequences)
    }

    pub fn run_str(&self, source: &str) -> Result<PipelineReport> {
        self.run(source.as_bytes())
    }

    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<PipelineReport> {
        let sequences = self.reader.read_path(path)?;
        self.process_all(&sequences)
    }

    /// Encode, découpe et évalue une séquence
    ///
    /// Tout ou rien: aucune série partielle n'est renvoyée en cas d'échec.
    pub fn process(&self, sequence: &Sequence) -> Result<SequenceEntropy> {
        let encoded = self
            .encoder
            .encode_sequence(sequence)
            .map_err(|e| e.in_record(&sequence.id))?;

        let entropies = windows(&encoded.bits, self.config.window_size, self.config.step)
            .and_then(|ws| entropy_series(ws.map(|w| w.text)))
            .map_err(|e| e.in_record(&sequence.id))?;

        debug!(
            id = %sequence.id,
            encoded_len = encoded.len(),
            windows = entropies.len(),
            "Séquence évaluée"
        );

        Ok(SequenceEntropy {
            id: sequence.id.clone(),
            bases: sequence.len(),
            encoded,
            window_size: self.config.window_size,
            step: self.config.step,
            entropies,
        })
    }

    /// Traite toutes les séquences, en parallèle si configuré
    pub fn process_all(&self, sequences: &[Sequence]) -> Result<PipelineReport> {
        log_operation!("pipeline", {
            let results: Vec<Result<SequenceEntropy>> = if self.config.parallel {
                sequences.par_iter().map(|s| self.process(s)).collect()
            } else {
                sequences.iter().map(|s| self.process(s)).collect()
            };

            let mut report = PipelineReport::default();
            for (sequence, result) in sequences.iter().zip(results) {
                match result {
                    Ok(scored) => report.sequences.push(scored),
                    Err(error) => match self.config.failure_policy {
                        FailurePolicy::Abort => return Err(error),
                        FailurePolicy::Skip => {
                            warn!(id = %sequence.id, %error, "Séquence écartée");
                            report.skipped.push(RecordFailure {
                                id: sequence.id.clone(),
                                error,
                            });
                        }
                    },
                }
            }

            info!(
                sequences = report.sequences.len(),
                skipped = report.skipped.len(),
                window_size = self.config.window_size,
                step = self.config.step,
                "Pipeline terminé"
            );
            Ok(report)
        })
    }
}
