//! Sous-commandes

pub mod encode;
pub mod entropy;
pub mod plot;
pub mod run;
pub mod spectrogram;

use anyhow::{bail, Result};
use genent_core::Sequence;

/// Choisit une séquence par identifiant, ou la première
pub fn pick_sequence<'a>(sequences: &'a [Sequence], id: Option<&str>) -> Result<&'a Sequence> {
    match id {
        Some(id) => match sequences.iter().find(|s| s.id == id) {
            Some(seq) => Ok(seq),
            None => bail!("Séquence '{}' introuvable", id),
        },
        None => match sequences.first() {
            Some(seq) => Ok(seq),
            None => bail!("Aucune séquence dans la source"),
        },
    }
}
