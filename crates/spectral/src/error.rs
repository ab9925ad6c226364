//! Erreurs du module spectral

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("Signal vide: aucun segment à analyser")]
    EmptySignal,

    #[error("Configuration spectrale invalide: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SpectralError>;
