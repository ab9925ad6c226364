//! Collaborateur spectral
//!
//! Conversion numérique des séquences et spectrogramme à fenêtres de Hamming.

pub mod error;
pub mod numeric;
pub mod spectrogram;

pub use error::{Result, SpectralError};
pub use numeric::{numeric_code, to_numeric, to_signal};
pub use spectrogram::{Spectrogram, SpectrogramConfig};
