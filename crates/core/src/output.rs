//! Formats texte échangés entre les étapes
//!
//! ```text
//! Sequence ID: seq1
//! Binary Sequence: 00011011
//!
//! Window 1: 00011011
//! Entropy: 1.0
//! ```

use crate::error::{Error, Result};
use crate::sequence::EncodedSequence;
use crate::window::Window;
use std::io::{BufRead, Write};

const SEQUENCE_ID: &str = "Sequence ID: ";
const BINARY_SEQUENCE: &str = "Binary Sequence: ";
const WINDOW: &str = "Window ";
const ENTROPY: &str = "Entropy: ";

/// Représentation décimale la plus courte, toujours avec une partie fractionnaire
///
/// Jamais de notation exponentielle: `1e-7` s'écrit `0.0000001`.
pub fn format_entropy(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Écrit les séquences encodées: identifiant, chaîne binaire, ligne vide
pub fn write_binary_sequences<'a, W, I>(out: &mut W, sequences: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a EncodedSequence>,
{
    for seq in sequences {
        writeln!(out, "{}{}", SEQUENCE_ID, seq.id)?;
        writeln!(out, "{}{}", BINARY_SEQUENCE, seq.bits)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Écrit une ligne `Window <rang>: <contenu>` par fenêtre
pub fn write_windows<'a, W, I>(out: &mut W, windows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Window<'a>>,
{
    for window in windows {
        writeln!(out, "{}{}: {}", WINDOW, window.index, window.text)?;
    }
    Ok(())
}

/// Écrit une ligne `Entropy: <valeur>` par fenêtre
pub fn write_entropies<W: Write>(out: &mut W, entropies: &[f64]) -> Result<()> {
    for &value in entropies {
        writeln!(out, "{}{}", ENTROPY, format_entropy(value))?;
    }
    Ok(())
}

/// Relit un fichier de fenêtres; les lignes vides sont ignorées
///
/// Seul le terminateur de ligne est retiré: une fenêtre peut contenir des
/// blancs recopiés par l'encodeur, y compris en fin de ligne.
pub fn parse_windows<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut windows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (rank, text) = line
            .strip_prefix(WINDOW)
            .and_then(|rest| rest.split_once(": "))
            .ok_or_else(|| Error::format(line_no, "ligne attendue: 'Window <n>: <fenêtre>'"))?;

        rank.parse::<usize>()
            .map_err(|_| Error::format(line_no, format!("rang de fenêtre invalide '{}'", rank)))?;

        if text.is_empty() {
            return Err(Error::format(line_no, "fenêtre vide"));
        }
        windows.push(text.to_string());
    }

    Ok(windows)
}

/// Relit un fichier d'entropies; les lignes vides sont ignorées
pub fn parse_entropies<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let raw = line
            .strip_prefix(ENTROPY)
            .ok_or_else(|| Error::format(line_no, "ligne attendue: 'Entropy: <valeur>'"))?;

        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::format(line_no, format!("valeur d'entropie invalide '{}'", raw)))?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::format(
                line_no,
                format!("entropie hors domaine: {}", raw),
            ));
        }
        values.push(value);
    }

    Ok(values)
}
