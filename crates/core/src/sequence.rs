//! Structures de séquences: bases, enregistrements lus et formes encodées

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Nucléotide standard reconnu par l'encodeur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Convertit un caractère en nucléotide (sensible à la casse)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Convertit un nucléotide en caractère
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Code binaire sur deux chiffres
    pub fn bits(self) -> &'static str {
        match self {
            Nucleotide::A => "00",
            Nucleotide::C => "01",
            Nucleotide::G => "10",
            Nucleotide::T => "11",
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        Nucleotide::from_char(c).ok_or(c)
    }
}

/// Enregistrement lu depuis une source FASTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Identifiant (unique dans la source)
    pub id: String,
    /// Symboles bruts, déjà en majuscules
    pub residues: String,
}

impl Sequence {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Nombre de symboles (caractères) de la séquence
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Séquence encodée en chiffres binaires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSequence {
    /// Identifiant de la séquence source
    pub id: String,
    /// Chaîne de chiffres binaires (avec d'éventuels symboles transmis tels quels)
    pub bits: String,
    /// Nombre de bases reconnues (A, C, G, T)
    pub recognized: usize,
    /// Nombre de caractères non reconnus transmis tels quels
    pub passed_through: usize,
}

impl EncodedSequence {
    /// Longueur en caractères: 2 × reconnues + 1 × non reconnues
    pub fn len(&self) -> usize {
        2 * self.recognized + self.passed_through
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Vrai si la chaîne ne contient que des chiffres 0/1
    pub fn is_strictly_binary(&self) -> bool {
        self.passed_through == 0
    }

    /// Checksum SHA-256 de la chaîne encodée
    pub fn checksum(&self) -> String {
        let hash = Sha256::digest(self.bits.as_bytes());
        format!("{:x}", hash)
    }
}

impl fmt::Display for EncodedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_conversion() {
        assert_eq!(Nucleotide::from_char('A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_char('T'), Some(Nucleotide::T));
        // L'encodeur ne normalise pas la casse
        assert_eq!(Nucleotide::from_char('a'), None);
        assert_eq!(Nucleotide::try_from('N'), Err('N'));
    }

    #[test]
    fn test_nucleotide_bits() {
        let codes: Vec<&str> = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T]
            .iter()
            .map(|n| n.bits())
            .collect();
        assert_eq!(codes, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_sequence_len_counts_chars() {
        let seq = Sequence::new("x", "ACÉT");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_checksum_is_stable() {
        let encoded = EncodedSequence {
            id: "seq".to_string(),
            bits: "00011011".to_string(),
            recognized: 4,
            passed_through: 0,
        };
        assert_eq!(encoded.checksum(), encoded.clone().checksum());
        assert_eq!(encoded.checksum().len(), 64);
        assert!(encoded.is_strictly_binary());
    }
}
