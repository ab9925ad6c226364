//! Encodeur base → chiffres binaires (2 bits par base)

use crate::error::{Error, Result};
use crate::sequence::{EncodedSequence, Nucleotide, Sequence};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Traitement des caractères hors de {A, C, G, T}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownBasePolicy {
    /// Le caractère est recopié tel quel dans la sortie (un seul symbole)
    #[default]
    PassThrough,
    /// Le premier caractère inconnu fait échouer l'encodage
    Reject,
}

/// Encode une chaîne de bases: A→00, C→01, G→10, T→11
///
/// Tout autre caractère est recopié tel quel. La sortie peut donc contenir
/// des symboles non binaires, ce qui décale les fenêtres en aval.
pub fn encode(sequence: &str) -> String {
    let mut bits = String::with_capacity(sequence.len() * 2);
    for c in sequence.chars() {
        match Nucleotide::from_char(c) {
            Some(base) => bits.push_str(base.bits()),
            None => bits.push(c),
        }
    }
    bits
}

/// Encodeur configurable
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseEncoder {
    policy: UnknownBasePolicy,
}

impl BaseEncoder {
    pub fn new(policy: UnknownBasePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownBasePolicy {
        self.policy
    }

    /// Encode un enregistrement complet
    pub fn encode_sequence(&self, sequence: &Sequence) -> Result<EncodedSequence> {
        let mut bits = String::with_capacity(sequence.residues.len() * 2);
        let mut recognized = 0;
        let mut passed_through = 0;

        for (offset, c) in sequence.residues.chars().enumerate() {
            match Nucleotide::from_char(c) {
                Some(base) => {
                    bits.push_str(base.bits());
                    recognized += 1;
                }
                None => match self.policy {
                    UnknownBasePolicy::PassThrough => {
                        bits.push(c);
                        passed_through += 1;
                    }
                    UnknownBasePolicy::Reject => {
                        return Err(Error::UnknownBase {
                            id: sequence.id.clone(),
                            base: c,
                            offset,
                        })
                    }
                },
            }
        }

        if passed_through > 0 {
            warn!(
                id = %sequence.id,
                passed_through,
                "Caractères non reconnus recopiés dans la chaîne binaire"
            );
        }

        Ok(EncodedSequence {
            id: sequence.id.clone(),
            bits,
            recognized,
            passed_through,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_acgt() {
        assert_eq!(encode("ACGT"), "00011011");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(encode("ANT"), "00N11");
        // Pas de normalisation de la casse
        assert_eq!(encode("a"), "a");
    }

    #[test]
    fn test_encode_sequence_counts() {
        let seq = Sequence::new("s", "ACNNGT");
        let encoded = BaseEncoder::default().encode_sequence(&seq).unwrap();

        assert_eq!(encoded.bits, "0001NN1011");
        assert_eq!(encoded.recognized, 4);
        assert_eq!(encoded.passed_through, 2);
        assert_eq!(encoded.len(), encoded.bits.chars().count());
        assert!(!encoded.is_strictly_binary());
    }

    #[test]
    fn test_reject_reports_offset() {
        let seq = Sequence::new("chr1", "ACGRT");
        let err = BaseEncoder::new(UnknownBasePolicy::Reject)
            .encode_sequence(&seq)
            .unwrap_err();

        match err {
            Error::UnknownBase { id, base, offset } => {
                assert_eq!(id, "chr1");
                assert_eq!(base, 'R');
                assert_eq!(offset, 3);
            }
            other => panic!("UnknownBase attendu, obtenu {other:?}"),
        }
    }

    #[test]
    fn test_encoding_is_one_way() {
        // Aucun décodage n'est fourni: avec la recopie des caractères
        // inconnus, deux entrées distinctes peuvent donner la même sortie.
        assert_eq!(encode("0A"), encode("A0"));
        assert_ne!("0A", "A0");
    }
}
