//! Lecture de sources FASTA multi-enregistrements

use crate::error::{Error, Result};
use crate::sequence::Sequence;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Lecteur de sources FASTA
///
/// Une ligne commençant par `>` ouvre un enregistrement; les lignes suivantes
/// sont nettoyées, mises en majuscules et concaténées jusqu'au prochain
/// en-tête. Le contenu placé avant le premier en-tête est une erreur de format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceReader;

/// Enregistrement en cours d'accumulation
struct PendingRecord {
    id: String,
    line: usize,
    residues: String,
}

impl SequenceReader {
    pub fn new() -> Self {
        Self
    }

    /// Lit tous les enregistrements, dans l'ordre de la source
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<Sequence>> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut current: Option<PendingRecord> = None;

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let line = line.trim();

            if let Some(header) = line.strip_prefix('>') {
                Self::flush(current.take(), &mut records, &mut seen)?;
                current = Some(PendingRecord {
                    id: header.trim().to_string(),
                    line: line_no,
                    residues: String::new(),
                });
            } else if line.is_empty() {
                continue;
            } else {
                match current.as_mut() {
                    Some(record) => record.residues.push_str(&line.to_uppercase()),
                    None => {
                        return Err(Error::format(
                            line_no,
                            "contenu de séquence avant le premier en-tête '>'",
                        ))
                    }
                }
            }
        }
        Self::flush(current, &mut records, &mut seen)?;

        info!(records = records.len(), "Source FASTA lue");
        Ok(records)
    }

    /// Lit une source en mémoire
    pub fn read_str(&self, source: &str) -> Result<Vec<Sequence>> {
        self.read(source.as_bytes())
    }

    /// Lit un fichier FASTA
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<Sequence>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Ouverture de la source");
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    fn flush(
        pending: Option<PendingRecord>,
        records: &mut Vec<Sequence>,
        seen: &mut HashSet<String>,
    ) -> Result<()> {
        let Some(record) = pending else {
            return Ok(());
        };

        if record.id.is_empty() {
            warn!(line = record.line, "En-tête sans identifiant: enregistrement ignoré");
            return Ok(());
        }

        if !seen.insert(record.id.clone()) {
            return Err(Error::format(
                record.line,
                format!("identifiant dupliqué '{}'", record.id),
            ));
        }

        records.push(Sequence::new(record.id, record.residues));
        Ok(())
    }
}

/// Raccourci: lit un fichier FASTA avec le lecteur par défaut
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<Sequence>> {
    SequenceReader::new().read_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_multi_line_records() {
        let source = ">seq1 description\nacg\nTT  \n>seq2\nGGCC\n";
        let records = SequenceReader::new().read_str(source).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Sequence::new("seq1 description", "ACGTT"));
        assert_eq!(records[1], Sequence::new("seq2", "GGCC"));
    }

    #[test]
    fn test_empty_body_is_kept() {
        let records = SequenceReader::new()
            .read_str(">empty\n>full\nAC\n")
            .unwrap();

        assert_eq!(records[0], Sequence::new("empty", ""));
        assert_eq!(records[1], Sequence::new("full", "AC"));
    }

    #[test]
    fn test_empty_identifier_is_dropped() {
        let records = SequenceReader::new()
            .read_str(">\nAAAA\n>kept\nCC\n")
            .unwrap();

        assert_eq!(records, vec![Sequence::new("kept", "CC")]);
    }

    #[test]
    fn test_identifier_is_trimmed_only() {
        let records = SequenceReader::new()
            .read_str(">  NC_045512.2 |Severe  \nA\n")
            .unwrap();

        assert_eq!(records[0].id, "NC_045512.2 |Severe");
    }

    #[test]
    fn test_content_before_header_is_format_error() {
        let err = SequenceReader::new()
            .read_str("\nACGT\n>seq\nAC\n")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, Error::Format { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_identifier_is_format_error() {
        let err = SequenceReader::new()
            .read_str(">a\nAC\n>b\nGG\n>a\nTT\n")
            .unwrap_err();

        assert!(matches!(err, Error::Format { line: 5, .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_blank_lines_and_empty_source() {
        assert!(SequenceReader::new().read_str("").unwrap().is_empty());
        assert!(SequenceReader::new().read_str("\n\n  \n").unwrap().is_empty());

        let records = SequenceReader::new()
            .read_str(">s\nAC\n\nGT\n")
            .unwrap();
        assert_eq!(records[0].residues, "ACGT");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_fasta("/nonexistent/genent/input.fasta").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
