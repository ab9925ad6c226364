//! Commande d'encodage

use crate::config::AppConfig;
use crate::create_spinner;
use anyhow::{Context, Result};
use genent_core::output::write_binary_sequences;
use genent_core::{BaseEncoder, EncodedSequence, SequenceReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub fn run(config: &AppConfig, input: PathBuf, output: PathBuf) -> Result<()> {
    println!("🧬 Encodage de: {}", input.display());

    // 1. Lire le fichier
    let spinner = create_spinner("Lecture du fichier FASTA...");
    let sequences = SequenceReader::new()
        .read_path(&input)
        .with_context(|| format!("Lecture de {}", input.display()))?;
    spinner.finish_with_message(format!("{} séquences lues", sequences.len()));

    // 2. Encoder
    let encoder = BaseEncoder::new(config.pipeline.unknown_bases);
    let encoded = sequences
        .iter()
        .map(|s| encoder.encode_sequence(s))
        .collect::<genent_core::Result<Vec<EncodedSequence>>>()?;

    // 3. Écrire
    let file = File::create(&output).with_context(|| format!("Création de {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_binary_sequences(&mut writer, &encoded)?;
    writer.flush()?;

    // 4. Statistiques
    let recognized: usize = encoded.iter().map(|e| e.recognized).sum();
    let unknown: usize = encoded.iter().map(|e| e.passed_through).sum();
    println!("\n📊 Statistiques:");
    println!("   Séquences encodées: {}", encoded.len());
    println!("   Bases reconnues: {}", recognized);
    println!("   Caractères recopiés: {}", unknown);
    println!("\n✅ Séquences binaires écrites dans {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_writes_binary_file() {
        let dir = std::env::temp_dir().join(format!("genent-encode-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("input.fasta");
        std::fs::write(&input, ">seq1\nacgt\n>seq2\nANA\n").unwrap();

        let output = dir.join("binary.txt");
        run(&AppConfig::default(), input.clone(), output.clone()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Sequence ID: seq1\nBinary Sequence: 00011011\n\nSequence ID: seq2\nBinary Sequence: 00N00\n\n"
        );

        // Mode strict: le caractère inconnu fait échouer la commande
        let mut strict = AppConfig::default();
        strict.pipeline.unknown_bases = genent_core::UnknownBasePolicy::Reject;
        assert!(run(&strict, input, dir.join("strict.txt")).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
