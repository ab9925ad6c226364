//! Commande du pipeline complet

use crate::config::AppConfig;
use crate::display::stats::{display_stats, summary_table};
use crate::{create_progress_bar, create_spinner, Selection};
use anyhow::{bail, Context, Result};
use genent_core::output::{write_binary_sequences, write_entropies, write_windows};
use genent_core::{Pipeline, PipelineReport, SequenceEntropy};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(config: &AppConfig, input: PathBuf, output: PathBuf, selection: Selection) -> Result<()> {
    println!("🧬 Analyse d'entropie de: {}", input.display());

    // 1. Lire, encoder, découper, évaluer
    let pipeline = Pipeline::new(config.pipeline.clone()).context("Paramètres du pipeline")?;
    let spinner = create_spinner("Calcul des entropies...");
    let report = pipeline
        .run_path(&input)
        .with_context(|| format!("Analyse de {}", input.display()))?;
    spinner.finish_with_message(format!("{} séquences évaluées", report.len()));

    let selected = select(&report, &selection)?;

    // 2. Créer le répertoire de sortie
    std::fs::create_dir_all(&output)
        .with_context(|| format!("Création du répertoire {}", output.display()))?;

    // 3. Séquences binaires
    let binary_path = output.join(&config.output.binary_file);
    write_file(&binary_path, |w| {
        write_binary_sequences(w, report.sequences.iter().map(|s| &s.encoded))
    })?;
    println!("Séquences binaires écrites dans {}", binary_path.display());

    // 4. Fenêtres et entropies des séquences choisies
    let several = selected.len() > 1;
    let pb = create_progress_bar(selected.len() as u64, "Écriture des fenêtres...");
    for (rank, scored) in selected.iter().enumerate() {
        let windows_path = per_sequence_path(&output, &config.output.windows_file, rank, &scored.id, several);
        let entropy_path = per_sequence_path(&output, &config.output.entropy_file, rank, &scored.id, several);

        write_file(&windows_path, |w| write_windows(w, scored.windows()?))?;
        write_file(&entropy_path, |w| write_entropies(w, &scored.entropies))?;

        info!(
            id = %scored.id,
            windows = %windows_path.display(),
            entropies = %entropy_path.display(),
            "Fichiers écrits"
        );
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} séquence(s) détaillée(s)", selected.len()));

    // 5. Statistiques
    println!("\n{}", summary_table(&report));
    display_stats(&report);

    println!("\n✅ Analyse terminée!");

    Ok(())
}

/// Séquences détaillées selon la sélection demandée
fn select<'a>(report: &'a PipelineReport, selection: &Selection) -> Result<Vec<&'a SequenceEntropy>> {
    let selected: Vec<&SequenceEntropy> = match selection {
        Selection::First => report.first().into_iter().collect(),
        Selection::All => report.sequences.iter().collect(),
        Selection::Id(id) => match report.get(id) {
            Some(scored) => vec![scored],
            None => bail!("Séquence '{}' absente ou écartée", id),
        },
    };

    if selected.is_empty() {
        bail!("Aucune séquence évaluée");
    }
    Ok(selected)
}

/// Écrit un fichier en entier via un tampon
fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> genent_core::Result<()>,
{
    let file = File::create(path).with_context(|| format!("Création de {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).with_context(|| format!("Écriture de {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

/// Nom de fichier par séquence; préfixé par le rang si plusieurs séquences
fn per_sequence_path(dir: &Path, name: &Path, rank: usize, id: &str, several: bool) -> PathBuf {
    if !several {
        return dir.join(name);
    }

    let stem: String = id
        .split_whitespace()
        .next()
        .unwrap_or("sequence")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let file_name = name
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    dir.join(format!("{:03}_{}_{}", rank + 1, stem, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genent_core::PipelineConfig;

    #[test]
    fn test_per_sequence_path() {
        let dir = Path::new("out");
        let name = Path::new("entropy_values.txt");

        assert_eq!(per_sequence_path(dir, name, 0, "seq1", false), dir.join("entropy_values.txt"));
        assert_eq!(
            per_sequence_path(dir, name, 1, "NC_045512.2 Severe/acute", true),
            dir.join("002_NC_045512.2_entropy_values.txt")
        );
        assert_eq!(
            per_sequence_path(dir, name, 0, "a/b", true),
            dir.join("001_a_b_entropy_values.txt")
        );
    }

    #[test]
    fn test_select() {
        let report = Pipeline::new(PipelineConfig::new(2, 2))
            .unwrap()
            .run_str(">a\nAC\n>b\nGT\n")
            .unwrap();

        let first = select(&report, &Selection::First).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "a");

        assert_eq!(select(&report, &Selection::All).unwrap().len(), 2);
        assert_eq!(select(&report, &Selection::Id("b".into())).unwrap()[0].id, "b");
        assert!(select(&report, &Selection::Id("zz".into())).is_err());
    }

    #[test]
    fn test_run_writes_all_files() {
        let dir = std::env::temp_dir().join(format!("genent-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("input.fasta");
        std::fs::write(&input, ">seq1\nACGT\n>seq2\nAAAA\n").unwrap();

        let mut config = AppConfig::default();
        config.pipeline.window_size = 8;
        config.pipeline.step = 8;
        let out = dir.join("out");
        run(&config, input, out.clone(), Selection::All).unwrap();

        let binary = std::fs::read_to_string(out.join("binary_sequences.txt")).unwrap();
        assert_eq!(
            binary,
            "Sequence ID: seq1\nBinary Sequence: 00011011\n\nSequence ID: seq2\nBinary Sequence: 00000000\n\n"
        );
        let windows = std::fs::read_to_string(out.join("001_seq1_output_windows.txt")).unwrap();
        assert_eq!(windows, "Window 1: 00011011\n");
        let entropies = std::fs::read_to_string(out.join("002_seq2_entropy_values.txt")).unwrap();
        assert_eq!(entropies, "Entropy: 0.0\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
