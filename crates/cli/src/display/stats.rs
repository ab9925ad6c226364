//! Affichage des statistiques

use genent_core::{PipelineReport, SequenceEntropy};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SequenceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Bases")]
    bases: usize,
    #[tabled(rename = "Encoded")]
    encoded: usize,
    #[tabled(rename = "Unknown")]
    unknown: usize,
    #[tabled(rename = "Windows")]
    windows: usize,
    #[tabled(rename = "Min H")]
    min: String,
    #[tabled(rename = "Mean H")]
    mean: String,
    #[tabled(rename = "Max H")]
    max: String,
    #[tabled(rename = "SHA-256")]
    checksum: String,
}

impl From<&SequenceEntropy> for SequenceRow {
    fn from(seq: &SequenceEntropy) -> Self {
        let summary = seq.summary();
        let fmt = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{:.4}", v));

        SequenceRow {
            id: seq.id.chars().take(24).collect(),
            bases: seq.bases,
            encoded: seq.encoded.len(),
            unknown: seq.encoded.passed_through,
            windows: seq.entropies.len(),
            min: fmt(summary.map(|s| s.min)),
            mean: fmt(summary.map(|s| s.mean)),
            max: fmt(summary.map(|s| s.max)),
            checksum: seq.encoded.checksum().chars().take(12).collect(),
        }
    }
}

/// Tableau récapitulatif, une ligne par séquence
pub fn summary_table(report: &PipelineReport) -> String {
    let rows: Vec<SequenceRow> = report.sequences.iter().map(SequenceRow::from).collect();
    Table::new(rows).to_string()
}

/// Affiche les statistiques globales d'une exécution
pub fn display_stats(report: &PipelineReport) {
    if report.is_empty() {
        println!("Aucune séquence évaluée");
        return;
    }

    let total_bases: usize = report.sequences.iter().map(|s| s.bases).sum();
    let total_windows: usize = report.sequences.iter().map(|s| s.entropies.len()).sum();
    let unknown: usize = report.sequences.iter().map(|s| s.encoded.passed_through).sum();
    let all: Vec<f64> = report
        .sequences
        .iter()
        .flat_map(|s| s.entropies.iter().copied())
        .collect();
    let mean = if all.is_empty() {
        0.0
    } else {
        all.iter().sum::<f64>() / all.len() as f64
    };

    println!("\n┌────────────────────────────────────────────────┐");
    println!("│ Statistiques Globales                          │");
    println!("├────────────────────────────────────────────────┤");
    println!("│ Séquences évaluées     : {:>8}              │", report.len());
    println!("│ Séquences écartées     : {:>8}              │", report.skipped.len());
    println!("│ Bases totales          : {:>8}              │", total_bases);
    println!("│ Caractères inconnus    : {:>8}              │", unknown);
    println!("│ Fenêtres               : {:>8}              │", total_windows);
    println!("│ Entropie moyenne       : {:>8.4}              │", mean);
    println!("└────────────────────────────────────────────────┘");

    for failure in &report.skipped {
        println!("⚠️  {}: {}", failure.id, failure.error);
    }
}
