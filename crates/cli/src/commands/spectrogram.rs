//! Commande de spectrogramme

use crate::commands::pick_sequence;
use crate::config::AppConfig;
use crate::SpectrogramFormat;
use anyhow::{Context, Result};
use genent_core::SequenceReader;
use genent_spectral::Spectrogram;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "Segment")]
    segment: usize,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Dominant frequency")]
    frequency: String,
    #[tabled(rename = "Peak (dB)")]
    peak_db: String,
}

pub fn run(
    config: &AppConfig,
    input: PathBuf,
    id: Option<String>,
    format: SpectrogramFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("🌈 Spectrogramme de: {}", input.display());

    let sequences = SequenceReader::new()
        .read_path(&input)
        .with_context(|| format!("Lecture de {}", input.display()))?;
    let sequence = pick_sequence(&sequences, id.as_deref())?;

    let spectrogram = Spectrogram::from_sequence(&sequence.residues, &config.spectral)
        .with_context(|| format!("Spectrogramme de '{}'", sequence.id))?;
    println!(
        "{} segments de {} bases (recouvrement {}), {} fréquences",
        spectrogram.times.len(),
        spectrogram.segment_len,
        spectrogram.overlap,
        spectrogram.frequencies.len()
    );

    let rendered = match format {
        SpectrogramFormat::Table => segment_table(&spectrogram),
        SpectrogramFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "id": sequence.id,
            "segment_len": spectrogram.segment_len,
            "overlap": spectrogram.overlap,
            "frequencies": spectrogram.frequencies,
            "times": spectrogram.times,
            "power_db": spectrogram.to_decibels(),
        }))?,
    };

    match output {
        Some(output) => {
            std::fs::write(&output, rendered)
                .with_context(|| format!("Écriture de {}", output.display()))?;
            println!("Spectrogramme écrit dans: {}", output.display());
        }
        None => println!("\n{}", rendered),
    }

    Ok(())
}

/// Une ligne par segment: fréquence dominante et son niveau
fn segment_table(spectrogram: &Spectrogram) -> String {
    let decibels = spectrogram.to_decibels();
    let rows: Vec<SegmentRow> = spectrogram
        .dominant_bins()
        .into_iter()
        .enumerate()
        .map(|(i, bin)| SegmentRow {
            segment: i + 1,
            time: format!("{:.1}", spectrogram.times[i]),
            frequency: format!("{:.4}", spectrogram.frequencies[bin]),
            peak_db: format!("{:.2}", decibels[i][bin]),
        })
        .collect();

    Table::new(rows).to_string()
}
