//! Commande de calcul d'entropie sur un fichier de fenêtres

use crate::display::visualizer::sparkline;
use anyhow::{Context, Result};
use genent_core::output::{parse_windows, write_entropies};
use genent_core::{entropy_series, EntropySummary};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

pub fn run(input: PathBuf, output: PathBuf) -> Result<()> {
    println!("🧮 Entropie des fenêtres de: {}", input.display());

    let file = File::open(&input).with_context(|| format!("Ouverture de {}", input.display()))?;
    let windows = parse_windows(BufReader::new(file))
        .with_context(|| format!("Lecture des fenêtres de {}", input.display()))?;

    let entropies = entropy_series(windows.iter().map(String::as_str))?;

    let file = File::create(&output).with_context(|| format!("Création de {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_entropies(&mut writer, &entropies)?;
    writer.flush()?;

    match EntropySummary::from_series(&entropies) {
        Some(summary) => {
            println!("   Fenêtres: {}", summary.count);
            println!(
                "   Entropie min/moy/max: {:.4} / {:.4} / {:.4}",
                summary.min, summary.mean, summary.max
            );
            if summary.count <= 120 {
                println!("   {}", sparkline(&entropies));
            }
        }
        None => println!("   Aucune fenêtre"),
    }
    println!("\n✅ Entropies écrites dans {}", output.display());

    Ok(())
}
