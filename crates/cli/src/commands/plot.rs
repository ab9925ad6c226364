//! Commande de visualisation d'une série d'entropies

use crate::display::visualizer::{entropy_html, entropy_json, entropy_table, sparkline, TITLE};
use crate::PlotFormat;
use anyhow::{Context, Result};
use console::style;
use genent_core::output::parse_entropies;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub fn run(input: PathBuf, format: PlotFormat, output: Option<PathBuf>) -> Result<()> {
    println!("📊 Visualisation de: {}", input.display());

    // 1. Lire les entropies
    let file = File::open(&input).with_context(|| format!("Ouverture de {}", input.display()))?;
    let values = parse_entropies(BufReader::new(file))
        .with_context(|| format!("Lecture des entropies de {}", input.display()))?;
    println!("{} valeurs chargées", values.len());

    // 2. Visualiser selon le format
    let rendered = match format {
        PlotFormat::Table => {
            format!(
                "{}\n{}\n{}",
                style(TITLE).bold(),
                sparkline(&values),
                entropy_table(&values)
            )
        }
        PlotFormat::Json => serde_json::to_string_pretty(&entropy_json(&values))?,
        PlotFormat::Html => entropy_html(&values),
    };

    match output {
        Some(output) => {
            std::fs::write(&output, rendered)
                .with_context(|| format!("Écriture de {}", output.display()))?;
            println!("Visualisation écrite dans: {}", output.display());
        }
        None => println!("\n{}", rendered),
    }

    Ok(())
}
