//! CLI pour l'analyse d'entropie de séquences génomiques

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod config;
mod display;

use commands::{encode, entropy, plot, run, spectrogram};
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "genent")]
#[command(about = "Encodage binaire et spectre d'entropie de séquences ADN", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration (toml, yaml, json…)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Paramètres du pipeline modifiables en ligne de commande
#[derive(clap::Args, Clone, Default)]
pub struct PipelineArgs {
    /// Taille des fenêtres (en chiffres encodés)
    #[arg(short, long)]
    window_size: Option<usize>,

    /// Pas entre deux fenêtres
    #[arg(short, long)]
    step: Option<usize>,

    /// Écarter les séquences en échec au lieu d'interrompre
    #[arg(long)]
    skip_invalid: bool,

    /// Refuser les caractères hors de {A, C, G, T}
    #[arg(long)]
    strict: bool,

    /// Désactiver le traitement parallèle
    #[arg(long)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Exécute le pipeline complet: binaire, fenêtres, entropies
    Run {
        /// Fichier FASTA d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Répertoire de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// Séquence à détailler (par défaut: la première)
        #[arg(long, conflicts_with = "all")]
        id: Option<String>,

        /// Détailler toutes les séquences
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Convertit un fichier FASTA en séquences binaires
    Encode {
        /// Fichier FASTA d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier de sortie
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Refuser les caractères hors de {A, C, G, T}
        #[arg(long)]
        strict: bool,
    },

    /// Calcule l'entropie de chaque fenêtre d'un fichier de fenêtres
    Entropy {
        /// Fichier de fenêtres (`Window <n>: <fenêtre>`)
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier d'entropies
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Affiche une série d'entropies
    Plot {
        /// Fichier d'entropies (`Entropy: <valeur>`)
        #[arg(short, long)]
        input: PathBuf,

        /// Type de visualisation
        #[arg(short, long, value_enum, default_value = "table")]
        format: PlotFormat,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spectrogramme d'une séquence (A→0, T→1, G→2, C→3)
    Spectrogram {
        /// Fichier FASTA d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Séquence à analyser (par défaut: la première)
        #[arg(long)]
        id: Option<String>,

        /// Type de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: SpectrogramFormat,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum PlotFormat {
    Table,
    Json,
    Html,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum SpectrogramFormat {
    Table,
    Json,
}

/// Séquences à détailler dans les fichiers de fenêtres et d'entropies
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    First,
    Id(String),
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Lecture de la configuration")?;
    genent_core::init_logging(config.log_level(cli.verbose), config.logging.format);

    match cli.command {
        Commands::Run {
            input,
            output,
            id,
            all,
            pipeline,
        } => {
            pipeline.apply(&mut config);
            let selection = match (id, all) {
                (Some(id), _) => Selection::Id(id),
                (None, true) => Selection::All,
                (None, false) => Selection::First,
            };
            run::run(&config, input, output, selection)?;
        }
        Commands::Encode {
            input,
            output,
            strict,
        } => {
            if strict {
                config.pipeline.unknown_bases = genent_core::UnknownBasePolicy::Reject;
            }
            let output = output.unwrap_or_else(|| config.output.binary_file.clone());
            encode::run(&config, input, output)?;
        }
        Commands::Entropy { input, output } => {
            let output = output.unwrap_or_else(|| config.output.entropy_file.clone());
            entropy::run(input, output)?;
        }
        Commands::Plot {
            input,
            format,
            output,
        } => {
            plot::run(input, format, output)?;
        }
        Commands::Spectrogram {
            input,
            id,
            format,
            output,
        } => {
            spectrogram::run(&config, input, id, format, output)?;
        }
    }

    Ok(())
}

impl PipelineArgs {
    /// Les options explicites priment sur la configuration
    fn apply(&self, config: &mut AppConfig) {
        if let Some(window_size) = self.window_size {
            config.pipeline.window_size = window_size;
        }
        if let Some(step) = self.step {
            config.pipeline.step = step;
        }
        if self.skip_invalid {
            config.pipeline.failure_policy = genent_core::FailurePolicy::Skip;
        }
        if self.strict {
            config.pipeline.unknown_bases = genent_core::UnknownBasePolicy::Reject;
        }
        if self.sequential {
            config.pipeline.parallel = false;
        }
    }
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}
