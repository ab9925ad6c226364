//! Configuration de l'application
//!
//! Ordre de priorité: valeurs par défaut, fichier de configuration,
//! variables d'environnement `GENENT__<SECTION>__<CLÉ>`, options de la ligne
//! de commande.

use genent_core::{LogFormat, PipelineConfig};
use genent_spectral::SpectrogramConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Fichier cherché dans le répertoire courant si `--config` est absent
pub const DEFAULT_CONFIG_FILE: &str = "genent";

/// Noms des fichiers produits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub binary_file: PathBuf,
    pub windows_file: PathBuf,
    pub entropy_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            binary_file: PathBuf::from("binary_sequences.txt"),
            windows_file: PathBuf::from("output_windows.txt"),
            entropy_file: PathBuf::from("entropy_values.txt"),
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub spectral: SpectrogramConfig,
}

impl AppConfig {
    /// Charge la configuration
    ///
    /// Un fichier passé explicitement doit exister; le fichier par défaut
    /// est facultatif.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("GENENT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<AppConfig>()
    }

    /// Niveau de log effectif selon `-v`
    pub fn log_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.logging.level,
            1 => "debug",
            _ => "trace",
        }
    }
}
