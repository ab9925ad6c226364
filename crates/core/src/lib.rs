//! genent core
//!
//! Encodage binaire de séquences génomiques, découpage en fenêtres glissantes
//! et entropie de Shannon par fenêtre.

pub mod encoder;
pub mod entropy;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod sequence;
pub mod window;

// Réexportations principales
pub use encoder::{encode, BaseEncoder, UnknownBasePolicy};
pub use entropy::{entropy, entropy_series, EntropySummary};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logging, LogFormat};
// La macro log_operation est automatiquement exportée à la racine du crate
pub use pipeline::{FailurePolicy, Pipeline, PipelineConfig, PipelineReport, RecordFailure, SequenceEntropy};
pub use reader::{read_fasta, SequenceReader};
pub use sequence::{EncodedSequence, Nucleotide, Sequence};
pub use window::{segment, window_count, windows, Window, Windows};
