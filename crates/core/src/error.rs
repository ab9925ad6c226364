//! Types d'erreurs pour la bibliothèque d'entropie génomique

use thiserror::Error;

/// Catégorie d'une erreur, indépendamment du contexte qui l'entoure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source mal formée ou séquence refusée
    Format,
    /// Paramètre de fenêtrage illégal ou fenêtre vide
    InvalidParameter,
    /// Échec de lecture/écriture aux frontières
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Format invalide (ligne {line}): {reason}")]
    Format { line: usize, reason: String },

    #[error("Base non reconnue '{base}' à la position {offset} de la séquence '{id}'")]
    UnknownBase { id: String, base: char, offset: usize },

    #[error("Paramètre invalide {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Séquence '{id}': {source}")]
    Record {
        id: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Erreur de format rattachée à une ligne de la source
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Error::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Rattache une erreur à l'identifiant de la séquence fautive
    pub fn in_record(self, id: impl Into<String>) -> Self {
        match self {
            // Pas de double enveloppe
            Error::Record { .. } => self,
            other => Error::Record {
                id: id.into(),
                source: Box::new(other),
            },
        }
    }

    /// Catégorie de l'erreur, en traversant l'enveloppe `Record`
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } | Error::UnknownBase { .. } => ErrorKind::Format,
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::Io(_) => ErrorKind::Io,
            Error::Record { source, .. } => source.kind(),
        }
    }

    /// Identifiant de la séquence fautive, s'il est connu
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Error::Record { id, .. } | Error::UnknownBase { id, .. } => Some(id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
