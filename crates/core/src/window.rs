//! Découpage en fenêtres glissantes

use crate::error::{Error, Result};

/// Fenêtre empruntée à une chaîne encodée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// Rang de la fenêtre, à partir de 1
    pub index: usize,
    /// Position de départ, en caractères
    pub offset: usize,
    /// Contenu de la fenêtre
    pub text: &'a str,
}

impl<'a> Window<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// Vérifie les paramètres de fenêtrage
pub fn validate_params(window_size: usize, step: usize) -> Result<()> {
    if window_size == 0 {
        return Err(Error::InvalidParameter {
            name: "window_size",
            value: window_size,
            reason: "doit être strictement positif",
        });
    }
    if step == 0 {
        return Err(Error::InvalidParameter {
            name: "step",
            value: step,
            reason: "doit être strictement positif",
        });
    }
    Ok(())
}

/// Nombre de fenêtres produites pour une donnée de `len` caractères
pub fn window_count(len: usize, window_size: usize, step: usize) -> usize {
    if window_size == 0 || step == 0 || len < window_size {
        return 0;
    }
    (len - window_size) / step + 1
}

/// Itérateur paresseux sur les fenêtres
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    data: &'a str,
    /// Frontières d'octets des caractères, seulement pour les données non ASCII
    boundaries: Option<Vec<usize>>,
    len: usize,
    window_size: usize,
    step: usize,
    offset: usize,
    index: usize,
}

impl<'a> Windows<'a> {
    fn byte_range(&self, start: usize, end: usize) -> (usize, usize) {
        match &self.boundaries {
            Some(bounds) => (bounds[start], bounds[end]),
            None => (start, end),
        }
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Window<'a>> {
        let end = self.offset.checked_add(self.window_size)?;
        if end > self.len {
            return None;
        }

        let (from, to) = self.byte_range(self.offset, end);
        self.index += 1;
        let window = Window {
            index: self.index,
            offset: self.offset,
            text: &self.data[from..to],
        };
        self.offset = self.offset.saturating_add(self.step);
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.offset > self.len {
            0
        } else {
            window_count(self.len - self.offset, self.window_size, self.step)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

/// Fenêtres de `window_size` caractères aux positions 0, step, 2·step, …
pub fn windows(data: &str, window_size: usize, step: usize) -> Result<Windows<'_>> {
    validate_params(window_size, step)?;

    let (boundaries, len) = if data.is_ascii() {
        (None, data.len())
    } else {
        let bounds: Vec<usize> = data
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(data.len()))
            .collect();
        let len = bounds.len() - 1;
        (Some(bounds), len)
    };

    Ok(Windows {
        data,
        boundaries,
        len,
        window_size,
        step,
        offset: 0,
        index: 0,
    })
}

/// Découpe `data` en fenêtres, dans l'ordre des positions
///
/// Une donnée plus courte que la fenêtre donne une liste vide.
pub fn segment(data: &str, window_size: usize, step: usize) -> Result<Vec<&str>> {
    Ok(windows(data, window_size, step)?.map(|w| w.text).collect())
}
