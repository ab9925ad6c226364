//! Conversion des bases en valeurs numériques

use genent_core::Nucleotide;

/// Valeur attribuée aux symboles hors de {A, C, G, T}
pub const UNKNOWN_CODE: i32 = -1;

/// Code numérique d'une base: A→0, T→1, G→2, C→3
pub fn numeric_code(base: Nucleotide) -> i32 {
    match base {
        Nucleotide::A => 0,
        Nucleotide::T => 1,
        Nucleotide::G => 2,
        Nucleotide::C => 3,
    }
}

/// Convertit une séquence en codes numériques (-1 pour l'inconnu)
pub fn to_numeric(sequence: &str) -> Vec<i32> {
    sequence
        .chars()
        .map(|c| Nucleotide::from_char(c).map_or(UNKNOWN_CODE, numeric_code))
        .collect()
}

/// Signal réel prêt pour l'analyse spectrale
pub fn to_signal(sequence: &str) -> Vec<f64> {
    to_numeric(sequence).into_iter().map(f64::from).collect()
}
