//! Rendu terminal et fichiers de visualisation

pub mod stats;
pub mod visualizer;
