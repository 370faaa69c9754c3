//! Life Census - bounded Game of Life with a per-generation census of
//! still lives, oscillators, spaceships and unclassified clusters

pub mod catalogue;
pub mod census;
pub mod core;
pub mod grid;
pub mod output;
pub mod simulation;
