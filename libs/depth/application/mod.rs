//! Application layer: the ladder core and the terminal visualizer

pub mod ladder;
pub mod visualizer;
