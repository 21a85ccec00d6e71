//! DSP — tone synthesis, mixing and WAV encoding.
//!
//! Every stage is a pure function of its inputs, so the same catalog
//! always renders to bit-identical files.

pub mod envelope;
pub mod mixer;
pub mod oscillator;
pub mod renderer;
pub mod voice;
