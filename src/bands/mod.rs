//! Log-scale band averaging
//!
//! Bridges a linear-frequency magnitude spectrum and a logarithmic
//! (octave-based) band layout:
//! - Frequency to bin mapping
//! - Octave partition of the Nyquist range
//! - Single-spectrum band averager
//! - Parallel averaging over a spectrogram

pub mod averager;
pub mod frames;
pub mod mapping;
pub mod partition;
