//! # Octave Bands
//!
//! Log-scale octave band averaging for audio spectra. A linear-frequency
//! magnitude spectrum (the output of an FFT) is collapsed into a small
//! number of perceptually spaced bands, grouping frequencies the way human
//! hearing does.
//!
//! ## Quick Start
//!
//! ```
//! use octave_bands::BandAverager;
//!
//! // Magnitude spectrum from your FFT, computed at 48 kHz
//! let spectrum: Vec<f32> = vec![0.5; 1024];
//!
//! let mut averager = BandAverager::new(18, 48000.0)?;
//! let bands = averager.compute_averages(&spectrum)?;
//!
//! for (i, level) in bands.iter().enumerate() {
//!     println!("band {:2}: {:.3}", i, level);
//! }
//! # Ok::<(), octave_bands::AveragerError>(())
//! ```
//!
//! ## Band layout
//!
//! The range `[0, sample_rate / 2]` is halved repeatedly until the lowest
//! octave is no wider than 60 Hz. Every octave receives
//! `num_bins / octaves` equally wide bands. At 48 kHz this gives 9
//! octaves, so `num_bins` should be a multiple of 9 (see
//! [`BandCoverage`] for the alternative).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bands;
pub mod config;
pub mod error;

// Re-export main types
pub use bands::averager::BandAverager;
pub use bands::partition::{BandRange, OctavePartition};
pub use config::{AveragerConfig, BandCoverage};
pub use error::AveragerError;

/// Average one spectrum into log-spaced bands
///
/// Builds a one-shot [`BandAverager`] and returns an owned copy of its
/// output. Prefer keeping a `BandAverager` around when averaging once per
/// frame.
///
/// # Arguments
///
/// * `spectrum` - Linear magnitude spectrum
/// * `num_bins` - Number of output bands
/// * `sample_rate` - Sample rate the spectrum was computed at (Hz)
/// * `config` - Averager configuration
///
/// # Errors
///
/// Returns `AveragerError` if the arguments are invalid (see [`BandAverager`])
///
/// # Example
///
/// ```
/// use octave_bands::{average_spectrum, AveragerConfig};
///
/// let bands = average_spectrum(&[0.0f32; 512], 9, 44100.0, AveragerConfig::default())?;
/// assert_eq!(bands, vec![0.0; 9]);
/// # Ok::<(), octave_bands::AveragerError>(())
/// ```
pub fn average_spectrum(
    spectrum: &[f32],
    num_bins: usize,
    sample_rate: f32,
    config: AveragerConfig,
) -> Result<Vec<f32>, AveragerError> {
    let mut averager = BandAverager::with_config(num_bins, sample_rate, config)?;
    averager.compute_averages(spectrum).map(|bands| bands.to_vec())
}
