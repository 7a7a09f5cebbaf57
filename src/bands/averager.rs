//! Log-scale band averager
//!
//! Collapses a linear magnitude spectrum into a fixed number of
//! perceptually spaced bands. The output buffer is owned by the averager
//! and overwritten in place on every call.
//!
//! # Example
//!
//! ```
//! use octave_bands::BandAverager;
//!
//! let mut averager = BandAverager::new(18, 48000.0)?;
//! let spectrum = vec![1.0f32; 1024];
//! let bands = averager.compute_averages(&spectrum)?;
//! assert_eq!(bands.len(), 18);
//! # Ok::<(), octave_bands::AveragerError>(())
//! ```

use super::mapping::average_between;
use super::partition::OctavePartition;
use crate::config::{AveragerConfig, BandCoverage};
use crate::error::AveragerError;

/// Converts linear spectra into log-spaced band averages
///
/// An averager is single-threaded: it holds one mutable output buffer and
/// performs no synchronisation. Clone it to average on several threads.
#[derive(Debug, Clone)]
pub struct BandAverager {
    sample_rate: f32,
    config: AveragerConfig,
    averages: Vec<f32>,
    truncation_reported: bool,
}

impl BandAverager {
    /// Create an averager with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `AveragerError::InvalidArgument` if `num_bins` is 0 or
    /// `sample_rate` is not a finite positive number
    pub fn new(num_bins: usize, sample_rate: f32) -> Result<Self, AveragerError> {
        Self::with_config(num_bins, sample_rate, AveragerConfig::default())
    }

    /// Create an averager with an explicit configuration
    ///
    /// # Arguments
    ///
    /// * `num_bins` - Number of output bands
    /// * `sample_rate` - Sample rate the spectra are computed at (Hz)
    /// * `config` - Minimum bandwidth and coverage policy
    ///
    /// # Errors
    ///
    /// Returns `AveragerError::InvalidArgument` if `num_bins` is 0,
    /// `sample_rate` is not a finite positive number, or
    /// `config.min_bandwidth_hz` is not a finite positive number
    pub fn with_config(
        num_bins: usize,
        sample_rate: f32,
        config: AveragerConfig,
    ) -> Result<Self, AveragerError> {
        if num_bins == 0 {
            return Err(AveragerError::InvalidArgument(
                "num_bins must be > 0".to_string(),
            ));
        }

        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(AveragerError::InvalidArgument(format!(
                "sample_rate must be a finite value > 0, got {}",
                sample_rate
            )));
        }

        if !config.min_bandwidth_hz.is_finite() || config.min_bandwidth_hz <= 0.0 {
            return Err(AveragerError::InvalidArgument(format!(
                "min_bandwidth_hz must be a finite value > 0, got {}",
                config.min_bandwidth_hz
            )));
        }

        log::debug!(
            "Creating band averager: {} bins at {} Hz ({:?}, min bandwidth {} Hz)",
            num_bins,
            sample_rate,
            config.coverage,
            config.min_bandwidth_hz
        );

        Ok(Self {
            sample_rate,
            config,
            averages: vec![0.0; num_bins],
            truncation_reported: false,
        })
    }

    /// Number of output bands
    pub fn num_bins(&self) -> usize {
        self.averages.len()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Configuration in use
    pub fn config(&self) -> &AveragerConfig {
        &self.config
    }

    /// Band averages from the most recent call (zeros before the first call)
    pub fn averages(&self) -> &[f32] {
        &self.averages
    }

    /// Octave layout for this averager's bin count and sample rate
    pub fn partition(&self) -> OctavePartition {
        OctavePartition::new(self.num_bins(), self.sample_rate, self.config.min_bandwidth_hz)
    }

    /// Average a linear magnitude spectrum into the output bands
    ///
    /// The spectrum holds `N` magnitudes linearly spaced in frequency and is
    /// never modified. The partition is derived afresh on every call.
    ///
    /// # Arguments
    ///
    /// * `spectrum` - Linear magnitude spectrum (`N >= 1`)
    ///
    /// # Returns
    ///
    /// Read-only view of the `num_bins` band averages
    ///
    /// # Errors
    ///
    /// Returns `AveragerError::InvalidArgument` if the spectrum is empty, if
    /// `num_bins` is smaller than the octave count, or, under
    /// [`BandCoverage::Strict`], if `num_bins` is not a multiple of it
    pub fn compute_averages(&mut self, spectrum: &[f32]) -> Result<&[f32], AveragerError> {
        if spectrum.is_empty() {
            return Err(AveragerError::InvalidArgument(
                "Spectrum must contain at least one bin".to_string(),
            ));
        }

        let partition = self.partition();

        if partition.bands_per_octave == 0 {
            return Err(AveragerError::InvalidArgument(format!(
                "num_bins ({}) is smaller than the octave count ({})",
                partition.num_bins, partition.octaves
            )));
        }

        if !partition.is_exact() {
            match self.config.coverage {
                BandCoverage::Strict => {
                    return Err(AveragerError::InvalidArgument(format!(
                        "num_bins ({}) is not a multiple of the octave count ({})",
                        partition.num_bins, partition.octaves
                    )));
                }
                BandCoverage::Truncate => {
                    if !self.truncation_reported {
                        log::warn!(
                            "Band layout covers {} of {} bins, trailing bins are left unchanged",
                            partition.covered_bins(),
                            partition.num_bins
                        );
                        self.truncation_reported = true;
                    }
                }
            }
        }

        log::trace!(
            "Averaging {} spectrum bins into {} bands",
            spectrum.len(),
            partition.covered_bins()
        );

        let bands_per_octave = partition.bands_per_octave;
        for i in 0..partition.octaves {
            let low_freq = partition.octave_low(i);
            let high_freq = partition.octave_high(i);
            let freq_step = (high_freq - low_freq) / bands_per_octave as f32;

            for j in 0..bands_per_octave {
                let f = low_freq + j as f32 * freq_step;
                self.averages[j + i * bands_per_octave] =
                    average_between(spectrum, self.sample_rate, f, f + freq_step);
            }
        }

        Ok(&self.averages)
    }
}
