//! Octave partition of the `[0, Nyquist]` range
//!
//! The Nyquist range is halved repeatedly until the lowest octave is no
//! wider than the minimum bandwidth. Each octave is then split into the same
//! number of linearly spaced bands, which gives a logarithmic band layout
//! overall.
//!
//! # Example
//!
//! ```
//! use octave_bands::bands::partition::OctavePartition;
//!
//! let partition = OctavePartition::new(18, 48000.0, 60.0);
//! assert_eq!(partition.octaves, 9);
//! assert_eq!(partition.bands_per_octave, 2);
//! assert_eq!(partition.band_ranges().len(), 18);
//! ```

use serde::{Deserialize, Serialize};

/// Count the octaves needed to subdivide `[0, sample_rate / 2]`
///
/// Starts at one octave and adds one for every halving of the Nyquist
/// frequency that stays strictly above `min_bandwidth_hz`.
///
/// Returns 1 for a non-finite sample rate or a non-positive minimum bandwidth.
///
/// # Example
///
/// ```
/// use octave_bands::bands::partition::octave_count;
///
/// // 24000 -> 12000, 6000, 3000, 1500, 750, 375, 187.5, 93.75 (> 60), 46.875 (stop)
/// assert_eq!(octave_count(48000.0, 60.0), 9);
/// ```
pub fn octave_count(sample_rate: f32, min_bandwidth_hz: f32) -> usize {
    let mut nyq = sample_rate / 2.0;
    if !nyq.is_finite() || min_bandwidth_hz.is_nan() || min_bandwidth_hz <= 0.0 {
        return 1;
    }

    let mut octaves = 1;
    loop {
        nyq /= 2.0;
        if nyq > min_bandwidth_hz {
            octaves += 1;
        } else {
            break;
        }
    }
    octaves
}

/// Frequency range covered by one output band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRange {
    /// Output slot index
    pub index: usize,

    /// Lower band edge in Hz
    pub low_hz: f32,

    /// Upper band edge in Hz
    pub high_hz: f32,
}

/// Octave layout derived from a bin count and a sample rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OctavePartition {
    /// Requested number of output bins
    pub num_bins: usize,

    /// Nyquist frequency (sample_rate / 2)
    pub nyquist: f32,

    /// Number of octaves (always >= 1)
    pub octaves: usize,

    /// Bands inside each octave (`num_bins / octaves`, truncated, may be 0)
    pub bands_per_octave: usize,
}

impl OctavePartition {
    /// Derive the partition for `num_bins` output bands at `sample_rate`
    pub fn new(num_bins: usize, sample_rate: f32, min_bandwidth_hz: f32) -> Self {
        let octaves = octave_count(sample_rate, min_bandwidth_hz);
        let bands_per_octave = num_bins / octaves;

        log::debug!(
            "Octave partition: {} bins at {} Hz -> {} octaves x {} bands",
            num_bins,
            sample_rate,
            octaves,
            bands_per_octave
        );

        Self {
            num_bins,
            nyquist: sample_rate / 2.0,
            octaves,
            bands_per_octave,
        }
    }

    /// Number of output slots the layout actually fills
    pub fn covered_bins(&self) -> usize {
        self.octaves * self.bands_per_octave
    }

    /// True when every one of `num_bins` slots is covered exactly once
    pub fn is_exact(&self) -> bool {
        self.bands_per_octave > 0 && self.covered_bins() == self.num_bins
    }

    /// Lower edge of octave `i` in Hz
    pub fn octave_low(&self, i: usize) -> f32 {
        if i == 0 {
            0.0
        } else {
            self.nyquist / 2f32.powi((self.octaves - i) as i32)
        }
    }

    /// Upper edge of octave `i` in Hz
    pub fn octave_high(&self, i: usize) -> f32 {
        self.nyquist / 2f32.powi((self.octaves - i - 1) as i32)
    }

    /// Octave boundaries `[0, f_1, ..., nyquist]` (`octaves + 1` values)
    pub fn octave_edges(&self) -> Vec<f32> {
        std::iter::once(0.0)
            .chain((0..self.octaves).map(|i| self.octave_high(i)))
            .collect()
    }

    /// Frequency range of every covered output slot, in slot order
    ///
    /// Empty when `bands_per_octave` is zero.
    pub fn band_ranges(&self) -> Vec<BandRange> {
        let mut ranges = Vec::with_capacity(self.covered_bins());
        if self.bands_per_octave == 0 {
            return ranges;
        }

        for i in 0..self.octaves {
            let low_freq = self.octave_low(i);
            let high_freq = self.octave_high(i);
            let freq_step = (high_freq - low_freq) / self.bands_per_octave as f32;

            for j in 0..self.bands_per_octave {
                let f = low_freq + j as f32 * freq_step;
                ranges.push(BandRange {
                    index: j + i * self.bands_per_octave,
                    low_hz: f,
                    high_hz: f + freq_step,
                });
            }
        }
        ranges
    }
}
