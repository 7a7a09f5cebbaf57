//! Linear frequency to spectrum bin mapping
//!
//! The input spectrum is linear: `N` bins evenly spaced in frequency. These
//! helpers translate a frequency in Hz to a bin index and average the
//! magnitudes that fall between two frequencies.

/// Map a frequency to a spectrum bin index
///
/// The bin width is `sample_rate / N`. Frequencies below half a bin map to
/// bin 0 and frequencies within half a bin of Nyquist map to the last bin.
/// Everything in between maps to `floor(N * freq / sample_rate)`.
///
/// # Arguments
///
/// * `spectrum_len` - Number of bins `N` in the magnitude spectrum
/// * `sample_rate` - Sample rate the spectrum was computed at (Hz)
/// * `freq` - Frequency to map (Hz)
///
/// # Returns
///
/// Bin index in `[0, N - 1]` (0 for an empty spectrum)
///
/// # Example
///
/// ```
/// use octave_bands::bands::mapping::freq_to_index;
///
/// assert_eq!(freq_to_index(1024, 48000.0, 0.0), 0);
/// assert_eq!(freq_to_index(1024, 48000.0, 24000.0), 1023);
/// assert_eq!(freq_to_index(1024, 48000.0, 1000.0), 21);
/// ```
pub fn freq_to_index(spectrum_len: usize, sample_rate: f32, freq: f32) -> usize {
    let last = spectrum_len.saturating_sub(1);
    let bandwidth = (2.0 / spectrum_len as f32) * (sample_rate / 2.0);

    // Below the upper edge of bin 0
    if freq < bandwidth / 2.0 {
        return 0;
    }
    // Inside the last bin's bandwidth
    if freq > sample_rate / 2.0 - bandwidth / 2.0 {
        return last;
    }

    let fraction = freq / sample_rate;
    ((spectrum_len as f32 * fraction) as usize).min(last)
}

/// Arithmetic mean of the magnitudes between two frequencies (inclusive bins)
///
/// Both frequencies go through [`freq_to_index`]. When the upper bin falls
/// below the lower bin the range is empty and the result is `0.0`.
///
/// # Arguments
///
/// * `spectrum` - Linear magnitude spectrum
/// * `sample_rate` - Sample rate the spectrum was computed at (Hz)
/// * `low_freq` - Lower band edge (Hz)
/// * `high_freq` - Upper band edge (Hz)
pub fn average_between(spectrum: &[f32], sample_rate: f32, low_freq: f32, high_freq: f32) -> f32 {
    if spectrum.is_empty() {
        return 0.0;
    }

    let low_bound = freq_to_index(spectrum.len(), sample_rate, low_freq);
    let high_bound = freq_to_index(spectrum.len(), sample_rate, high_freq);

    if high_bound < low_bound {
        return 0.0;
    }

    let bins = &spectrum[low_bound..=high_bound];
    bins.iter().sum::<f32>() / bins.len() as f32
}
