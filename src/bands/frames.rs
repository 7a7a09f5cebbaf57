//! Batch band averaging over a spectrogram
//!
//! Frames are averaged in parallel with rayon. Each worker runs its own
//! clone of the averager so no output buffer is shared between threads.

use rayon::prelude::*;

use super::averager::BandAverager;
use crate::config::AveragerConfig;
use crate::error::AveragerError;

/// Average every spectrum of a spectrogram into log-spaced bands
///
/// # Arguments
///
/// * `frames` - Linear magnitude spectra (n_frames × n_bins)
/// * `num_bins` - Number of output bands per frame
/// * `sample_rate` - Sample rate the spectra were computed at (Hz)
/// * `config` - Averager configuration
///
/// # Returns
///
/// One `num_bins`-long vector of band averages per input frame, in input order
///
/// # Errors
///
/// Returns `AveragerError::InvalidArgument` if the averager cannot be built
/// or if any frame is rejected (e.g. an empty spectrum). When several frames
/// are rejected the error of the lowest frame index is returned, prefixed
/// with `frame <index>:`
///
/// # Example
///
/// ```
/// use octave_bands::bands::frames::average_frames;
/// use octave_bands::AveragerConfig;
///
/// let frames = vec![vec![1.0f32; 1024]; 4];
/// let bands = average_frames(&frames, 18, 48000.0, AveragerConfig::default())?;
/// assert_eq!(bands.len(), 4);
/// # Ok::<(), octave_bands::AveragerError>(())
/// ```
pub fn average_frames(
    frames: &[Vec<f32>],
    num_bins: usize,
    sample_rate: f32,
    config: AveragerConfig,
) -> Result<Vec<Vec<f32>>, AveragerError> {
    let averager = BandAverager::with_config(num_bins, sample_rate, config)?;

    log::debug!(
        "Averaging {} frames into {} bands at {} Hz",
        frames.len(),
        num_bins,
        sample_rate
    );

    let results: Vec<Result<Vec<f32>, AveragerError>> = frames
        .par_iter()
        .enumerate()
        .map_init(
            || averager.clone(),
            |worker, (index, frame)| {
                worker
                    .compute_averages(frame)
                    .map(|bands| bands.to_vec())
                    .map_err(|err| match err {
                        AveragerError::InvalidArgument(msg) => {
                            AveragerError::InvalidArgument(format!("frame {}: {}", index, msg))
                        }
                    })
            },
        )
        .collect();

    // Ordered collect so the lowest failing frame wins
    results.into_iter().collect()
}
