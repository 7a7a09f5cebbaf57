//! Integration tests for log-scale band averaging

use octave_bands::bands::frames::average_frames;
use octave_bands::{average_spectrum, AveragerConfig, BandAverager, BandCoverage, OctavePartition};
use rustfft::{num_complex::Complex, FftPlanner};

/// Generate a sine wave at `freq` Hz
fn generate_tone(freq: f32, amplitude: f32, length: usize, sample_rate: f32) -> Vec<f32> {
    (0..length)
        .map(|i| {
            let t = i as f32 / sample_rate;
            amplitude * (2.0 * std::f32::consts::PI * freq * t).sin()
        })
        .collect()
}

/// Hann-windowed full-length FFT magnitude spectrum
fn magnitude_spectrum(samples: &[f32]) -> Vec<f32> {
    let n = samples.len();
    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let window =
                0.5 * (1.0 - ((2.0 * std::f32::consts::PI * i as f32) / (n as f32 - 1.0)).cos());
            Complex::new(s * window, 0.0)
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.iter().map(|c| c.norm()).collect()
}

fn argmax(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f32::MIN), |(best_i, best), (i, &v)| {
            if v > best {
                (i, v)
            } else {
                (best_i, best)
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_lands_in_its_band() {
        let _ = env_logger::builder().is_test(true).try_init();

        let sample_rate = 48000.0;
        let samples = generate_tone(1000.0, 0.8, 1024, sample_rate);
        let spectrum = magnitude_spectrum(&samples);

        let mut averager = BandAverager::new(18, sample_rate).expect("valid averager");
        let bands = averager
            .compute_averages(&spectrum)
            .expect("averaging should succeed")
            .to_vec();

        // 1 kHz sits in octave 750-1500 Hz, first half (750-1125 Hz) -> slot 8
        let ranges = averager.partition().band_ranges();
        assert!(ranges[8].low_hz <= 1000.0 && 1000.0 < ranges[8].high_hz);
        assert_eq!(
            argmax(&bands),
            8,
            "1 kHz tone should dominate band 8, got bands {:?}",
            bands
        );
    }

    #[test]
    fn test_tone_moves_with_frequency() {
        let sample_rate = 48000.0;
        let mut averager = BandAverager::new(9, sample_rate).unwrap();
        let partition = averager.partition();

        // One tone well inside each of the upper octaves
        for octave in 3..partition.octaves - 1 {
            let centre = (partition.octave_low(octave) + partition.octave_high(octave)) / 2.0;
            let spectrum = magnitude_spectrum(&generate_tone(centre, 0.5, 4096, sample_rate));
            let bands = averager.compute_averages(&spectrum).unwrap();
            assert_eq!(
                argmax(bands),
                octave,
                "{:.1} Hz tone should land in octave {}",
                centre,
                octave
            );
        }
    }

    #[test]
    fn test_silence_gives_zero_bands() {
        let spectrum = magnitude_spectrum(&vec![0.0; 2048]);
        let bands = average_spectrum(&spectrum, 27, 44100.0, AveragerConfig::default()).unwrap();
        assert!(bands.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_spectrogram_batch_is_deterministic() {
        let sample_rate = 44100.0;
        let signal = generate_tone(440.0, 0.5, 44100, sample_rate);
        let frames: Vec<Vec<f32>> = signal.chunks_exact(1024).map(magnitude_spectrum).collect();

        let first = average_frames(&frames, 18, sample_rate, AveragerConfig::default()).unwrap();
        let second = average_frames(&frames, 18, sample_rate, AveragerConfig::default()).unwrap();

        assert_eq!(first.len(), frames.len());
        assert_eq!(first, second);
        assert!(first.iter().all(|bands| bands.len() == 18));
    }

    #[test]
    fn test_truncate_matches_strict_on_covered_slots() {
        let spectrum = magnitude_spectrum(&generate_tone(3000.0, 0.5, 2048, 48000.0));

        let strict = average_spectrum(&spectrum, 18, 48000.0, AveragerConfig::default()).unwrap();
        let truncate_config = AveragerConfig {
            coverage: BandCoverage::Truncate,
            ..AveragerConfig::default()
        };
        let truncated = average_spectrum(&spectrum, 19, 48000.0, truncate_config).unwrap();

        assert_eq!(&truncated[..18], &strict[..]);
        assert_eq!(truncated[18], 0.0);
    }

    #[test]
    fn test_partition_serializes() {
        let partition = OctavePartition::new(18, 48000.0, 60.0);
        let json = serde_json::to_string(&partition).unwrap();
        assert!(json.contains("\"octaves\":9"));

        let ranges = serde_json::to_value(partition.band_ranges()).unwrap();
        assert_eq!(ranges.as_array().map(|a| a.len()), Some(18));
        assert_eq!(ranges[0]["low_hz"], 0.0);
    }
}
