//! Example: average the spectrum of a synthetic chord into octave bands
//!
//! Run with `RUST_LOG=debug` to see the partition being derived.

use octave_bands::BandAverager;
use rustfft::{num_complex::Complex, FftPlanner};

const SAMPLE_RATE: f32 = 48000.0;
const FFT_SIZE: usize = 2048;
const NUM_BINS: usize = 27;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // A3 + E5 + A7, Hann windowed
    let mut buffer: Vec<Complex<f32>> = (0..FFT_SIZE)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            let sample = [220.0f32, 659.25, 3520.0]
                .iter()
                .map(|&freq| 0.3 * (2.0 * std::f32::consts::PI * freq * t).sin())
                .sum::<f32>();
            let window = 0.5
                * (1.0 - ((2.0 * std::f32::consts::PI * i as f32) / (FFT_SIZE as f32 - 1.0)).cos());
            Complex::new(sample * window, 0.0)
        })
        .collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(FFT_SIZE).process(&mut buffer);
    let spectrum: Vec<f32> = buffer.iter().map(|c| c.norm()).collect();

    let mut averager = BandAverager::new(NUM_BINS, SAMPLE_RATE)?;
    let ranges = averager.partition().band_ranges();
    let bands = averager.compute_averages(&spectrum)?;

    let peak = bands.iter().cloned().fold(f32::EPSILON, f32::max);

    println!("Band averages ({} bands @ {} Hz):", NUM_BINS, SAMPLE_RATE);
    for (range, &level) in ranges.iter().zip(bands.iter()) {
        let bar = "#".repeat((40.0 * level / peak).round() as usize);
        println!(
            "  {:>8.1} - {:>8.1} Hz  {:>9.3}  {}",
            range.low_hz, range.high_hz, level, bar
        );
    }

    Ok(())
}
