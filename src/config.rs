//! Configuration parameters for band averaging

/// Lowest octave width the partition subdivides down to, in Hz
pub const DEFAULT_MIN_BANDWIDTH_HZ: f32 = 60.0;

/// What to do when the output bin count is not a multiple of the octave count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandCoverage {
    /// Reject the layout, so every output slot is written exactly once per call
    #[default]
    Strict,
    /// Fill `octaves * bands_per_octave` slots and leave the remainder untouched
    Truncate,
}

/// Band averager configuration
#[derive(Debug, Clone)]
pub struct AveragerConfig {
    /// Octave halving stops once the lowest octave is at or below this width (default: 60.0 Hz)
    pub min_bandwidth_hz: f32,

    /// Handling of bin counts that do not divide evenly by the octave count (default: Strict)
    pub coverage: BandCoverage,
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self {
            min_bandwidth_hz: DEFAULT_MIN_BANDWIDTH_HZ,
            coverage: BandCoverage::Strict,
        }
    }
}
