//! Run configuration.
//!
//! The CLI arguments are collapsed into a plain [`Config`] value that gets
//! passed explicitly into the processor; nothing reads ambient state.

use anyhow::Result;
use std::path::PathBuf;

/// Default multiplier applied to the probed bitrate.
pub const DEFAULT_REDUCTION_FACTOR: f64 = 0.5625;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for source files.
    pub input_dir: PathBuf,
    /// Directory for transcoded outputs; created if missing.
    pub output_dir: PathBuf,
    /// Multiplier applied to the probed bitrate.
    pub reduction_factor: f64,
    /// Use the hardware-accelerated encoder instead of libx265.
    pub hw_accel: bool,
    /// Explicit mediainfo binary; falls back to PATH lookup.
    pub mediainfo_path: Option<PathBuf>,
    /// Explicit ffmpeg binary; falls back to PATH lookup.
    pub ffmpeg_path: Option<PathBuf>,
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.reduction_factor.is_finite() || self.reduction_factor <= 0.0 {
            anyhow::bail!(
                "Reduction factor must be a positive number, got {}",
                self.reduction_factor
            );
        }

        if self.reduction_factor > 1.0 {
            tracing::warn!(
                "Reduction factor {} is above 1.0; outputs will target a higher bitrate than their source",
                self.reduction_factor
            );
        }

        Ok(())
    }
}
