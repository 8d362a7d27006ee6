//! H.265 conversion module.
//!
//! Plans and executes per-file transcodes:
//!
//! - Target bitrate derived from the probed source bitrate
//! - FFmpeg-based encoding with optional hardware acceleration
//! - Audio passed through untouched

mod executor;
mod planner;

pub use executor::{transcode_args, TranscodeExecutor};
pub use planner::target_bitrate;

use std::path::{Path, PathBuf};

/// Suffix appended to the source file stem for output naming.
pub const OUTPUT_SUFFIX: &str = "_transcoded";

/// H.265 encoder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCodec {
    /// Software x265 encoder.
    Libx265,
    /// Hardware-accelerated VideoToolbox encoder (macOS).
    HevcVideotoolbox,
}

impl VideoCodec {
    /// Pick the encoder for the hardware-acceleration flag.
    pub fn from_hw_accel(hw_accel: bool) -> Self {
        if hw_accel {
            VideoCodec::HevcVideotoolbox
        } else {
            VideoCodec::Libx265
        }
    }

    /// FFmpeg encoder name.
    pub fn encoder_name(&self) -> &'static str {
        match self {
            VideoCodec::Libx265 => "libx265",
            VideoCodec::HevcVideotoolbox => "hevc_videotoolbox",
        }
    }

    /// Stream tag applied to the output, if the encoder needs one.
    ///
    /// VideoToolbox output is tagged `hvc1` so QuickTime-family players
    /// recognize the stream.
    pub fn compatibility_tag(&self) -> Option<&'static str> {
        match self {
            VideoCodec::Libx265 => None,
            VideoCodec::HevcVideotoolbox => Some("hvc1"),
        }
    }
}

/// Everything the executor needs for one file, computed immediately before
/// invocation and discarded after.
#[derive(Debug, Clone)]
pub struct TranscodePlan {
    /// Source file path.
    pub source: PathBuf,
    /// Output file path.
    pub output: PathBuf,
    /// Target bitrate in whole Mbps.
    pub target_mbps: u64,
    /// Encoder selection.
    pub codec: VideoCodec,
}

/// Output path for a source file: `<stem>_transcoded.mp4` in the output
/// directory, regardless of the source container.
pub fn output_path(output_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{stem}{OUTPUT_SUFFIX}.mp4"))
}
