//! MediaInfo-based bitrate probing.
//!
//! Asks mediainfo for the encoded video bitrate via an `--Inform` template,
//! which prints a single bits-per-second integer on stdout.

use crate::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Bits per megabit, for the bps to Mbps conversion.
const BITS_PER_MEGABIT: f64 = 1_000_000.0;

/// Result of probing one file's video bitrate.
#[derive(Debug, Clone, PartialEq)]
pub enum BitrateProbe {
    /// Measured bitrate in Mbps.
    Measured(f64),
    /// mediainfo output could not be parsed as a bits-per-second integer.
    /// Carries the raw output for the skip message.
    Unavailable { raw: String },
}

/// Build the mediainfo argument list for a bitrate query.
pub fn probe_args(path: &Path) -> Vec<String> {
    vec![
        "--Inform=Video;%BitRate%".to_string(),
        path.to_string_lossy().to_string(),
    ]
}

/// Probe a file's video bitrate using mediainfo.
///
/// A non-numeric answer (empty output, `N/A`, a failed query) is reported as
/// [`BitrateProbe::Unavailable`], never as zero. Only a failure to spawn the
/// tool is an error.
pub fn probe_video_bitrate(mediainfo: &Path, path: &Path) -> Result<BitrateProbe> {
    let output = Command::new(mediainfo)
        .args(probe_args(path))
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("mediainfo")
            } else {
                Error::Io(e)
            }
        })?;

    let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("mediainfo bitrate for {:?}: '{}'", path, raw);

    match parse_bitrate_mbps(&raw) {
        Some(mbps) => Ok(BitrateProbe::Measured(mbps)),
        None => Ok(BitrateProbe::Unavailable { raw }),
    }
}

/// Parse a bits-per-second integer into Mbps.
fn parse_bitrate_mbps(raw: &str) -> Option<f64> {
    raw.parse::<u64>().ok().map(|bps| bps as f64 / BITS_PER_MEGABIT)
}
