//! Transcode executor.
//!
//! Turns a [`TranscodePlan`] into an ffmpeg invocation. Argument
//! construction is kept separate from process spawning so the command line
//! can be tested without running ffmpeg.

use super::TranscodePlan;
use crate::{Error, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Executes transcode plans against a resolved ffmpeg binary.
pub struct TranscodeExecutor {
    ffmpeg: PathBuf,
}

/// Build the ffmpeg argument list for a plan.
///
/// The target bitrate is applied as the video rate; audio streams are
/// copied without re-encoding. `-y` makes the overwrite of an existing
/// output explicit.
pub fn transcode_args(plan: &TranscodePlan) -> Vec<String> {
    let mut args = vec![
        "-y".to_string(),
        "-i".to_string(),
        plan.source.to_string_lossy().to_string(),
        "-c:v".to_string(),
        plan.codec.encoder_name().to_string(),
        "-b:v".to_string(),
        format!("{}M", plan.target_mbps),
        "-c:a".to_string(),
        "copy".to_string(),
    ];

    if let Some(tag) = plan.codec.compatibility_tag() {
        args.extend(["-tag:v".to_string(), tag.to_string()]);
    }

    args.push(plan.output.to_string_lossy().to_string());
    args
}

impl TranscodeExecutor {
    /// Create an executor for the given ffmpeg binary.
    pub fn new(ffmpeg: PathBuf) -> Self {
        Self { ffmpeg }
    }

    /// Run ffmpeg for the plan, blocking until it exits.
    ///
    /// # Errors
    ///
    /// A non-zero ffmpeg exit is an error; the caller treats it as fatal
    /// for the whole run.
    pub fn transcode(&self, plan: &TranscodePlan) -> Result<()> {
        let args = transcode_args(plan);
        debug!("FFmpeg args: {:?}", args);

        let status = Command::new(&self.ffmpeg)
            .args(&args)
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found("ffmpeg")
                } else {
                    Error::Io(e)
                }
            })?;

        if !status.success() {
            return Err(Error::tool_failed(
                "ffmpeg",
                format!("exited with status {status}"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::VideoCodec;
    use std::path::{Path, PathBuf};

    fn plan(codec: VideoCodec) -> TranscodePlan {
        TranscodePlan {
            source: PathBuf::from("/in/clip.mp4"),
            output: PathBuf::from("/out/clip_transcoded.mp4"),
            target_mbps: 40,
            codec,
        }
    }

    #[test]
    fn test_transcode_args_software() {
        let args = transcode_args(&plan(VideoCodec::Libx265));
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "/in/clip.mp4",
                "-c:v",
                "libx265",
                "-b:v",
                "40M",
                "-c:a",
                "copy",
                "/out/clip_transcoded.mp4",
            ]
        );
    }

    #[test]
    fn test_transcode_args_hardware_adds_tag() {
        let args = transcode_args(&plan(VideoCodec::HevcVideotoolbox));
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "/in/clip.mp4",
                "-c:v",
                "hevc_videotoolbox",
                "-b:v",
                "40M",
                "-c:a",
                "copy",
                "-tag:v",
                "hvc1",
                "/out/clip_transcoded.mp4",
            ]
        );
    }

    #[test]
    fn test_transcode_missing_ffmpeg() {
        let executor = TranscodeExecutor::new(Path::new("/nonexistent/ffmpeg").to_path_buf());
        let result = executor.transcode(&plan(VideoCodec::Libx265));
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }
}
