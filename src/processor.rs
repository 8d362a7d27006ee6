use anyhow::{Context, Result};
use batch265::config::Config;
use batch265::conversion::{self, TranscodeExecutor, TranscodePlan, VideoCodec};
use batch265::probe::{self, BitrateProbe};
use batch265::{scanner, tools};

/// Batch processor that transcodes every source file in the input directory.
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full pipeline: resolve tools, enumerate, then per file
    /// probe -> plan -> transcode.
    ///
    /// A file whose bitrate cannot be measured is skipped with a message; a
    /// failed transcode aborts the run.
    pub fn run(&self) -> Result<()> {
        // Resolve both tools up front so a missing binary fails the run
        // before any file is touched.
        let mediainfo = tools::get_tool_path("mediainfo", self.config.mediainfo_path.as_deref())?;
        let ffmpeg = tools::get_tool_path("ffmpeg", self.config.ffmpeg_path.as_deref())?;

        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {:?}",
                self.config.output_dir
            )
        })?;

        let files = scanner::find_source_files(&self.config.input_dir)?;
        tracing::debug!("Processing {} files from {:?}", files.len(), self.config.input_dir);

        let executor = TranscodeExecutor::new(ffmpeg);
        let codec = VideoCodec::from_hw_accel(self.config.hw_accel);

        for source in files {
            match probe::probe_video_bitrate(&mediainfo, &source)? {
                BitrateProbe::Measured(original_mbps) => {
                    let target_mbps =
                        conversion::target_bitrate(original_mbps, self.config.reduction_factor);
                    let plan = TranscodePlan {
                        output: conversion::output_path(&self.config.output_dir, &source),
                        source,
                        target_mbps,
                        codec,
                    };

                    println!(
                        "Transcoding {:?} to {:?} with optimal bitrate: {} Mbps",
                        plan.source, plan.output, plan.target_mbps
                    );
                    executor
                        .transcode(&plan)
                        .with_context(|| format!("Transcode failed for {:?}", plan.source))?;
                }
                BitrateProbe::Unavailable { raw } => {
                    tracing::warn!("Unparsable mediainfo output for {:?}: '{}'", source, raw);
                    println!(
                        "Could not determine video bitrate for {:?} (mediainfo output: '{}'). Skipping.",
                        source, raw
                    );
                }
            }
        }

        Ok(())
    }
}
