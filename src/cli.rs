use batch265::config::{Config, DEFAULT_REDUCTION_FACTOR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batch265")]
#[command(author, version, about = "Batch-transcode videos to H.265 with bitrate-derived targets")]
pub struct Cli {
    /// Directory containing source videos to transcode
    #[arg(short = 'i', long = "input_dir")]
    pub input_dir: PathBuf,

    /// Directory where transcoded videos will be saved (created if missing)
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: PathBuf,

    /// Reduction factor applied to the probed bitrate
    #[arg(short = 'r', long = "reduction_factor", default_value_t = DEFAULT_REDUCTION_FACTOR)]
    pub reduction_factor: f64,

    /// Use the hardware-accelerated encoder (macOS VideoToolbox)
    #[arg(long = "hw_accel", alias = "hw")]
    pub hw_accel: bool,

    /// Path to the mediainfo binary (default: PATH lookup)
    #[arg(long)]
    pub mediainfo_path: Option<PathBuf>,

    /// Path to the ffmpeg binary (default: PATH lookup)
    #[arg(long)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collapse the parsed arguments into the run configuration.
    pub fn into_config(self) -> Config {
        Config {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            reduction_factor: self.reduction_factor,
            hw_accel: self.hw_accel,
            mediainfo_path: self.mediainfo_path,
            ffmpeg_path: self.ffmpeg_path,
        }
    }
}
