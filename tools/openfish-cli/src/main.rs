//! OpenFish CLI: command-line interface for annotation keypoints.
//!
//! Usage:
//!   openfish interpolate <FILE> --id <ID> --at <TIME>   Box of one annotation at a time
//!   openfish track <FILE> --id <ID>                     Sample a box at every playback tick
//!   openfish overlay <FILE> --at <TIME>                 All boxes visible at a time
//!   openfish validate <FILE>                            Check keypoint lists
//!   openfish info <FILE>                                Summarize an annotation file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use openfish_annotation_model::VideoTime;
use openfish_common::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "openfish",
    about = "Keyframe bounding-box interpolation for video annotations",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/openfish/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate one annotation's box at a video time
    Interpolate {
        /// Annotation file (JSON array)
        path: PathBuf,

        /// Annotation id
        #[arg(long)]
        id: u64,

        /// Video time, HH:MM:SS or HH:MM:SS.mmm
        #[arg(long)]
        at: VideoTime,
    },

    /// Sample an annotation's box at every playback tick across its span
    Track {
        /// Annotation file (JSON array)
        path: PathBuf,

        /// Annotation id
        #[arg(long)]
        id: u64,

        /// Tick rate in Hz (defaults to the configured playback rate)
        #[arg(long)]
        fps: Option<u32>,

        /// Emit one JSON object per tick
        #[arg(long)]
        json: bool,
    },

    /// List every box visible at a video time
    Overlay {
        /// Annotation file (JSON array)
        path: PathBuf,

        /// Video time, HH:MM:SS or HH:MM:SS.mmm
        #[arg(long)]
        at: VideoTime,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check keypoint lists for ordering and value problems
    Validate {
        /// Annotation file (JSON array)
        path: PathBuf,
    },

    /// Show a summary of an annotation file
    Info {
        /// Annotation file (JSON array)
        path: PathBuf,

        /// Video duration; enables the timeline heatmap
        #[arg(long)]
        duration: Option<VideoTime>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    openfish_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Interpolate { path, id, at } => commands::interpolate::run(path, id, at),
        Commands::Track {
            path,
            id,
            fps,
            json,
        } => commands::track::run(path, id, fps.unwrap_or(config.playback.tick_rate_hz), json),
        Commands::Overlay { path, at, json } => commands::overlay::run(path, at, json),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Info { path, duration } => {
            commands::info::run(path, duration, config.playback.heatmap_bins)
        }
    }
}
