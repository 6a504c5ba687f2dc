//! Framekit - extension-host SDK and build tooling.
//!
//! Provides the `copy` build helper and a scripted `demo` driver for the
//! blur extension.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use framekit::copy;
use framekit::extension::{
    BlurExtension, Command, Extension, PixelFormat, StdoutHost, VideoFrame,
};

/// Extension-host SDK and build tooling
#[derive(Parser)]
#[command(name = "framekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy files and directories
    ///
    /// Takes an even-length list of paths: the first half are sources,
    /// the second half destinations, paired positionally. Directories
    /// are replaced wholesale; stale build artifacts are skipped.
    Copy {
        /// Sources followed by destinations
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Drive the blur extension through one scripted lifecycle
    Demo {
        /// Raw RGBA frame file to feed through the video-frame handler
        #[arg(long)]
        frame: Option<PathBuf>,

        /// Frame width in pixels (required with --frame)
        #[arg(long)]
        width: Option<u32>,

        /// Frame height in pixels (required with --frame)
        #[arg(long)]
        height: Option<u32>,

        /// Where to write the blurred frame (defaults to ./blur.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };
    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        Commands::Copy { paths } => run_copy(&paths),
        Commands::Demo { frame, width, height, output } => run_demo(frame, width, height, output),
    }
}

/// Copy each source to its paired destination, stopping at the first
/// failure.
fn run_copy(paths: &[PathBuf]) -> Result<()> {
    let pairs = copy::split_pairs(paths)?;
    copy::copy_batch(&pairs)?;

    println!("Copied {} entr{}", pairs.len(), if pairs.len() == 1 { "y" } else { "ies" });
    Ok(())
}

/// Run the blur extension through init/start, one command round-trip,
/// optionally one video frame, then stop/deinit.
fn run_demo(
    frame: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut extension = BlurExtension::new("demo");
    if let Some(path) = output {
        extension = extension.with_output_path(path);
    }

    let mut host = StdoutHost::new();

    extension.on_init(&mut host);
    extension.on_start(&mut host);

    extension.on_cmd(&mut host, Command::new("ping"));

    if let Some(frame_path) = frame {
        let (Some(width), Some(height)) = (width, height) else {
            bail!("--frame requires --width and --height");
        };

        let data = fs::read(&frame_path)
            .with_context(|| format!("failed to read frame file {}", frame_path.display()))?;
        let frame = VideoFrame::new(PixelFormat::Rgba, width, height, data);

        extension.on_video_frame(&mut host, frame)?;
        println!("blurred frame written to {}", extension.output_path().display());
    }

    extension.on_stop(&mut host);
    extension.on_deinit(&mut host);

    Ok(())
}
