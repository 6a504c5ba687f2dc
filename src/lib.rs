//! # Framekit
//!
//! Extension-host SDK with a video-frame blur demo, plus the build
//! tooling that ships alongside it.
//!
//! Two independent pieces live here:
//!
//! - [`copy`]: a build helper that pairs a flat path list into
//!   source/destination pairs and copies files or whole directory trees.
//! - [`extension`]: the extension interface an external host runtime
//!   drives (lifecycle hooks, command handler, video-frame handler),
//!   with a concrete blur extension as the working example.
//!
//! ## Quick Start
//!
//! ```bash
//! # Copy a.txt -> out/a.txt and assets/ -> out/assets/
//! framekit copy a.txt assets out/a.txt out/assets
//!
//! # Run the blur extension through one scripted lifecycle
//! framekit demo --frame frame.rgba --width 640 --height 480
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::redundant_pub_crate)]

pub mod copy;
pub mod extension;

pub use copy::{copy_batch, split_pairs, CopyError, CopyResult};
pub use extension::{
    Addon, AddonRegistry, BlurExtension, Command, CommandResult, Extension, ExtensionError,
    ExtensionResult, HostEnv, PixelFormat, StatusCode, VideoFrame,
};
