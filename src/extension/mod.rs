//! Extension SDK.
//!
//! This module defines the interface an external host runtime uses to
//! drive pluggable extensions: a fixed set of lifecycle hooks
//! (`init → start → stop → deinit`), a command handler, and a video-frame
//! handler. Extensions are produced by [`Addon`] factories registered
//! explicitly with an [`AddonRegistry`].
//!
//! The host runtime itself is an external collaborator. This crate only
//! models the boundary: the [`HostEnv`] acknowledgement surface and the
//! message shapes exchanged across it.
//!
//! One concrete extension ships here: [`BlurExtension`], which blurs
//! incoming RGBA video frames and writes them to a PNG file.

mod addon;
mod api;
mod blur;
mod error;
mod host;
mod types;

pub use addon::{Addon, AddonRegistry};
pub use api::Extension;
pub use blur::{
    register_builtin_addons, BlurAddon, BlurExtension, BLUR_ADDON_NAME, BLUR_OUTPUT_FILE,
};
pub use error::{ExtensionError, ExtensionResult};
pub use host::{HostEnv, StdoutHost};
pub use types::{Command, CommandResult, PixelFormat, StatusCode, VideoFrame};
