//! Video-frame blur extension.
//!
//! The one concrete extension in this crate: replies `"success"` to every
//! command and writes a blurred PNG for every RGBA frame it receives.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::addon::{Addon, AddonRegistry};
use super::api::Extension;
use super::error::{ExtensionError, ExtensionResult};
use super::host::HostEnv;
use super::types::{Command, CommandResult, PixelFormat, VideoFrame};

/// Addon name the blur extension registers under.
pub const BLUR_ADDON_NAME: &str = "blur_demo";

/// Default output path, relative to the working directory. Each frame
/// overwrites the previous one; last writer wins.
pub const BLUR_OUTPUT_FILE: &str = "blur.png";

/// Gaussian blur strength.
const BLUR_SIGMA: f32 = 2.0;

/// Extension that blurs incoming RGBA video frames.
pub struct BlurExtension {
    name: String,
    output_path: PathBuf,
}

impl BlurExtension {
    /// Create a blur extension writing to [`BLUR_OUTPUT_FILE`].
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), output_path: PathBuf::from(BLUR_OUTPUT_FILE) }
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Instance name assigned at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path the blurred frame is written to.
    pub fn output_path(&self) -> &std::path::Path {
        &self.output_path
    }
}

impl Extension for BlurExtension {
    fn on_init(&mut self, env: &mut dyn HostEnv) {
        debug!(extension = %self.name, "on_init");
        env.on_init_done();
    }

    fn on_start(&mut self, env: &mut dyn HostEnv) {
        debug!(extension = %self.name, "on_start");
        env.on_start_done();
    }

    fn on_stop(&mut self, env: &mut dyn HostEnv) {
        debug!(extension = %self.name, "on_stop");
        env.on_stop_done();
    }

    fn on_deinit(&mut self, env: &mut dyn HostEnv) {
        debug!(extension = %self.name, "on_deinit");
        env.on_deinit_done();
    }

    fn on_cmd(&mut self, env: &mut dyn HostEnv, cmd: Command) {
        debug!(extension = %self.name, cmd = %cmd.to_json(), "on_cmd");

        let mut result = CommandResult::ok();
        result.set_property_string("detail", "success");
        env.return_result(result, &cmd);
    }

    fn on_video_frame(&mut self, _env: &mut dyn HostEnv, frame: VideoFrame) -> ExtensionResult<()> {
        debug!(extension = %self.name, "on_video_frame");

        if frame.pixel_format() != PixelFormat::Rgba {
            warn!(
                extension = %self.name,
                format = %frame.pixel_format(),
                "unsupported pixel format, frame discarded"
            );
            return Ok(());
        }

        let width = frame.width();
        let height = frame.height();
        let len = frame.data().len();

        let image = image::RgbaImage::from_raw(width, height, frame.into_data())
            .ok_or(ExtensionError::MalformedFrame { width, height, len })?;

        let blurred = image::imageops::blur(&image, BLUR_SIGMA);
        blurred.save(&self.output_path).map_err(|e| ExtensionError::Image(e.to_string()))?;

        debug!(path = %self.output_path.display(), "blurred frame written");
        Ok(())
    }
}

/// Addon producing [`BlurExtension`] instances.
#[derive(Debug, Default)]
pub struct BlurAddon;

impl Addon for BlurAddon {
    fn create_instance(&self, instance_name: &str) -> Box<dyn Extension> {
        Box::new(BlurExtension::new(instance_name))
    }
}

/// Register every addon this crate ships with.
pub fn register_builtin_addons(registry: &mut AddonRegistry) -> ExtensionResult<()> {
    registry.register(BLUR_ADDON_NAME, Box::new(BlurAddon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::host::RecordingHost;
    use crate::extension::types::StatusCode;

    fn rgba_frame(width: u32, height: u32) -> VideoFrame {
        let data = vec![128u8; (width * height * 4) as usize];
        VideoFrame::new(PixelFormat::Rgba, width, height, data)
    }

    #[test]
    fn test_lifecycle_acknowledges_each_phase_once() {
        let mut ext = BlurExtension::new("blur");
        let mut host = RecordingHost::default();

        ext.on_init(&mut host);
        ext.on_start(&mut host);
        ext.on_stop(&mut host);
        ext.on_deinit(&mut host);

        assert_eq!(host.init_done, 1);
        assert_eq!(host.start_done, 1);
        assert_eq!(host.stop_done, 1);
        assert_eq!(host.deinit_done, 1);
    }

    #[test]
    fn test_cmd_always_replies_success_detail() {
        let mut ext = BlurExtension::new("blur");
        let mut host = RecordingHost::default();

        ext.on_cmd(&mut host, Command::new("anything").with_property("k", "v"));

        assert_eq!(host.results.len(), 1);
        let (result, cmd) = &host.results[0];
        assert_eq!(result.status(), StatusCode::Ok);
        assert_eq!(result.property_str("detail"), Some("success"));
        assert_eq!(cmd.name(), "anything");
    }

    #[test]
    fn test_rgba_frame_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("blur.png");
        let mut ext = BlurExtension::new("blur").with_output_path(&output);
        let mut host = RecordingHost::default();

        ext.on_video_frame(&mut host, rgba_frame(8, 8)).unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_rgba_frame_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("blur.png");
        std::fs::write(&output, b"not a png").unwrap();
        let mut ext = BlurExtension::new("blur").with_output_path(&output);
        let mut host = RecordingHost::default();

        ext.on_video_frame(&mut host, rgba_frame(4, 4)).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_non_rgba_frame_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("blur.png");
        let mut ext = BlurExtension::new("blur").with_output_path(&output);
        let mut host = RecordingHost::default();

        let frame = VideoFrame::new(PixelFormat::Nv12, 8, 8, vec![0u8; 96]);
        ext.on_video_frame(&mut host, frame).unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_short_buffer_is_malformed() {
        let mut ext = BlurExtension::new("blur");
        let mut host = RecordingHost::default();

        let frame = VideoFrame::new(PixelFormat::Rgba, 8, 8, vec![0u8; 16]);
        let err = ext.on_video_frame(&mut host, frame).unwrap_err();

        assert!(matches!(err, ExtensionError::MalformedFrame { width: 8, height: 8, len: 16 }));
    }

    #[test]
    fn test_builtin_registry_creates_blur_instances() {
        let mut registry = AddonRegistry::new();
        register_builtin_addons(&mut registry).unwrap();

        let mut instance = registry.create_instance(BLUR_ADDON_NAME, "demo").unwrap();
        let mut host = RecordingHost::default();
        instance.on_init(&mut host);

        assert_eq!(host.init_done, 1);
    }
}
