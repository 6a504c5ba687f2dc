//! The extension trait.

use super::error::ExtensionResult;
use super::host::HostEnv;
use super::types::{Command, CommandResult, VideoFrame};

/// The unit of pluggable behavior hosted by an external runtime.
///
/// The host drives each instance through a fixed lifecycle
/// (`init → start → stop → deinit`) and delivers messages between start
/// and stop. Every callback runs to completion synchronously; each
/// lifecycle hook must invoke its matching [`HostEnv`] acknowledgement
/// exactly once before returning.
pub trait Extension {
    /// Called once when the host places the extension into its graph.
    fn on_init(&mut self, env: &mut dyn HostEnv) {
        env.on_init_done();
    }

    /// Called once after every extension in the graph is initialized.
    fn on_start(&mut self, env: &mut dyn HostEnv) {
        env.on_start_done();
    }

    /// Called once when the host begins tearing the graph down.
    fn on_stop(&mut self, env: &mut dyn HostEnv) {
        env.on_stop_done();
    }

    /// Called once before the instance is dropped.
    fn on_deinit(&mut self, env: &mut dyn HostEnv) {
        env.on_deinit_done();
    }

    /// Handle a command from the host. The default replies with a bare
    /// success result.
    fn on_cmd(&mut self, env: &mut dyn HostEnv, cmd: Command) {
        env.return_result(CommandResult::ok(), &cmd);
    }

    /// Handle a video frame. Nothing is communicated to the host on
    /// success; errors propagate to the host runtime's error boundary.
    /// The default discards the frame.
    fn on_video_frame(&mut self, _env: &mut dyn HostEnv, _frame: VideoFrame) -> ExtensionResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::host::RecordingHost;
    use crate::extension::types::{PixelFormat, StatusCode};

    struct NoopExtension;
    impl Extension for NoopExtension {}

    #[test]
    fn test_default_lifecycle_acknowledges_once() {
        let mut ext = NoopExtension;
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
    fn test_default_cmd_replies_ok() {
        let mut ext = NoopExtension;
        let mut host = RecordingHost::default();

        ext.on_cmd(&mut host, Command::new("ping"));

        assert_eq!(host.results.len(), 1);
        assert_eq!(host.results[0].0.status(), StatusCode::Ok);
        assert_eq!(host.results[0].1.name(), "ping");
    }

    #[test]
    fn test_default_video_frame_is_noop() {
        let mut ext = NoopExtension;
        let mut host = RecordingHost::default();

        let frame = VideoFrame::new(PixelFormat::Rgba, 1, 1, vec![0, 0, 0, 255]);
        assert!(ext.on_video_frame(&mut host, frame).is_ok());
    }
}
