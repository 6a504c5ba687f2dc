//! Host environment boundary.
//!
//! The host runtime hands each extension callback a [`HostEnv`]. The
//! extension uses it to acknowledge lifecycle transitions and to deliver
//! command results. Each lifecycle hook must call its matching `*_done`
//! acknowledgement exactly once, synchronously, before returning.

use super::types::{Command, CommandResult};

/// Capabilities the host exposes to an extension.
pub trait HostEnv {
    /// Acknowledge that initialization is complete.
    fn on_init_done(&mut self);

    /// Acknowledge that startup is complete.
    fn on_start_done(&mut self);

    /// Acknowledge that shutdown is complete.
    fn on_stop_done(&mut self);

    /// Acknowledge that deinitialization is complete.
    fn on_deinit_done(&mut self);

    /// Deliver a result for the originating command.
    fn return_result(&mut self, result: CommandResult, cmd: &Command);
}

/// Minimal host driver that prints every acknowledgement to stdout.
///
/// Used by the `demo` subcommand to run an extension through its
/// lifecycle outside a real host runtime.
#[derive(Debug, Default)]
pub struct StdoutHost;

impl StdoutHost {
    /// Create a new driver.
    pub fn new() -> Self {
        Self
    }
}

impl HostEnv for StdoutHost {
    fn on_init_done(&mut self) {
        println!("extension initialized");
    }

    fn on_start_done(&mut self) {
        println!("extension started");
    }

    fn on_stop_done(&mut self) {
        println!("extension stopped");
    }

    fn on_deinit_done(&mut self) {
        println!("extension deinitialized");
    }

    fn return_result(&mut self, result: CommandResult, cmd: &Command) {
        println!(
            "command '{}' returned {:?} (detail: {})",
            cmd.name(),
            result.status(),
            result.property_str("detail").unwrap_or("-"),
        );
    }
}

/// Test double that records every acknowledgement and delivered result.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub init_done: usize,
    pub start_done: usize,
    pub stop_done: usize,
    pub deinit_done: usize,
    pub results: Vec<(CommandResult, Command)>,
}

#[cfg(test)]
impl HostEnv for RecordingHost {
    fn on_init_done(&mut self) {
        self.init_done += 1;
    }

    fn on_start_done(&mut self) {
        self.start_done += 1;
    }

    fn on_stop_done(&mut self) {
        self.stop_done += 1;
    }

    fn on_deinit_done(&mut self) {
        self.deinit_done += 1;
    }

    fn return_result(&mut self, result: CommandResult, cmd: &Command) {
        self.results.push((result, cmd.clone()));
    }
}
