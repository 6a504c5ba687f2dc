//! Host-boundary message types.
//!
//! These are the object shapes the host runtime exchanges with an
//! extension: commands and their results, and video frames. The host
//! framework itself (registration, dispatch, wire format) lives outside
//! this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code carried by a command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCode {
    /// The command was handled successfully.
    Ok,
    /// The command failed.
    Error,
}

/// A command delivered by the host to an extension.
///
/// Opaque to the SDK beyond its name and property map; handlers typically
/// serialize it with [`Command::to_json`] for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    name: String,
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
}

impl Command {
    /// Create a command with the given name and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: serde_json::Map::new() }
    }

    /// Attach a property, builder style.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialize the whole command to JSON text.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Result returned to the host in response to a [`Command`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    status: StatusCode,
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
}

impl CommandResult {
    /// Create a success result.
    pub fn ok() -> Self {
        Self { status: StatusCode::Ok, properties: serde_json::Map::new() }
    }

    /// Create an error result.
    pub fn error() -> Self {
        Self { status: StatusCode::Error, properties: serde_json::Map::new() }
    }

    /// Result status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Set a string property on the result.
    pub fn set_property_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), Value::String(value.into()));
    }

    /// Look up a string property.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Pixel format of a [`VideoFrame`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit RGBA, 4 bytes per pixel.
    Rgba,
    /// 8-bit BGRA, 4 bytes per pixel.
    Bgra,
    /// Packed 8-bit RGB, 3 bytes per pixel.
    Rgb24,
    /// Planar YUV 4:2:0.
    I420,
    /// Semi-planar YUV 4:2:0, UV interleaved.
    Nv12,
    /// Semi-planar YUV 4:2:0, VU interleaved.
    Nv21,
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rgba => "RGBA",
            Self::Bgra => "BGRA",
            Self::Rgb24 => "RGB24",
            Self::I420 => "I420",
            Self::Nv12 => "NV12",
            Self::Nv21 => "NV21",
        };
        write!(f, "{name}")
    }
}

/// One video frame: a raw pixel buffer plus its metadata.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pixel_format: PixelFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl VideoFrame {
    /// Create a frame from raw buffer contents.
    pub fn new(pixel_format: PixelFormat, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self { pixel_format, width, height, data }
    }

    /// Pixel format of the buffer.
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw buffer contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame, returning the raw buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
