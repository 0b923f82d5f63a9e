use std::path::Path;

use crate::shared::frame::Frame;

/// Decodes a still image file into a [`Frame`].
pub trait ImageReader {
    /// Reads the image at `path`, keeping its channel layout (gray, RGB or RGBA).
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
