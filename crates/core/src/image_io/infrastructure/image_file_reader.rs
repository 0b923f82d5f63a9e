use std::path::Path;

use image::ImageReader as ImageDecoder;

use crate::image_io::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Reads still images with the `image` crate.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. The decoded color type and bit depth are kept as-is.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = ImageDecoder::open(path)?.with_guessed_format()?.decode()?;
        let frame = Frame::new(img);
        log::debug!(
            "Decoded {}: {}x{}, {:?}",
            path.display(),
            frame.width(),
            frame.height(),
            frame.color()
        );
        Ok(frame)
    }
}
