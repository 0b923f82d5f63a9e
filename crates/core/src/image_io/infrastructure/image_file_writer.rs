use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::image_io::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes a single frame to an image file using the `image` crate.
///
/// The encoder is chosen from the extension and receives the frame in its
/// own color type and bit depth. JPEG only stores 8-bit gray or RGB, so
/// alpha and deeper samples are reduced for it.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err("refusing to write an empty image".into());
        }

        match ImageFormat::from_path(path) {
            Ok(ImageFormat::Jpeg) if !is_jpeg_native(frame.color()) => {
                let img = frame.image();
                let narrowed = if img.color().has_color() {
                    DynamicImage::ImageRgb8(img.to_rgb8())
                } else {
                    DynamicImage::ImageLuma8(img.to_luma8())
                };
                log::debug!(
                    "Reducing {:?} to {:?} for {}",
                    img.color(),
                    narrowed.color(),
                    path.display()
                );
                narrowed.save(path)?;
            }
            _ => frame.image().save(path)?,
        }
        Ok(())
    }
}

fn is_jpeg_native(color: ColorType) -> bool {
    matches!(color, ColorType::L8 | ColorType::Rgb8)
}
