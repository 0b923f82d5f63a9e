use image::{ColorType, DynamicImage};
use thiserror::Error;

use crate::shared::region::Region;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GrayscaleError {
    #[error("image has no pixels")]
    Empty,
}

/// An in-memory still image.
///
/// Wraps the decoded [`DynamicImage`] as-is, so bit depth and color type
/// (gray, gray+alpha, RGB, RGBA; 8 or 16 bit) survive from source to crop.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    image: DynamicImage,
}

impl Frame {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut DynamicImage {
        &mut self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// Copies the part of `region` that lies inside the frame into a new frame.
    ///
    /// The result keeps this frame's color type. A region entirely outside
    /// the frame yields an empty 0x0 frame.
    pub fn crop(&self, region: &Region) -> Frame {
        let (x, y, w, h) = match region.clip_to(self.width(), self.height()) {
            Some(c) => (c.x as u32, c.y as u32, c.width as u32, c.height as u32),
            None => (0, 0, 0, 0),
        };
        Frame::new(self.image.crop_imm(x, y, w, h))
    }

    /// Converts to an 8-bit single-channel luma frame of identical dimensions.
    ///
    /// Alpha is ignored.
    pub fn to_grayscale(&self) -> Result<Frame, GrayscaleError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(GrayscaleError::Empty);
        }
        Ok(Frame::new(DynamicImage::ImageLuma8(self.image.to_luma8())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageBuffer, LumaA, Rgb, RgbImage};
    use rstest::rstest;

    /// RGB frame whose every component encodes its position.
    fn gradient_rgb(width: u32, height: u32) -> Frame {
        Frame::new(DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7) as u8, (y * 13) as u8, (x + y) as u8])
        })))
    }

    fn gradient_rgb16(width: u32, height: u32) -> Frame {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x * 1000) as u16, (y * 997 + 1) as u16, 65535])
        });
        Frame::new(DynamicImage::ImageRgb16(img))
    }

    fn gradient_la8(width: u32, height: u32) -> Frame {
        let img: ImageBuffer<LumaA<u8>, Vec<u8>> =
            ImageBuffer::from_fn(width, height, |x, y| LumaA([(x * 9 + y) as u8, (y * 11) as u8]));
        Frame::new(DynamicImage::ImageLumaA8(img))
    }

    #[test]
    fn test_accessors() {
        let frame = gradient_rgb(4, 3);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.color(), ColorType::Rgb8);
    }

    // ── Crop ─────────────────────────────────────────────────────────

    #[rstest]
    #[case::rgb8(gradient_rgb(40, 30))]
    #[case::rgb16(gradient_rgb16(40, 30))]
    #[case::la8(gradient_la8(40, 30))]
    fn test_crop_matches_source_subregion(#[case] frame: Frame) {
        let crop = frame.crop(&Region::new(5, 7, 12, 9));

        assert_eq!((crop.width(), crop.height()), (12, 9));
        assert_eq!(crop.color(), frame.color());
        let expected = frame.image().crop_imm(5, 7, 12, 9);
        assert_eq!(crop.image(), &expected);
    }

    #[test]
    fn test_crop_rgb16_keeps_full_precision() {
        let frame = gradient_rgb16(10, 10);
        let crop = frame.crop(&Region::new(3, 2, 4, 4));
        let px = crop.image().as_rgb16().unwrap().get_pixel(1, 1);
        assert_eq!(px.0, [4000, 3 * 997 + 1, 65535]);
    }

    #[test]
    fn test_crop_full_frame_is_identical() {
        let frame = gradient_rgb(8, 6);
        assert_eq!(frame.crop(&Region::new(0, 0, 8, 6)), frame);
    }

    #[test]
    fn test_crop_clips_to_frame() {
        let frame = gradient_rgb(20, 20);
        let crop = frame.crop(&Region::new(15, 15, 10, 10));
        assert_eq!((crop.width(), crop.height()), (5, 5));
        assert_eq!(crop.image().get_pixel(0, 0), frame.image().get_pixel(15, 15));
    }

    #[test]
    fn test_crop_outside_is_empty() {
        let frame = gradient_rgb(20, 20);
        let crop = frame.crop(&Region::new(30, 30, 10, 10));
        assert_eq!((crop.width(), crop.height()), (0, 0));
    }

    #[test]
    fn test_crop_does_not_touch_source() {
        let frame = gradient_rgb(10, 10);
        let before = frame.clone();
        let _ = frame.crop(&Region::new(2, 2, 4, 4));
        assert_eq!(frame, before);
    }

    // ── Grayscale ────────────────────────────────────────────────────

    #[test]
    fn test_grayscale_keeps_dimensions() {
        let gray = gradient_rgb(17, 11).to_grayscale().unwrap();
        assert_eq!((gray.width(), gray.height()), (17, 11));
        assert_eq!(gray.color(), ColorType::L8);
    }

    #[test]
    fn test_grayscale_of_sixteen_bit_is_eight_bit() {
        let gray = gradient_rgb16(6, 6).to_grayscale().unwrap();
        assert_eq!(gray.color(), ColorType::L8);
    }

    #[rstest]
    #[case::black([0, 0, 0], 0)]
    #[case::white([255, 255, 255], 255)]
    fn test_grayscale_extremes(#[case] rgb: [u8; 3], #[case] expected: u8) {
        let frame = Frame::new(DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb(rgb))));
        let gray = frame.to_grayscale().unwrap();
        assert_eq!(gray.image().as_luma8().unwrap().get_pixel(1, 1).0, [expected]);
    }

    #[test]
    fn test_grayscale_ignores_alpha() {
        let opaque = Frame::new(DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba([10, 200, 30, 255]),
        )));
        let clear = Frame::new(DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba([10, 200, 30, 0]),
        )));
        assert_eq!(opaque.to_grayscale().unwrap(), clear.to_grayscale().unwrap());
    }

    #[test]
    fn test_grayscale_rejects_empty() {
        let frame = Frame::new(DynamicImage::new_rgb8(0, 0));
        assert_eq!(frame.to_grayscale(), Err(GrayscaleError::Empty));
    }
}
