//! Conversions from [`Frame`] to OpenCV `Mat`.

use image::GrayImage;
use opencv::core::{Mat, Scalar, CV_8UC1, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Copies an 8-bit gray image into a single-channel matrix.
pub fn gray_to_mat(gray: &GrayImage) -> Result<Mat, Box<dyn std::error::Error>> {
    mat_from_bytes(gray.as_raw(), gray.width(), gray.height(), CV_8UC1)
}

/// Renders a frame of any color type as an 8-bit BGR matrix for display.
pub fn frame_to_bgr_mat(frame: &Frame) -> Result<Mat, Box<dyn std::error::Error>> {
    let rgb = frame.image().to_rgb8();
    let rgb_mat = mat_from_bytes(rgb.as_raw(), rgb.width(), rgb.height(), CV_8UC3)?;
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&rgb_mat, &mut bgr, imgproc::COLOR_RGB2BGR)?;
    Ok(bgr)
}

fn mat_from_bytes(
    data: &[u8],
    width: u32,
    height: u32,
    typ: i32,
) -> Result<Mat, Box<dyn std::error::Error>> {
    let mut mat =
        Mat::new_rows_cols_with_default(height as i32, width as i32, typ, Scalar::all(0.0))?;
    mat.data_bytes_mut()?.copy_from_slice(data);
    Ok(mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Luma, Rgba, RgbaImage};

    #[test]
    fn test_gray_to_mat() {
        let gray = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 50 + y * 150) as u8]));
        let mat = gray_to_mat(&gray).unwrap();
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat.channels(), 1);
        assert_eq!(mat.data_bytes().unwrap(), gray.as_raw().as_slice());
    }

    #[test]
    fn test_frame_to_bgr_mat_swaps_red_and_blue() {
        let frame = Frame::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            1,
            1,
            Rgba([255, 0, 0, 255]),
        )));
        let mat = frame_to_bgr_mat(&frame).unwrap();
        assert_eq!(mat.channels(), 3);
        assert_eq!(mat.data_bytes().unwrap(), &[0, 0, 255]);
    }
}
