use image::{DynamicImage, Luma, LumaA, Pixel, Rgb, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws a 1-pixel unfilled rectangle onto `frame` in place.
///
/// Corners are `(x, y)` and `(x + width, y + height)`, both inclusive, so
/// the outline sits just outside the region's right and bottom edges.
/// Pixels outside the frame are skipped. The color is converted to the
/// frame's own color type (luma on gray frames, widened on 16-bit ones).
pub fn draw_rectangle_outline(frame: &mut Frame, region: &Region, color: Rgba<u8>) {
    if region.width < 0 || region.height < 0 {
        return;
    }
    let rect = Rect::at(region.x, region.y)
        .of_size(region.width as u32 + 1, region.height as u32 + 1);

    match frame.image_mut() {
        DynamicImage::ImageLuma8(img) => draw_hollow_rect_mut(img, rect, color.to_luma()),
        DynamicImage::ImageLumaA8(img) => draw_hollow_rect_mut(img, rect, color.to_luma_alpha()),
        DynamicImage::ImageRgb8(img) => draw_hollow_rect_mut(img, rect, color.to_rgb()),
        DynamicImage::ImageRgba8(img) => draw_hollow_rect_mut(img, rect, color),
        DynamicImage::ImageLuma16(img) => {
            draw_hollow_rect_mut(img, rect, Luma([widen(color.to_luma()[0])]))
        }
        DynamicImage::ImageLumaA16(img) => {
            let la = color.to_luma_alpha();
            draw_hollow_rect_mut(img, rect, LumaA([widen(la[0]), widen(la[1])]))
        }
        DynamicImage::ImageRgb16(img) => {
            draw_hollow_rect_mut(img, rect, Rgb([widen(color[0]), widen(color[1]), widen(color[2])]))
        }
        DynamicImage::ImageRgba16(img) => draw_hollow_rect_mut(
            img,
            rect,
            Rgba([widen(color[0]), widen(color[1]), widen(color[2]), widen(color[3])]),
        ),
        DynamicImage::ImageRgb32F(img) => draw_hollow_rect_mut(
            img,
            rect,
            Rgb([unit(color[0]), unit(color[1]), unit(color[2])]),
        ),
        DynamicImage::ImageRgba32F(img) => draw_hollow_rect_mut(
            img,
            rect,
            Rgba([unit(color[0]), unit(color[1]), unit(color[2]), unit(color[3])]),
        ),
        other => log::warn!("Cannot mark face on {:?} image", other.color()),
    }
}

/// 8-bit component to the same intensity at 16 bits.
fn widen(v: u8) -> u16 {
    v as u16 * 257
}

fn unit(v: u8) -> f32 {
    v as f32 / 255.0
}
