use opencv::highgui;

use crate::display::domain::image_viewer::ImageViewer;
use crate::shared::frame::Frame;
use crate::shared::mat_conversion::frame_to_bgr_mat;

/// Shows a frame in an OpenCV HighGUI window and blocks until a key press.
pub struct HighguiViewer;

impl HighguiViewer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighguiViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewer for HighguiViewer {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mat = frame_to_bgr_mat(frame)?;
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        highgui::imshow(title, &mat)?;

        let key = highgui::wait_key(0)?;
        log::debug!("Window '{title}' dismissed with key code {key}");

        highgui::destroy_window(title)?;
        Ok(())
    }
}
