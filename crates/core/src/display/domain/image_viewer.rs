use crate::shared::frame::Frame;

/// Presents the final image to the user.
///
/// `show` returns once the user dismisses the view; the window is closed
/// by then.
pub trait ImageViewer {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
