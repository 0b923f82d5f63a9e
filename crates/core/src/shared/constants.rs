use image::Rgba;

/// Haar cascade loaded at startup, relative to the working directory.
pub const CASCADE_FILE: &str = "cascades/haarcascade_frontalface_alt.xml";

/// Where users can copy the cascade from when it is missing.
pub const CASCADE_SOURCE_HINT: &str =
    "Copy file from OpenCV data folder (eg: '/OpenCV/data/haarcascades')";

/// Image used when no path is given on the command line.
pub const DEFAULT_IMAGE_FILE: &str = "test.jpg";

/// Title of the result window.
pub const WINDOW_NAME: &str = "Face Detector";

/// Infix between the source stem and the 1-based face number.
pub const FACE_FILE_INFIX: &str = "_face_";

/// Outline color for detected faces: opaque red.
pub const MARK_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
