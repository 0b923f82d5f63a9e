//! Haar cascade face detection for still images.
//!
//! Domain traits (`*/domain`) describe what the pipeline needs; the
//! `*/infrastructure` modules implement them with OpenCV and the `image`
//! crate. [`pipeline::detect_faces_use_case`] ties the pieces together.

pub mod annotation;
pub mod detection;
pub mod display;
pub mod image_io;
pub mod pipeline;
pub mod shared;
