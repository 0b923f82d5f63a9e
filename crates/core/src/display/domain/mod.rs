pub mod image_viewer;
