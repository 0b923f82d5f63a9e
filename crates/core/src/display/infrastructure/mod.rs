pub mod highgui_viewer;
