pub mod constants;
pub mod face_file_name;
pub mod frame;
pub mod mat_conversion;
pub mod region;
