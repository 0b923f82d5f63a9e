use std::path::{Path, PathBuf};

use crate::shared::constants::FACE_FILE_INFIX;

/// Output path for the `n`th (1-based) face cropped from `source`.
///
/// `photo.jpg` becomes `photo_face_1.jpg`. The split happens at the last
/// `.` of the file name, and the directory part is preserved so crops land
/// next to the source image.
pub fn face_file_name(source: &Path, n: usize) -> PathBuf {
    let name = source
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let face_name = match name.rfind('.') {
        Some(pos) => format!("{}{FACE_FILE_INFIX}{n}{}", &name[..pos], &name[pos..]),
        None => format!("{name}{FACE_FILE_INFIX}{n}"),
    };

    match source.parent() {
        Some(parent) => parent.join(face_name),
        None => PathBuf::from(face_name),
    }
}
