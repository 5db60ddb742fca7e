use std::path::{Path, PathBuf};

use crate::image_check::{is_executable, is_image};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Icon,
    Executable,
}

/// Drops and hovers of several files at once are ignored.
pub fn single_file(paths: &[PathBuf]) -> Option<&Path> {
    match paths {
        [path] => Some(path.as_path()),
        _ => None,
    }
}

/// Images become the icon, anything else the executable.
pub fn classify_drop(path: &Path) -> Slot {
    if is_image(path) {
        Slot::Icon
    } else {
        Slot::Executable
    }
}

/// Which box to highlight while a file hovers over the window.
pub fn classify_hover(path: &Path) -> Option<Slot> {
    if is_image(path) {
        Some(Slot::Icon)
    } else if is_executable(path) {
        Some(Slot::Executable)
    } else {
        None
    }
}

pub fn absolute_path_string(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
