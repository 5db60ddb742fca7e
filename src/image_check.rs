use std::path::Path;
use tracing::debug;

/// Returns true when the file decodes to a non-empty raster image.
/// The format is sniffed from the content, so the extension does not matter.
pub fn is_image(path: &Path) -> bool {
    let reader = match image::ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(e) => {
            debug!("cannot open {:?} as image: {}", path, e);
            return false;
        }
    };
    match reader.decode() {
        Ok(img) => img.width() > 0 && img.height() > 0,
        Err(e) => {
            debug!("{:?} is not a decodable image: {}", path, e);
            false
        }
    }
}

/// Hover feedback only: a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([20, 98, 220, 255]));
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn png_is_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, 4, 4);
        assert!(is_image(&path));
    }

    #[test]
    fn format_is_sniffed_not_taken_from_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.dat");
        write_png(&path, 2, 3);
        assert!(is_image(&path));
    }

    #[test]
    fn text_file_is_not_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, "definitely not pixels").unwrap();
        assert!(!is_image(&path));
    }

    #[test]
    fn empty_and_missing_files_are_not_images() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty");
        fs::write(&empty, b"").unwrap();
        assert!(!is_image(&empty));
        assert!(!is_image(&dir.path().join("missing.png")));
    }

    #[test]
    fn truncated_png_is_not_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        write_png(&path, 16, 16);
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        assert!(!is_image(&path));
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_detected() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.sh");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        assert!(!is_executable(&path));

        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&path));
        assert!(!is_executable(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn execute_bit_for_others_only_does_not_count_for_owner() {
        use nix::unistd::Uid;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("others-only");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o601)).unwrap();

        // The owner's bits apply to the owner; root may run anything with an x bit.
        assert_eq!(is_executable(&path), Uid::effective().is_root());
    }
}
