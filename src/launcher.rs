//! Desktop entry (.desktop file) generation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Length of the random part of the file name, e.g. `1b4e28ba-2f`.
const SUFFIX_LEN: usize = 11;

/// Name, icon and command of a launcher. Values are substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: String,
    pub icon: String,
    pub exec: String,
}

impl DesktopEntry {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            exec: exec.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Exec=\"{}\" %f\n\
             Icon={}\n\
             Version=1.0\n\
             Type=Application\n\
             Name={}\n\
             Terminal=false",
            self.exec, self.icon, self.name
        )
    }
}

/// Random, non-stable suffix that keeps launchers with the same name apart.
pub fn unique_suffix() -> String {
    let mut id = Uuid::new_v4().hyphenated().to_string();
    id.truncate(SUFFIX_LEN);
    id
}

/// Writes launchers into a fixed, already-resolved directory.
#[derive(Debug, Clone)]
pub struct LauncherWriter {
    dir: PathBuf,
}

impl LauncherWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `<dir>/<name>-<suffix>.desktop` and returns its path.
    ///
    /// The directory is not created; if it is missing the call fails with
    /// [`Error::CreateFile`] and nothing is written.
    pub fn create(&self, name: &str, icon_path: &str, exec_path: &str) -> Result<PathBuf> {
        self.create_with_suffix(&DesktopEntry::new(name, icon_path, exec_path), &unique_suffix())
    }

    /// `<dir>/<name>-<suffix>.desktop` built as text. `Path::join` would drop `dir`
    /// for a name starting with `/`; here such a name stays below `dir`.
    fn target_path(&self, name: &str, suffix: &str) -> PathBuf {
        let mut path = self.dir.clone().into_os_string();
        path.push(std::path::MAIN_SEPARATOR_STR);
        path.push(format!("{}-{}.desktop", name, suffix));
        PathBuf::from(path)
    }

    fn create_with_suffix(&self, entry: &DesktopEntry, suffix: &str) -> Result<PathBuf> {
        let path = self.target_path(&entry.name, suffix);

        // Uniqueness is best-effort: an exact clash is replaced, not refused.
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!("could not remove existing launcher {:?}: {}", path, e);
            }
        }

        let mut file = fs::File::create(&path).map_err(|source| Error::CreateFile {
            path: path.clone(),
            source,
        })?;
        file.write_all(entry.render().as_bytes())
            .map_err(|source| Error::WriteFile {
                path: path.clone(),
                source,
            })?;

        debug!("launcher content:\n{}", entry.render());
        info!("created launcher {:?}", path);
        Ok(path)
    }
}
