use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::error::{Error, Result};

pub const APP_NAME: &str = "launchermaker";

/// Where the home part of the applications directory comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HomeSource {
    /// `/home/<user name>`. Breaks on systems that keep homes elsewhere.
    UserName,
    /// The home directory reported by the platform.
    Platform,
}

impl Default for HomeSource {
    fn default() -> Self {
        HomeSource::UserName
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub home_source: HomeSource,
    /// Used as-is when set, ignoring `home_source`.
    #[serde(default)]
    pub applications_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_source: HomeSource::default(),
            applications_dir: None,
        }
    }
}

impl Config {
    /// Loads the settings file, falling back to defaults when it is unreadable.
    /// Settings are never written back.
    pub fn load() -> Self {
        match confy::load::<Config>(APP_NAME, None).map_err(Error::from) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("{}, using defaults", e);
                Config::default()
            }
        }
    }

    pub fn applications_dir(&self) -> Result<PathBuf> {
        self.resolve_applications_dir(current_user_name(), dirs::home_dir())
    }

    fn resolve_applications_dir(
        &self,
        user_name: Option<String>,
        platform_home: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(dir) = &self.applications_dir {
            return Ok(PathBuf::from(dir));
        }
        let home = match self.home_source {
            HomeSource::UserName => {
                let user = user_name
                    .filter(|u| !u.is_empty())
                    .ok_or(Error::UserNameUnavailable)?;
                PathBuf::from("/home").join(user)
            }
            HomeSource::Platform => platform_home.ok_or(Error::HomeDirUnavailable)?,
        };
        Ok(home.join(".local").join("share").join("applications"))
    }
}

/// Login name of the process uid from the password database.
#[cfg(unix)]
fn passwd_user_name() -> Option<String> {
    use nix::unistd::{Uid, User};
    User::from_uid(Uid::current()).ok().flatten().map(|u| u.name)
}

#[cfg(not(unix))]
fn passwd_user_name() -> Option<String> {
    None
}

fn current_user_name() -> Option<String> {
    pick_user_name(
        passwd_user_name(),
        std::env::var("USER").ok(),
        std::env::var("LOGNAME").ok(),
    )
}

/// The passwd entry wins: `$USER` is stale after `su` without `-` and absent
/// in scrubbed environments. The variables only cover uids with no entry.
fn pick_user_name(
    passwd: Option<String>,
    user: Option<String>,
    logname: Option<String>,
) -> Option<String> {
    [passwd, user, logname]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
}
