//! JSON-backed profile store
//!
//! Profiles live in one JSON object keyed by name. Two locations exist: a
//! global store under the user's config directory and a project-local
//! `devsync.json` in the working directory. When the local file exists it
//! takes priority for every read and write.

use std::path::{Path, PathBuf};

use crate::{Error, Profile, ProfileMap, Result, io};

/// File name of the global store inside the config directory
pub const GLOBAL_PROFILES_FILE: &str = "profiles.json";

/// File name of the project-local store inside the working directory
pub const LOCAL_PROFILES_FILE: &str = "devsync.json";

/// Which of the two store files an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreLocation {
    Global,
    Local,
}

/// Whole-file read/modify/write access to the profile mapping.
///
/// Both base directories are injected so callers (and tests) decide where
/// the files live.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    config_dir: PathBuf,
    working_dir: PathBuf,
}

impl ProfileStore {
    pub fn new(config_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// `~/.config/devsync`, if a home directory can be determined.
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("devsync"))
    }

    pub fn global_path(&self) -> PathBuf {
        self.config_dir.join(GLOBAL_PROFILES_FILE)
    }

    pub fn local_path(&self) -> PathBuf {
        self.working_dir.join(LOCAL_PROFILES_FILE)
    }

    /// The location reads go to: local if `devsync.json` exists, else global.
    pub fn active_location(&self) -> StoreLocation {
        if self.local_path().exists() {
            StoreLocation::Local
        } else {
            StoreLocation::Global
        }
    }

    pub fn path_for(&self, location: StoreLocation) -> PathBuf {
        match location {
            StoreLocation::Global => self.global_path(),
            StoreLocation::Local => self.local_path(),
        }
    }

    pub fn active_path(&self) -> PathBuf {
        self.path_for(self.active_location())
    }

    /// Load every profile from the active store. A missing file is empty.
    pub fn load(&self) -> Result<ProfileMap> {
        self.load_from(self.active_location())
    }

    fn load_from(&self, location: StoreLocation) -> Result<ProfileMap> {
        let path = self.path_for(location);
        tracing::debug!(path = %path.display(), "Loading profiles");

        let Some(content) = io::read_text_if_exists(&path)? else {
            return Ok(ProfileMap::new());
        };

        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path,
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Look up a single profile by name.
    pub fn get(&self, name: &str) -> Result<Profile> {
        self.load()?
            .remove(name)
            .ok_or_else(|| Error::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Overwrite the store at `location` with `profiles`.
    pub fn save(&self, profiles: &ProfileMap, location: StoreLocation) -> Result<PathBuf> {
        let path = self.path_for(location);
        let mut content = serde_json::to_string_pretty(profiles).map_err(|e| {
            Error::ConfigSerialize {
                path: path.clone(),
                format: "JSON".into(),
                message: e.to_string(),
            }
        })?;
        content.push('\n');

        io::write_atomic(&path, content.as_bytes())?;
        Ok(path)
    }

    /// Add a profile, refusing to replace an existing one unless `force`.
    ///
    /// Profiles are read from the active store. With `local` set they are
    /// written to the project-local store, creating it if needed, so a fresh
    /// `devsync.json` starts with every global profile. Returns the path of
    /// the file written.
    pub fn insert(&self, name: &str, profile: Profile, force: bool, local: bool) -> Result<PathBuf> {
        let location = if local {
            StoreLocation::Local
        } else {
            self.active_location()
        };

        let mut profiles = self.load()?;
        if profiles.contains_key(name) && !force {
            return Err(Error::ProfileExists {
                name: name.to_string(),
            });
        }

        profiles.insert(name.to_string(), profile);
        self.save(&profiles, location)
    }

    /// Delete a profile. The store is not rewritten if the name is absent.
    pub fn remove(&self, name: &str) -> Result<PathBuf> {
        let location = self.active_location();
        let mut profiles = self.load_from(location)?;

        if profiles.remove(name).is_none() {
            return Err(Error::ProfileNotFound {
                name: name.to_string(),
            });
        }

        self.save(&profiles, location)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
