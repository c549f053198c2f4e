use crate::download::download_file;
use crate::error::InstallError;
use crate::platform::Platform;
use crate::types::Asset;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};

/// Places a downloaded release binary into the install directory.
pub struct Installer {
    pub install_dir: PathBuf,
    pub platform: Platform,
}

impl Installer {
    pub fn new(install_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            install_dir: install_dir.into(),
            platform,
        }
    }

    pub fn final_path(&self) -> PathBuf {
        self.install_dir.join(self.platform.binary_name())
    }

    pub fn temp_path(&self, asset: &Asset) -> PathBuf {
        self.install_dir.join(&asset.name)
    }

    pub fn existing_installation(&self) -> Option<PathBuf> {
        let path = self.final_path();
        if path.exists() {
            tracing::debug!("Found existing installation at {}", path.display());
            Some(path)
        } else {
            None
        }
    }

    pub fn create_install_dir(&self) -> Result<(), InstallError> {
        fs::create_dir_all(&self.install_dir)
            .map_err(|e| InstallError::io("create install directory", &self.install_dir, e))
    }

    /// Downloads `asset` next to the final binary, then renames it into place.
    pub async fn install(&self, client: &Client, asset: &Asset) -> Result<PathBuf, InstallError> {
        self.create_install_dir()?;

        let temp_path = self.temp_path(asset);
        if let Err(e) = download_file(client, &asset.browser_download_url, &temp_path).await {
            discard_partial(&temp_path);
            return Err(e);
        }

        let final_path = self.final_path();
        fs::rename(&temp_path, &final_path)
            .map_err(|e| InstallError::io("rename downloaded file to", &final_path, e))?;

        if !self.platform.is_windows() {
            make_executable(&final_path)?;
        }

        tracing::info!("Installed {} to {}", asset.name, final_path.display());
        Ok(final_path)
    }
}

fn discard_partial(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("Could not remove partial download {}: {}", path.display(), e);
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| InstallError::io("read permissions of", path, e))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| InstallError::io("set executable permissions on", path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), InstallError> {
    Ok(())
}
