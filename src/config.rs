use crate::error::InstallError;
use std::path::PathBuf;

pub const APP_NAME: &str = "solvm";
pub const INSTALL_DIR_NAME: &str = ".solvm";
pub const RELEASES_URL: &str = "https://api.github.com/repos/kleeedolinux/SolVM/releases";

pub const RELEASES_URL_ENV: &str = "SOLVM_RELEASES_URL";
pub const INSTALL_DIR_ENV: &str = "SOLVM_INSTALL_DIR";
pub const PLATFORM_ENV: &str = "SOLVM_PLATFORM";

/// Everything a session reads from the environment, resolved once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerSettings {
    pub releases_url: String,
    pub home_dir: PathBuf,
    pub install_dir: PathBuf,
    pub shell: Option<String>,
    /// Raw `<os>/<arch>` override; host detection is used when absent.
    pub platform: Option<String>,
    pub github_token: Option<String>,
}

impl InstallerSettings {
    pub fn for_home(home_dir: PathBuf) -> Self {
        Self {
            releases_url: RELEASES_URL.to_string(),
            install_dir: home_dir.join(INSTALL_DIR_NAME),
            home_dir,
            shell: None,
            platform: None,
            github_token: None,
        }
    }

    pub fn load() -> Result<Self, InstallError> {
        let home_dir = dirs::home_dir().ok_or(InstallError::HomeDirNotFound)?;
        tracing::debug!("Home directory: {}", home_dir.display());

        let mut settings = Self::for_home(home_dir);

        if let Some(url) = non_empty_var(RELEASES_URL_ENV) {
            settings.releases_url = url;
        }

        if let Some(dir) = non_empty_var(INSTALL_DIR_ENV) {
            settings.install_dir = PathBuf::from(dir);
        }

        settings.platform = non_empty_var(PLATFORM_ENV);
        settings.shell = non_empty_var("SHELL");
        settings.github_token = non_empty_var("GITHUB_TOKEN");

        tracing::debug!("Releases URL: {}", settings.releases_url);
        tracing::debug!("Install directory: {}", settings.install_dir.display());

        Ok(settings)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
