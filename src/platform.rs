use crate::config::APP_NAME;
use crate::error::InstallError;
use crate::types::{Asset, Release};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Darwin,
    Linux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Os {
    pub fn from_name(name: &str) -> Result<Self, InstallError> {
        match name.trim().to_lowercase().as_str() {
            "windows" => Ok(Os::Windows),
            "darwin" | "macos" => Ok(Os::Darwin),
            "linux" => Ok(Os::Linux),
            _ => Err(InstallError::UnsupportedPlatform {
                kind: "operating system",
                value: name.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Darwin => "darwin",
            Os::Linux => "linux",
        }
    }
}

impl Arch {
    pub fn from_name(name: &str) -> Result<Self, InstallError> {
        match name.trim().to_lowercase().as_str() {
            "amd64" | "x86_64" => Ok(Arch::Amd64),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            _ => Err(InstallError::UnsupportedPlatform {
                kind: "architecture",
                value: name.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn detect() -> Result<Self, InstallError> {
        Self::from_names(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn from_names(os: &str, arch: &str) -> Result<Self, InstallError> {
        Ok(Platform {
            os: Os::from_name(os)?,
            arch: Arch::from_name(arch)?,
        })
    }

    /// Parses an override such as `linux/amd64` or `darwin-arm64`.
    pub fn parse(value: &str) -> Result<Self, InstallError> {
        let (os, arch) = value
            .split_once(['/', '-'])
            .ok_or_else(|| InstallError::UnsupportedPlatform {
                kind: "platform",
                value: value.to_string(),
            })?;
        Self::from_names(os, arch)
    }

    /// Resolves the override when present, otherwise the host.
    pub fn resolve(platform_override: Option<&str>) -> Result<Self, InstallError> {
        match platform_override {
            Some(value) => {
                tracing::debug!("Using platform override '{}'", value);
                Self::parse(value)
            }
            None => Self::detect(),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }

    pub fn expected_asset_name(&self) -> String {
        let name = format!("{}-{}-{}", APP_NAME, self.os.as_str(), self.arch.as_str());
        if self.is_windows() {
            format!("{}.exe", name)
        } else {
            name
        }
    }

    pub fn binary_name(&self) -> String {
        if self.is_windows() {
            format!("{}.exe", APP_NAME)
        } else {
            APP_NAME.to_string()
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os.as_str(), self.arch.as_str())
    }
}

pub fn find_asset<'a>(release: &'a Release, platform: &Platform) -> Result<&'a Asset, InstallError> {
    let expected = platform.expected_asset_name();
    tracing::trace!(
        "Looking for asset '{}' among {} assets",
        expected,
        release.assets.len()
    );

    release
        .assets
        .iter()
        .find(|asset| asset.name == expected)
        .ok_or_else(|| InstallError::AssetNotFound {
            expected,
            tag: release.tag_name.clone(),
        })
}
