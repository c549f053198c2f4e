//! Registers the install directory on the user's shell search path.

use crate::config::InstallerSettings;
use crate::error::InstallError;
use crate::platform::Platform;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRegistrar {
    /// Persist the user-scope `Path` variable through PowerShell.
    WindowsUserEnv,
    /// Append an `export PATH=...` line to a shell resource file.
    ShellProfile { rc_file: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Added(String),
    AlreadyPresent(String),
}

impl PathRegistrar {
    pub fn for_platform(platform: &Platform, settings: &InstallerSettings) -> Self {
        if platform.is_windows() {
            PathRegistrar::WindowsUserEnv
        } else {
            PathRegistrar::ShellProfile {
                rc_file: shell_rc_file(&settings.home_dir, settings.shell.as_deref()),
            }
        }
    }

    pub fn register(&self, install_dir: &Path) -> Result<Registration, InstallError> {
        match self {
            PathRegistrar::WindowsUserEnv => register_windows(install_dir),
            PathRegistrar::ShellProfile { rc_file } => register_shell_profile(rc_file, install_dir),
        }
    }
}

pub fn shell_rc_file(home_dir: &Path, shell: Option<&str>) -> PathBuf {
    match shell {
        Some(shell) if shell.contains("zsh") => home_dir.join(".zshrc"),
        _ => home_dir.join(".bashrc"),
    }
}

pub fn export_line(install_dir: &Path) -> String {
    format!("export PATH=\"{}:$PATH\"", install_dir.display())
}

fn register_shell_profile(rc_file: &Path, install_dir: &Path) -> Result<Registration, InstallError> {
    let line = export_line(install_dir);
    let target = rc_file.display().to_string();

    let existing = match fs::read_to_string(rc_file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(InstallError::io("read", rc_file, e)),
    };

    if existing.lines().any(|l| l.trim() == line) {
        tracing::debug!("{} already exports {}", target, install_dir.display());
        return Ok(Registration::AlreadyPresent(target));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_file)
        .map_err(|e| InstallError::io("open", rc_file, e))?;

    writeln!(file, "\n{}", line).map_err(|e| InstallError::io("write to", rc_file, e))?;

    tracing::info!("Appended PATH entry to {}", target);
    Ok(Registration::Added(target))
}

/// PowerShell that appends `install_dir` to the user `Path` unless already present.
pub fn windows_path_script(install_dir: &Path) -> String {
    let dir = install_dir.display().to_string().replace('\'', "''");
    format!(
        "$path = [Environment]::GetEnvironmentVariable('Path', 'User'); \
         if ($null -eq $path) {{ $path = '' }}; \
         if ($path.Contains('{dir}')) {{ exit 3 }}; \
         [Environment]::SetEnvironmentVariable('Path', $path + ';{dir}', 'User')"
    )
}

fn register_windows(install_dir: &Path) -> Result<Registration, InstallError> {
    let status = Command::new("powershell")
        .args(["-NoProfile", "-Command", &windows_path_script(install_dir)])
        .status()
        .map_err(|e| InstallError::PathUpdate(format!("could not run powershell: {}", e)))?;

    let target = "user PATH".to_string();
    match status.code() {
        Some(0) => Ok(Registration::Added(target)),
        Some(3) => Ok(Registration::AlreadyPresent(target)),
        _ => Err(InstallError::PathUpdate(format!(
            "powershell exited with {}",
            status
        ))),
    }
}
