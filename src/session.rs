//! The guided install session: one linear pass from release lookup to PATH setup.

use crate::config::InstallerSettings;
use crate::github::{build_client, get_latest_release};
use crate::install::Installer;
use crate::path::{PathRegistrar, Registration};
use crate::platform::{find_asset, Platform};
use crate::prompt::Confirm;
use crate::types::Outcome;
use crate::ui;
use anyhow::{Context, Result};

pub async fn run(settings: &InstallerSettings, prompt: &mut dyn Confirm) -> Result<Outcome> {
    let platform = Platform::resolve(settings.platform.as_deref())
        .context("Error detecting platform")?;
    tracing::info!("Installing for {}", platform);

    let installer = Installer::new(&settings.install_dir, platform);

    if installer.existing_installation().is_some()
        && !prompt.confirm("SolVM is already installed. Do you want to replace it?")
    {
        ui::notice("Installation cancelled");
        return Ok(Outcome::Cancelled);
    }

    let client = build_client().context("Error creating HTTP client")?;

    let release = get_latest_release(&client, settings)
        .await
        .context("Error getting latest release")?;
    ui::success(&format!("Latest version: {}", release.tag_name));

    let asset = find_asset(&release, &platform).context("Error finding system asset")?;
    ui::notice(&format!("Found matching asset: {}", asset.name));

    if !prompt.confirm("Do you want to install SolVM?") {
        ui::notice("Installation cancelled");
        return Ok(Outcome::Cancelled);
    }

    ui::notice(&format!(
        "Downloading to: {}",
        installer.temp_path(asset).display()
    ));
    let path = installer
        .install(&client, asset)
        .await
        .context("Error installing SolVM")?;

    if !prompt.confirm("Do you want to add SolVM to your PATH?") {
        ui::notice("Skipping PATH configuration");
    } else {
        ui::notice("Adding to PATH...");
        let registrar = PathRegistrar::for_platform(&platform, settings);
        match registrar.register(&settings.install_dir) {
            Ok(Registration::Added(target)) => {
                ui::success(&format!("Successfully added to PATH ({})", target))
            }
            Ok(Registration::AlreadyPresent(target)) => {
                ui::success(&format!("Already on PATH ({})", target))
            }
            Err(e) => {
                tracing::warn!("PATH registration failed: {}", e);
                ui::error(&format!("Error adding to PATH: {}", e));
                ui::notice(&format!(
                    "Please manually add to PATH: {}",
                    settings.install_dir.display()
                ));
            }
        }
    }

    ui::success("Installation complete!");
    ui::success("Please restart your terminal to use SolVM");

    Ok(Outcome::Installed {
        tag: release.tag_name.clone(),
        path,
    })
}
