use crate::error::InstallError;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::fs;
use std::io::Write;
use std::path::Path;

const BAR_TEMPLATE: &str =
    "{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";
const SPINNER_TEMPLATE: &str = "{msg} {spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

/// Streams `url` into `local_path`, returning the number of bytes written.
///
/// A failure mid-stream leaves whatever was received at `local_path`.
pub async fn download_file(client: &Client, url: &str, local_path: &Path) -> Result<u64, InstallError> {
    tracing::debug!("Downloading {} to {}", url, local_path.display());

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let mut file =
        fs::File::create(local_path).map_err(|e| InstallError::io("create", local_path, e))?;

    let pb = progress_bar(response.content_length());
    pb.set_message("Downloading");

    match stream_to_file(response, &mut file, local_path, &pb).await {
        Ok(downloaded) => {
            pb.finish_with_message("Download complete");
            tracing::info!("Downloaded {} bytes", downloaded);
            Ok(downloaded)
        }
        Err(e) => {
            pb.abandon_with_message("Download failed");
            Err(e)
        }
    }
}

async fn stream_to_file(
    response: reqwest::Response,
    file: &mut fs::File,
    local_path: &Path,
    pb: &ProgressBar,
) -> Result<u64, InstallError> {
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .map_err(|e| InstallError::io("write", local_path, e))?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()
        .map_err(|e| InstallError::io("write", local_path, e))?;
    Ok(downloaded)
}

fn progress_bar(content_length: Option<u64>) -> ProgressBar {
    match content_length {
        Some(total) => ProgressBar::new(total).with_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .expect("valid progress bar template")
                .progress_chars("#>-"),
        ),
        None => ProgressBar::new_spinner().with_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE).expect("valid spinner template"),
        ),
    }
}
