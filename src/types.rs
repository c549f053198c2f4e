use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// How a session ended when no fatal error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed { tag: String, path: PathBuf },
    Cancelled,
}
