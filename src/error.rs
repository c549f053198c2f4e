use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure a session can hit. Messages carry their cause inline, so
/// none of the variants expose a `source()`.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("could not determine home directory")]
    HomeDirNotFound,

    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("could not decode release list: {0}")]
    Decode(serde_json::Error),

    #[error("no releases found at {url}")]
    NoReleases { url: String },

    #[error("bad status from {url}: {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("unsupported {kind}: {value}")]
    UnsupportedPlatform { kind: &'static str, value: String },

    #[error("no matching asset named '{expected}' in release {tag}")]
    AssetNotFound { expected: String, tag: String },

    #[error("failed to {action} {}: {err}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        err: io::Error,
    },

    #[error("could not update PATH: {0}")]
    PathUpdate(String),
}

impl InstallError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, err: io::Error) -> Self {
        InstallError::Io {
            action,
            path: path.into(),
            err,
        }
    }
}

impl From<reqwest::Error> for InstallError {
    fn from(err: reqwest::Error) -> Self {
        InstallError::Transport(err)
    }
}

impl From<serde_json::Error> for InstallError {
    fn from(err: serde_json::Error) -> Self {
        InstallError::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_carry_their_cause() {
        let err = InstallError::io(
            "create install directory",
            "/home/sol/.solvm",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to create install directory /home/sol/.solvm: permission denied"
        );
        assert!(err.source().is_none());

        let err = InstallError::AssetNotFound {
            expected: "solvm-linux-arm64".to_string(),
            tag: "v1.2.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no matching asset named 'solvm-linux-arm64' in release v1.2.0"
        );
    }
}
