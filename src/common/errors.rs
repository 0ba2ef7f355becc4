use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_FAILURE, EXIT_ROOT_REFUSED};

/// Failures that abort the run before any detection happens.
/// We use `anyhow` at the binary edge; this enum exists so that pre-flight
/// failures can carry their distinct exit codes.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("refusing to run with root privileges; re-run as a regular user")]
    RunningAsRoot,

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("cannot open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SweepError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SweepError::RunningAsRoot => EXIT_ROOT_REFUSED,
            SweepError::UnsupportedPlatform(_) | SweepError::LogFile { .. } => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SweepError::RunningAsRoot.exit_code(), 2);
        assert_eq!(
            SweepError::UnsupportedPlatform("no home".into()).exit_code(),
            1
        );
        let err = SweepError::LogFile {
            path: PathBuf::from("/nope/sweep.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
