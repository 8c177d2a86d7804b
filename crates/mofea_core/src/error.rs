//! Error types for mofea

use ndarray_npy::{ReadNpyError, ReadNpzError, WriteNpyError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the body model or processing motion
/// files. Shape violations are not errors, they panic.
#[derive(Debug, Error)]
pub enum MofeaError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read npy file {}: {source}", .path.display())]
    NpyRead {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },

    #[error("Failed to write npy file {}: {source}", .path.display())]
    NpyWrite {
        path: PathBuf,
        #[source]
        source: WriteNpyError,
    },

    #[error("Failed to read array '{name}' from npz archive: {source}")]
    NpzRead {
        name: String,
        #[source]
        source: ReadNpzError,
    },

    #[error("Body model file does not exist: {}. Please point to a SMPL-X .npz file", .0.display())]
    MissingModel(PathBuf),

    #[error("Input path is not a directory: {}", .0.display())]
    InvalidInputDir(PathBuf),

    #[error("Cannot derive a clip name from {}, the file name before its first '.' is empty", .0.display())]
    InvalidClipName(PathBuf),
}

impl MofeaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, MofeaError>;
