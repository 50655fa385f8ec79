use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BakeError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode face {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("face {face} is {width}x{height}, cube faces must be square")]
    NotSquare {
        face: &'static str,
        width: u32,
        height: u32,
    },

    #[error("face {face} is {size}px but {first_face} is {expected}px")]
    SizeMismatch {
        face: &'static str,
        size: u32,
        first_face: &'static str,
        expected: u32,
    },

    #[error("expected 6 cube faces, got {0}")]
    FaceCount(usize),

    #[error("DDS encoding failed: {0}")]
    Dds(#[from] ddsfile::Error),
}
