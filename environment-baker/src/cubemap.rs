use constants::environment::{CUBEMAP_BYTES_PER_TEXEL, CUBEMAP_FACES};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::BakeError;

/// One decoded cube face in RGBA8.
#[derive(Debug, Clone)]
pub struct CubeFace {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Face image paths in GPU layer order: `<input>/<prefix><face>.png`.
pub fn face_paths(input: &Path, prefix: &str) -> Vec<(&'static str, PathBuf)> {
    CUBEMAP_FACES
        .iter()
        .map(|&face| (face, input.join(format!("{prefix}{face}.png"))))
        .collect()
}

/// Decode all faces in parallel, keeping layer order.
pub fn load_faces(paths: &[(&'static str, PathBuf)]) -> Result<Vec<CubeFace>, BakeError> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.green/blue}] {pos}/{len} faces ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏"),
    );

    let faces = paths
        .par_iter()
        .map(|(name, path)| {
            let face = load_face(*name, path);
            pb.inc(1);
            face
        })
        .collect::<Result<Vec<_>, _>>();

    pb.finish_with_message("decoded");
    faces
}

fn load_face(name: &'static str, path: &Path) -> Result<CubeFace, BakeError> {
    let image = image::open(path)
        .map_err(|source| BakeError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    Ok(CubeFace {
        name,
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// Check that there are six square faces of one size and return that size.
pub fn validate_faces(faces: &[CubeFace]) -> Result<u32, BakeError> {
    if faces.len() != CUBEMAP_FACES.len() {
        return Err(BakeError::FaceCount(faces.len()));
    }

    let first = &faces[0];
    for face in faces {
        if face.width != face.height {
            return Err(BakeError::NotSquare {
                face: face.name,
                width: face.width,
                height: face.height,
            });
        }
        if face.width != first.width {
            return Err(BakeError::SizeMismatch {
                face: face.name,
                size: face.width,
                first_face: first.name,
                expected: first.width,
            });
        }
    }

    Ok(first.width)
}

/// Concatenate validated faces into DDS layer order (one mip per face).
pub fn pack_cube_faces(faces: &[CubeFace]) -> Result<(u32, Vec<u8>), BakeError> {
    let size = validate_faces(faces)?;
    let face_bytes = (size as usize) * (size as usize) * CUBEMAP_BYTES_PER_TEXEL;

    let mut data = Vec::with_capacity(face_bytes * faces.len());
    for face in faces {
        data.extend_from_slice(&face.rgba);
    }
    Ok((size, data))
}
