//! Silhouette image loading and binarization.

use std::path::{Path, PathBuf};

use carver::ViewMask;
use image::ImageReader;
use thiserror::Error;

/// Failure while turning a source image into a silhouette mask.
///
/// Fatal and one-shot: the pipeline refuses to start carving when any
/// view cannot be loaded.
#[derive(Debug, Error)]
pub enum MaskLoadError {
    #[error("cannot open {view} mask '{}': {source}", path.display())]
    Open {
        view: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {view} mask '{}': {source}", path.display())]
    Decode {
        view: &'static str,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Load one silhouette image and binarize it at `threshold`.
///
/// The mask keeps the source image's exact pixel dimensions. Any input
/// format the `image` crate can decode is accepted; color images are
/// converted to 8-bit grayscale first.
pub fn load_mask(view: &'static str, path: &Path, threshold: u8) -> Result<ViewMask, MaskLoadError> {
    let decoded = ImageReader::open(path)
        .map_err(|source| MaskLoadError::Open {
            view,
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| MaskLoadError::Decode {
            view,
            path: path.to_path_buf(),
            source,
        })?;
    let gray = decoded.to_luma8();
    Ok(ViewMask::from_intensities(
        gray.width() as usize,
        gray.height() as usize,
        gray.as_raw(),
        threshold,
    ))
}
