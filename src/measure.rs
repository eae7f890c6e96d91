//! Picture geometry from image files.
//!
//! The engine never touches pixels; this is the collaborator step that
//! turns picture files into [`Picture`] records. Dimensions are probed from
//! the JPEG/PNG header without decoding pixel data, so measuring a large
//! gallery is cheap.

use std::path::Path;

use crate::error::ArrangeError;
use crate::model::Picture;

/// Probe one image file and return its geometry as a [`Picture`].
///
/// Width and height are the pixel dimensions as floats; callers working in
/// another unit system scale them afterwards.
pub fn picture_from_file(id: u64, path: &Path) -> Result<Picture, ArrangeError> {
    let reader = image::io::Reader::open(path)
        .map_err(|e| {
            ArrangeError::Config(format!(
                "failed to read picture file '{}': {}",
                path.display(),
                e
            ))
        })?
        .with_guessed_format()
        .map_err(|e| {
            ArrangeError::Config(format!(
                "failed to sniff format of '{}': {}",
                path.display(),
                e
            ))
        })?;

    let (width_px, height_px) = reader.into_dimensions().map_err(|e| {
        ArrangeError::Config(format!(
            "failed to probe dimensions of '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Picture::new(id, f64::from(width_px), f64::from(height_px)))
}

/// Measure a batch of files, assigning ids 1, 2, 3, … in argument order.
pub fn pictures_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Picture>, ArrangeError> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| picture_from_file(i as u64 + 1, path.as_ref()))
        .collect()
}
