//! Offline PNG rendering on the host.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::error::WavesError;
use crate::raster;
use crate::scene::WavesScene;

/// Rasterize `scene` at `width x height` and write it to `path` as PNG.
pub fn save_png(scene: &WavesScene, width: u32, height: u32, path: &Path) -> Result<(), WavesError> {
    let frame = raster::render(scene, width, height);
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, frame.into_pixels())
        .ok_or_else(|| {
            WavesError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "frame size does not match its dimensions",
            ))
        })?;
    img.save(path)?;
    log::info!("wrote {}x{} snapshot to {}", width, height, path.display());
    Ok(())
}
