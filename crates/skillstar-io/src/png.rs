//! PNG export of rendered charts.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageError};
use thiserror::Error;

use skillstar_renderer::Pixmap;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] ImageError),
}

/// Straight (non-premultiplied) RGBA8 bytes, row-major.
pub fn rgba_bytes(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

/// Encodes `pixmap` as an 8-bit RGBA PNG into `writer`.
pub fn write_png_to<W: Write>(pixmap: &Pixmap, writer: W) -> Result<(), ExportError> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        &rgba_bytes(pixmap),
        pixmap.width(),
        pixmap.height(),
        ColorType::Rgba8.into(),
    )?;
    Ok(())
}

pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_png_to(pixmap, &mut buffer)?;
    Ok(buffer)
}

/// Writes `pixmap` to `path` as PNG, replacing any existing file.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_png_to(pixmap, &mut writer)?;
    writer.flush().map_err(io_err)?;
    log::info!(
        "Wrote {}x{} PNG to {}",
        pixmap.width(),
        pixmap.height(),
        path.display()
    );
    Ok(())
}
