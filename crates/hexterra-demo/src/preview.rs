//! One-pixel-per-cell PNG preview of a generated grid.

use std::path::Path;

use hexterra_grid::{Cell, CellRenderer};

/// Errors writing a preview image.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The PNG encoder rejected the image.
    #[error("failed to encode preview: {0}")]
    Encode(#[from] png::EncodingError),

    /// The file could not be written.
    #[error("failed to write preview: {0}")]
    Write(#[from] std::io::Error),
}

/// Renderer that paints each cell's display color into an RGBA image.
///
/// Row 0 of the grid is the top row of the image.
#[derive(Clone, Debug)]
pub struct PreviewRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PreviewRenderer {
    /// Blank (transparent) preview for a `width x height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// RGBA of the pixel for grid cell `(column, row)`.
    pub fn pixel(&self, column: u32, row: u32) -> Option<[u8; 4]> {
        let idx = self.index(column, row)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    fn index(&self, column: u32, row: u32) -> Option<usize> {
        (column < self.width && row < self.height)
            .then(|| (row as usize * self.width as usize + column as usize) * 4)
    }

    /// Encode the image as PNG.
    pub fn encode(&self) -> Result<Vec<u8>, PreviewError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(png_buf)
    }

    /// Encode and write to `path`.
    pub fn save(&self, path: &Path) -> Result<(), PreviewError> {
        std::fs::write(path, self.encode()?)?;
        Ok(())
    }
}

impl CellRenderer for PreviewRenderer {
    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn submit(&mut self, cell: &Cell) {
        let (Ok(column), Ok(row)) = (u32::try_from(cell.coord.column), u32::try_from(cell.coord.row))
        else {
            return;
        };
        if let Some(idx) = self.index(column, row) {
            self.pixels[idx..idx + 4].copy_from_slice(&cell.color.to_rgba8());
        }
    }
}
