use std::path::Path;

use anyhow::{Context, Result};

/// Decoded atlas pixels, tightly packed RGBA8 rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl AtlasImage {
    /// Decodes an image file (format picked from its contents) to RGBA8.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load atlas image {}", path.display()))?;
        Self::from_rgba(image.to_rgba8())
    }

    /// Decodes an in-memory image to RGBA8.
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).context("failed to decode atlas image")?;
        Self::from_rgba(image.to_rgba8())
    }

    fn from_rgba(image: image::RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        anyhow::ensure!(width > 0 && height > 0, "atlas image is empty");
        Ok(Self {
            width,
            height,
            pixels: image.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: &image::RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn decodes_to_tightly_packed_rgba() {
        let mut src = image::RgbaImage::new(4, 2);
        src.put_pixel(1, 0, image::Rgba([255, 0, 0, 255]));
        src.put_pixel(3, 1, image::Rgba([0, 0, 255, 128]));

        let atlas = AtlasImage::from_memory(&encode_png(&src)).unwrap();
        assert_eq!((atlas.width, atlas.height), (4, 2));
        assert_eq!(atlas.pixels.len(), 4 * 2 * 4);
        assert_eq!(&atlas.pixels[4..8], &[255, 0, 0, 255]);
        assert_eq!(&atlas.pixels[(4 + 3) * 4..(4 + 3) * 4 + 4], &[0, 0, 255, 128]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(AtlasImage::from_memory(b"definitely not an image").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AtlasImage::load(Path::new("/nonexistent/ravioli_atlas.bmp")).unwrap_err();
        assert!(format!("{err}").contains("ravioli_atlas.bmp"));
    }
}
