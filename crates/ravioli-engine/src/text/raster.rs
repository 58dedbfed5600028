use crate::paint::Color;

/// Coverage at or above which a pixel counts as inked in solid rendering.
const SOLID_THRESHOLD: u8 = 128;

/// Rendered text, tightly packed straight-alpha RGBA8 rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextBitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn inked_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    /// Stamps a glyph coverage mask at `(x, y)`, clipping at the bitmap edges.
    pub(crate) fn blit_solid(
        &mut self,
        coverage: &[u8],
        glyph_w: u32,
        glyph_h: u32,
        x: u32,
        y: u32,
        color: Color,
    ) {
        let rgba = color.to_u8();
        for gy in 0..glyph_h {
            let ty = y + gy;
            if ty >= self.height {
                break;
            }
            for gx in 0..glyph_w {
                let tx = x + gx;
                if tx >= self.width {
                    break;
                }
                let Some(&c) = coverage.get((gy * glyph_w + gx) as usize) else { return };
                if c < SOLID_THRESHOLD {
                    continue;
                }
                let i = ((ty * self.width + tx) * 4) as usize;
                self.pixels[i..i + 4].copy_from_slice(&rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_splits_coverage() {
        let mut bmp = TextBitmap::new(4, 1);
        bmp.blit_solid(&[0, 127, 128, 255], 4, 1, 0, 0, Color::WHITE);
        assert_eq!(bmp.inked_pixels(), 2);
        assert_eq!(&bmp.pixels[4..8], &[0, 0, 0, 0]);
        assert_eq!(&bmp.pixels[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn glyph_is_placed_at_offset() {
        let mut bmp = TextBitmap::new(3, 3);
        bmp.blit_solid(&[255], 1, 1, 2, 1, Color::rgba(1.0, 0.0, 0.0, 1.0));
        let i = ((1 * 3 + 2) * 4) as usize;
        assert_eq!(&bmp.pixels[i..i + 4], &[255, 0, 0, 255]);
        assert_eq!(bmp.inked_pixels(), 1);
    }

    #[test]
    fn overhang_is_clipped() {
        let mut bmp = TextBitmap::new(2, 2);
        bmp.blit_solid(&[255; 9], 3, 3, 1, 1, Color::WHITE);
        assert_eq!(bmp.inked_pixels(), 1);
    }

    #[test]
    fn empty_bitmap_has_no_pixels() {
        let bmp = TextBitmap::new(0, 5);
        assert!(bmp.pixels.is_empty());
        assert_eq!(bmp.inked_pixels(), 0);
    }
}
