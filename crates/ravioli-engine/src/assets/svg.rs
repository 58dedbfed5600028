use std::path::Path;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

/// Rasterized SVG document.
pub struct SvgImage {
    pub pixmap: tiny_skia::Pixmap,
}

impl SvgImage {
    /// Reads and rasterizes an SVG file at its intrinsic size.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let pixmap = rasterize_svg(&data)
            .with_context(|| format!("failed to rasterize {}", path.display()))?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}

/// Parses `data` and renders it into a premultiplied RGBA pixmap.
pub fn rasterize_svg(data: &[u8]) -> Result<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .context("invalid SVG document")?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("SVG has zero size")?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_RECT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2">
        <rect x="0" y="0" width="4" height="2" fill="#ff0000"/>
    </svg>"##;

    #[test]
    fn renders_at_intrinsic_size() {
        let pixmap = rasterize_svg(RED_RECT.as_bytes()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (4, 2));

        let px = pixmap.pixel(1, 1).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 0, 0, 255));
    }

    #[test]
    fn rejects_non_svg() {
        assert!(rasterize_svg(b"plain text, not markup").is_err());
    }
}
