use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::paint::Color;

use super::TextBitmap;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Reads a font file and loads it.
    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        self.load_font(&bytes)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Renders one line of text without antialiasing.
    ///
    /// Glyph coverage is thresholded at 50%: covered pixels get `color`,
    /// everything else is fully transparent. Returns `None` for an unknown
    /// font; an empty or whitespace-only string yields a zero-width bitmap
    /// one line tall.
    pub fn render_solid(&self, id: FontId, text: &str, px: f32, color: Color) -> Option<TextBitmap> {
        let font = self.get(id)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, px, 0));

        let glyphs: Vec<_> = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .collect();

        let line_height = layout.height().ceil().max(1.0) as u32;
        let width = glyphs
            .iter()
            .map(|g| (g.x.round().max(0.0) as u32) + g.width as u32)
            .max()
            .unwrap_or(0);
        let height = glyphs
            .iter()
            .map(|g| (g.y.round().max(0.0) as u32) + g.height as u32)
            .fold(line_height, u32::max);

        let mut bitmap = TextBitmap::new(width, height);
        for g in glyphs {
            let (metrics, coverage) = font.rasterize_config(g.key);
            bitmap.blit_solid(
                &coverage,
                metrics.width as u32,
                metrics.height as u32,
                g.x.round().max(0.0) as u32,
                g.y.round().max(0.0) as u32,
                color,
            );
        }

        Some(bitmap)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_load_error() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_font_file(Path::new("/nonexistent/Inter-VariableFont.ttf"))
            .unwrap_err();
        assert!(err.0.contains("Inter-VariableFont.ttf"));
    }

    #[test]
    fn unknown_font_renders_nothing() {
        let fonts = FontSystem::new();
        assert!(fonts.render_solid(FontId(3), "Hello", 36.0, Color::WHITE).is_none());
    }
}
