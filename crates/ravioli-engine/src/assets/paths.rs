use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable that overrides the asset directory.
pub const ASSET_DIR_ENV: &str = "RAVIOLI_ASSETS";

/// Where the demo's assets live and what they are called.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub atlas: String,
    pub font: String,
    pub svg: String,
    pub music: String,
}

impl AssetPaths {
    /// Asset set rooted at `root` with the default file names.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            atlas: "ravioli_atlas.bmp".to_string(),
            font: "Inter-VariableFont.ttf".to_string(),
            svg: "gs_tiger.svg".to_string(),
            music: "the_entertainer.ogg".to_string(),
        }
    }

    /// Resolves the asset directory: `RAVIOLI_ASSETS` if set, otherwise the
    /// directory containing the running executable.
    pub fn locate() -> Result<Self> {
        let root = resolve_root(std::env::var_os(ASSET_DIR_ENV), std::env::current_exe())?;
        Ok(Self::with_root(root))
    }

    pub fn atlas_path(&self) -> PathBuf {
        self.root.join(&self.atlas)
    }

    pub fn font_path(&self) -> PathBuf {
        self.root.join(&self.font)
    }

    pub fn svg_path(&self) -> PathBuf {
        self.root.join(&self.svg)
    }

    pub fn music_path(&self) -> PathBuf {
        self.root.join(&self.music)
    }
}

fn resolve_root(
    override_dir: Option<OsString>,
    exe: std::io::Result<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let exe = exe.context("failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("executable path {} has no parent", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let root = resolve_root(Some("/srv/assets".into()), Ok("/opt/bin/demo".into())).unwrap();
        assert_eq!(root, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let root = resolve_root(Some(OsString::new()), Ok("/opt/bin/demo".into())).unwrap();
        assert_eq!(root, PathBuf::from("/opt/bin"));
    }

    #[test]
    fn defaults_to_executable_dir() {
        let root = resolve_root(None, Ok("/opt/bin/demo".into())).unwrap();
        assert_eq!(root, PathBuf::from("/opt/bin"));
    }

    #[test]
    fn missing_executable_is_an_error() {
        let err = resolve_root(None, Err(std::io::Error::other("gone"))).unwrap_err();
        assert!(format!("{err:#}").contains("gone"));
    }

    #[test]
    fn file_names_join_the_root() {
        let paths = AssetPaths::with_root("/data");
        assert_eq!(paths.atlas_path(), PathBuf::from("/data/ravioli_atlas.bmp"));
        assert_eq!(paths.music_path(), PathBuf::from("/data/the_entertainer.ogg"));
        assert_eq!(paths.font_path(), PathBuf::from("/data/Inter-VariableFont.ttf"));
        assert_eq!(paths.svg_path(), PathBuf::from("/data/gs_tiger.svg"));
    }
}
