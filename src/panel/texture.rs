//! Texture dimension lookup

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PanelError;

/// Resolves a texture name to its pixel dimensions
pub trait TextureProvider {
    /// Returns `[width, height]` of the named texture
    fn texture_size(&self, name: &str) -> Result<[f32; 2], PanelError>;
}

/// In-memory texture table, useful for tests and procedurally generated atlases
#[derive(Debug, Clone, Default)]
pub struct StaticTextureProvider {
    sizes: HashMap<String, [f32; 2]>,
}

impl StaticTextureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register a texture
    pub fn with_texture(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(name, width, height);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, width: u32, height: u32) {
        self.sizes
            .insert(name.into(), [width as f32, height as f32]);
    }
}

impl TextureProvider for StaticTextureProvider {
    fn texture_size(&self, name: &str) -> Result<[f32; 2], PanelError> {
        self.sizes
            .get(name)
            .copied()
            .ok_or_else(|| PanelError::UnknownTexture(name.to_string()))
    }
}

/// Reads dimensions from image files below a root directory.
///
/// Only the image header is decoded.
#[derive(Debug, Clone)]
pub struct ImageFileProvider {
    root: PathBuf,
}

impl ImageFileProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextureProvider for ImageFileProvider {
    fn texture_size(&self, name: &str) -> Result<[f32; 2], PanelError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(PanelError::UnknownTexture(name.to_string()));
        }

        let (width, height) =
            image::image_dimensions(&path).map_err(|e| PanelError::TextureRead {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        debug!(texture = name, width, height, "Read texture dimensions");

        Ok([width as f32, height as f32])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_lookup() {
        let provider = StaticTextureProvider::new().with_texture("frame.png", 48, 32);
        assert_eq!(provider.texture_size("frame.png"), Ok([48.0, 32.0]));
        assert_eq!(
            provider.texture_size("missing.png"),
            Err(PanelError::UnknownTexture("missing.png".to_string()))
        );
    }

    #[test]
    fn test_image_provider_reads_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let img = image::RgbaImage::new(24, 12);
        img.save(dir.path().join("panel.png")).expect("write png");

        let provider = ImageFileProvider::new(dir.path());
        assert_eq!(provider.texture_size("panel.png"), Ok([24.0, 12.0]));
    }

    #[test]
    fn test_image_provider_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = ImageFileProvider::new(dir.path());
        assert!(matches!(
            provider.texture_size("nope.png"),
            Err(PanelError::UnknownTexture(_))
        ));
    }

    #[test]
    fn test_image_provider_garbage_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("bad.png"), b"not an image").expect("write");
        let provider = ImageFileProvider::new(dir.path());
        assert!(matches!(
            provider.texture_size("bad.png"),
            Err(PanelError::TextureRead { .. })
        ));
    }
}
