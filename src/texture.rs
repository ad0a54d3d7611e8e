//! Texture loading and caching for sprite images.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::RgbaImage;

/// Texture manager that loads and caches sprite images.
#[derive(Debug)]
pub struct TextureManager {
    /// Directory relative sprite sources are resolved against.
    root: PathBuf,
    /// Loaded images keyed by normalized source.
    cache: HashMap<String, RgbaImage>,
    /// Sources that failed to load, so the warning is logged once.
    missing: HashSet<String>,
}

impl TextureManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            missing: HashSet::new(),
        }
    }

    /// Load a sprite source (e.g. `Sprites\\UI\\button.png` or `Sprites/UI/button`).
    pub fn load(&mut self, source: &str) -> Option<&RgbaImage> {
        let normalized = normalize_source(source);

        if self.cache.contains_key(&normalized) {
            return self.cache.get(&normalized);
        }
        if self.missing.contains(&normalized) {
            return None;
        }

        let loaded = self
            .resolve_path(&normalized)
            .map(|path| load_texture_file(&path));
        match loaded {
            Some(Ok(img)) => {
                tracing::debug!("Loaded texture {} ({}x{})", normalized, img.width(), img.height());
                self.cache.insert(normalized.clone(), img);
                self.cache.get(&normalized)
            }
            Some(Err(e)) => {
                tracing::warn!("Failed to decode texture {}: {}", normalized, e);
                self.missing.insert(normalized);
                None
            }
            None => {
                tracing::warn!("Texture not found: {}", normalized);
                self.missing.insert(normalized);
                None
            }
        }
    }

    /// Get a cached texture without loading.
    pub fn get(&self, source: &str) -> Option<&RgbaImage> {
        self.cache.get(&normalize_source(source))
    }

    /// Resolve a source to an existing file, trying common extensions when
    /// the source has none.
    fn resolve_path(&self, normalized: &str) -> Option<PathBuf> {
        let direct = self.root.join(normalized);
        if direct.is_file() {
            return Some(direct);
        }
        for ext in ["png", "PNG"] {
            let file_path = self.root.join(format!("{}.{}", normalized, ext));
            if file_path.is_file() {
                return Some(file_path);
            }
        }
        None
    }
}

/// Normalize a sprite source: forward slashes, no leading `./`.
fn normalize_source(source: &str) -> String {
    let normalized = source.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .map(str::to_string)
        .unwrap_or(normalized)
}

fn load_texture_file(path: &Path) -> Result<RgbaImage, image::ImageError> {
    Ok(image::open(path)?.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_source() {
        assert_eq!(normalize_source("Sprites\\UI\\button.png"), "Sprites/UI/button.png");
        assert_eq!(normalize_source("./button.png"), "button.png");
    }

    #[test]
    fn loads_with_and_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(2, 3, image::Rgba([1, 2, 3, 255]))
            .save(dir.path().join("button.png"))
            .unwrap();

        let mut textures = TextureManager::new(dir.path());
        assert_eq!(textures.load("button").map(|t| t.dimensions()), Some((2, 3)));
        assert!(textures.load("button.png").is_some());
        assert!(textures.get("button").is_some());
        assert!(textures.load("missing.png").is_none());
    }
}
