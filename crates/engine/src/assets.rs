use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;
use tracing::warn;

use crate::asset_keys::{validate_asset_key, AssetKeyError};

const IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset key '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: AssetKeyError,
    },
    #[error("no image file for asset key '{key}' under {root}")]
    NotFound { key: String, root: PathBuf },
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Image {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(AssetError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            rgba.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.rgba[offset..offset + 4]);
        Some(out)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[offset..offset + 4].copy_from_slice(&color);
    }

    /// Nearest-neighbour resample to exactly `width` x `height`.
    pub fn resized_nearest(&self, width: u32, height: u32) -> Image {
        if width == self.width && height == self.height {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 {
            return Image::solid(width, height, [0, 0, 0, 0]);
        }
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for out_y in 0..height {
            let src_y = (out_y as u64 * self.height as u64 / height.max(1) as u64) as u32;
            for out_x in 0..width {
                let src_x = (out_x as u64 * self.width as u64 / width.max(1) as u64) as u32;
                let offset = (src_y as usize * self.width as usize + src_x as usize) * 4;
                rgba.extend_from_slice(&self.rgba[offset..offset + 4]);
            }
        }
        Image {
            width,
            height,
            rgba,
        }
    }
}

/// Loads `<root>/<key>.png`, falling back to `.jpg`.
pub fn load_image(root: &Path, key: &str) -> Result<Image, AssetError> {
    let path = resolve_image_path(root, key)?;
    let reader = ImageReader::open(&path).map_err(|source| AssetError::Open {
        path: path.clone(),
        source,
    })?;
    let decoded = reader
        .decode()
        .map_err(|source| AssetError::Decode { path, source })?;
    let image = decoded.to_rgba8();
    Ok(Image {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

fn resolve_image_path(root: &Path, key: &str) -> Result<PathBuf, AssetError> {
    validate_asset_key(key).map_err(|source| AssetError::InvalidKey {
        key: key.to_string(),
        source,
    })?;
    IMAGE_EXTENSIONS
        .iter()
        .map(|extension| root.join(format!("{key}.{extension}")))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| AssetError::NotFound {
            key: key.to_string(),
            root: root.to_path_buf(),
        })
}

/// Lazily loaded image cache. A key that fails to load is remembered as
/// missing so the warning is logged once and callers draw a placeholder.
#[derive(Debug)]
pub struct AssetStore {
    root: PathBuf,
    images: HashMap<String, Option<Image>>,
    warned_missing_keys: HashSet<String>,
}

impl AssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            images: HashMap::new(),
            warned_missing_keys: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn image(&mut self, key: &str) -> Option<&Image> {
        if !self.images.contains_key(key) {
            let loaded = match load_image(&self.root, key) {
                Ok(image) => Some(image),
                Err(error) => {
                    self.warn_missing_once(key, &error);
                    None
                }
            };
            self.images.insert(key.to_string(), loaded);
        }
        self.images.get(key).and_then(Option::as_ref)
    }

    /// Insert a decoded image directly, bypassing the filesystem.
    pub fn insert(&mut self, key: &str, image: Image) {
        self.images.insert(key.to_string(), Some(image));
    }

    fn warn_missing_once(&mut self, key: &str, error: &AssetError) {
        if !self.warned_missing_keys.insert(key.to_string()) {
            return;
        }
        warn!(
            asset_key = key,
            root = %self.root.display(),
            reason = %error,
            "asset_load_failed_using_placeholder"
        );
    }
}
