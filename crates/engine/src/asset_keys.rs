use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetKeyError {
    #[error("asset key must not be empty")]
    Empty,
    #[error("asset key must not start or end with '/'")]
    EdgeSlash,
    #[error("asset key must not contain '..'")]
    ParentTraversal,
    #[error("asset key must not carry a file extension")]
    Extension,
    #[error("asset key contains invalid character '{character}'")]
    InvalidCharacter { character: char },
}

/// Keys are relative, extension-less paths under the asset root such as
/// `main/sprite_1` or `laser_labyrinth/laser_map`.
pub(crate) fn validate_asset_key(key: &str) -> Result<(), AssetKeyError> {
    if key.is_empty() {
        return Err(AssetKeyError::Empty);
    }
    if key.starts_with('/') || key.ends_with('/') {
        return Err(AssetKeyError::EdgeSlash);
    }
    if key.contains("..") {
        return Err(AssetKeyError::ParentTraversal);
    }
    if key.contains('.') {
        return Err(AssetKeyError::Extension);
    }
    for ch in key.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '/' | '-') {
            continue;
        }
        return Err(AssetKeyError::InvalidCharacter { character: ch });
    }
    Ok(())
}
