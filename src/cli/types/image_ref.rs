//! Reference to an uploaded image in media storage.

use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Maximum length of a stored image reference.
pub const MAX_IMAGE_REF_LEN: usize = 100;

/// Relative path of an image file below the media root.
///
/// References always use `/` as separator, never start at the filesystem root
/// and never step outside the media root with `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();

        let reason = if value.is_empty() {
            Some("reference cannot be empty".to_string())
        } else if value.chars().count() > MAX_IMAGE_REF_LEN {
            Some(format!("longer than {} characters", MAX_IMAGE_REF_LEN))
        } else if value.contains('\0') {
            Some("contains null bytes".to_string())
        } else if value.contains('\\') {
            Some("must use '/' as separator".to_string())
        } else if value.starts_with('/') || Path::new(&value).is_absolute() {
            Some("must be relative to the media root".to_string())
        } else if value.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
            Some("contains empty, '.' or '..' components".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PlayerError::InvalidImageRef { value, reason }),
            None => Ok(Self(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path component, e.g. `messi.png` for `players/messi.png`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Join this reference onto a media root.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |mut path, part| {
            path.push(part);
            path
        })
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ImageRef {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ImageRef {
    type Error = PlayerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.0
    }
}
