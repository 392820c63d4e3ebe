//! Media storage for uploaded player images
//!
//! Images live as plain files below a media root. The database only keeps an
//! [`ImageRef`], the path relative to that root. Uploads are decoded once
//! before they are stored so a record can never point at something that is
//! not an image.

use crate::cli::types::image_ref::{ImageRef, MAX_IMAGE_REF_LEN};
use crate::error::{PlayerError, Result};
use image::{ImageFormat, ImageReader};
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use std::{
    fs,
    io::{self, Cursor, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Length of the random suffix appended when a file name is already taken
const SUFFIX_LEN: usize = 7;
const MAX_NAME_ATTEMPTS: usize = 100;

const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Bmp,
    ImageFormat::Ico,
    ImageFormat::Tiff,
];

/// Result of storing an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    pub reference: ImageRef,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// File-backed store rooted at a media directory
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and store the image at `source`
    pub fn save(&self, source: &Path) -> Result<StoredImage> {
        let bytes = fs::read(source)?;
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image");

        self.save_bytes(file_name, &bytes)
    }

    /// Validate and store an in-memory upload under a name derived from `file_name`
    pub fn save_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<StoredImage> {
        let (format, width, height) = inspect_image(file_name, bytes)?;
        let (stem, extension) = storage_name_parts(file_name, format);

        fs::create_dir_all(&self.root)?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                format!("{}.{}", stem, extension)
            } else {
                format!("{}_{}.{}", stem, random_suffix(), extension)
            };
            let reference = ImageRef::new(candidate)?;
            let path = self.resolve(&reference);

            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(reference = %reference, "Image name taken, retrying with suffix");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
                let _ = fs::remove_file(&path);
                return Err(e.into());
            }

            let format = format!("{:?}", format).to_lowercase();
            debug!(reference = %reference, %format, width, height, "Stored image");
            return Ok(StoredImage {
                reference,
                width,
                height,
                format,
            });
        }

        Err(PlayerError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("could not find a free file name for '{}'", file_name),
        )))
    }

    /// Absolute location of a stored image
    pub fn resolve(&self, reference: &ImageRef) -> PathBuf {
        reference.to_path(&self.root)
    }

    pub fn exists(&self, reference: &ImageRef) -> bool {
        self.resolve(reference).is_file()
    }

    /// Read back the stored bytes
    pub fn read(&self, reference: &ImageRef) -> Result<Vec<u8>> {
        let path = self.resolve(reference);
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PlayerError::ImageMissing {
                path: path.display().to_string(),
            },
            _ => PlayerError::Io(e),
        })
    }

    /// Remove a stored image. Returns false when it was already gone.
    pub fn delete(&self, reference: &ImageRef) -> Result<bool> {
        match fs::remove_file(self.resolve(reference)) {
            Ok(()) => {
                debug!(reference = %reference, "Deleted image");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(reference = %reference, "Image already missing from media storage");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Decode the upload and return its format and dimensions
fn inspect_image(file_name: &str, bytes: &[u8]) -> Result<(ImageFormat, u32, u32)> {
    let invalid = |reason: String| PlayerError::InvalidImage {
        path: file_name.to_string(),
        reason,
    };

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| invalid("unrecognized image format".to_string()))?;

    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(invalid(format!("unsupported image format {:?}", format)));
    }

    let decoded = reader.decode().map_err(|e| invalid(e.to_string()))?;
    Ok((format, decoded.width(), decoded.height()))
}

/// Sanitized stem and extension for a stored file.
///
/// The extension of the upload is kept when it matches the detected format,
/// otherwise the format's canonical extension is used.
pub(crate) fn storage_name_parts(file_name: &str, format: ImageFormat) -> (String, String) {
    let path = Path::new(file_name);
    let known = format.extensions_str();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| known.contains(&ext.as_str()))
        .unwrap_or_else(|| known.first().copied().unwrap_or("img").to_string());

    let raw_stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let sanitized: String = raw_stem
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_matches('.');

    // Leave room for "_" + suffix + "." + extension
    let max_stem = MAX_IMAGE_REF_LEN - SUFFIX_LEN - 2 - extension.len();
    let stem: String = if sanitized.is_empty() {
        "image".to_string()
    } else {
        sanitized.chars().take(max_stem).collect()
    };

    (stem, extension)
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect()
}
