//! Photo upload validation
//!
//! Submissions may attach a photo for a flat point bonus. Uploads are
//! restricted to png/jpg/jpeg and arrive base64-encoded; anything that
//! fails to decode or does not carry a recognizable image signature is
//! rejected with a message the dashboard can show inline.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;

/// File extensions accepted for photo uploads.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff];

/// Errors surfaced while validating a photo upload.
#[derive(Error, Debug)]
pub enum PhotoError {
    /// File extension is not in the allowlist
    #[error("Unsupported file extension: {0} (allowed: png, jpg, jpeg)")]
    UnsupportedExtension(String),

    /// Base64 payload could not be decoded
    #[error("Could not decode photo data: {0}")]
    InvalidEncoding(String),

    /// Decoded bytes do not look like a supported image
    #[error("Photo data is not a recognizable PNG or JPEG image")]
    UnrecognizedFormat,

    /// Empty payload
    #[error("Photo data is empty")]
    Empty,
}

/// A validated photo upload.
#[derive(Debug, Clone)]
pub struct Photo {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Photo {
    /// Validate and decode a base64-encoded upload.
    ///
    /// Checks the filename extension against the allowlist, decodes the
    /// payload, and sniffs the PNG/JPEG magic numbers.
    pub fn from_base64(filename: &str, data: &str) -> Result<Self, PhotoError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(PhotoError::UnsupportedExtension(extension));
        }

        let bytes = BASE64
            .decode(data.trim())
            .map_err(|e| PhotoError::InvalidEncoding(e.to_string()))?;

        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }

        if !bytes.starts_with(PNG_MAGIC) && !bytes.starts_with(JPEG_MAGIC) {
            return Err(PhotoError::UnrecognizedFormat);
        }

        Ok(Self {
            filename: filename.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8]) -> String {
        BASE64.encode(bytes)
    }

    #[test]
    fn test_valid_png() {
        let data = encode(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 1]);
        let photo = Photo::from_base64("garden.png", &data).unwrap();
        assert_eq!(photo.filename, "garden.png");
        assert_eq!(photo.bytes.len(), 12);
    }

    #[test]
    fn test_valid_jpeg() {
        let data = encode(&[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]);
        assert!(Photo::from_base64("tree.jpg", &data).is_ok());
        assert!(Photo::from_base64("tree.JPEG", &data).is_ok()); // extension check ignores case
    }

    #[test]
    fn test_rejected_extension() {
        let data = encode(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
        assert!(matches!(
            Photo::from_base64("photo.gif", &data),
            Err(PhotoError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            Photo::from_base64("no_extension", &data),
            Err(PhotoError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(
            Photo::from_base64("a.png", "not!!valid@@base64"),
            Err(PhotoError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_wrong_magic() {
        let data = encode(b"just some text pretending to be an image");
        assert!(matches!(
            Photo::from_base64("a.png", &data),
            Err(PhotoError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(
            Photo::from_base64("a.png", ""),
            Err(PhotoError::Empty)
        ));
    }
}
