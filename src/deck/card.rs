// SPDX-License-Identifier: MPL-2.0
//! Card data: one fetched image reference plus its decoded display handle.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl CardImage {
    /// Creates a `CardImage` from encoded bytes (JPEG, PNG, GIF, WebP).
    ///
    /// The bytes are decoded once to probe dimensions and reject payloads
    /// that are not actually images (e.g. an HTML error page), then handed
    /// to Iced unmodified for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the bytes are not a
    /// supported image format.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let decoded = image_rs::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();
        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }

    /// Creates a `CardImage` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// One fetched cat: its Cataas identifier, the derived image URL, and the
/// decoded image. Immutable once created.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub url: String,
    pub image: CardImage,
}

impl Card {
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>, image: CardImage) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_keeps_dimensions() {
        let image = CardImage::from_rgba(2, 3, vec![0; 24]);
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 3);
    }

    #[test]
    fn from_encoded_rejects_garbage() {
        let result = CardImage::from_encoded(b"<html>not a cat</html>".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn from_encoded_decodes_a_png() {
        // Smallest valid PNG: 1x1 opaque pixel.
        let mut bytes = Vec::new();
        {
            use image_rs::ImageEncoder;
            let encoder = image_rs::codecs::png::PngEncoder::new(&mut bytes);
            encoder
                .write_image(&[255, 0, 0, 255], 1, 1, image_rs::ExtendedColorType::Rgba8)
                .unwrap();
        }
        let image = CardImage::from_encoded(bytes).unwrap();
        assert_eq!((image.width, image.height), (1, 1));
    }
}
