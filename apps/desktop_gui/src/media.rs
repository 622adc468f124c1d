//! Decoding fetched catalog images into something the UI thread can upload.

pub(crate) const MAX_PREVIEW_EDGE: u32 = 768;

#[derive(Clone)]
pub(crate) struct PreviewImage {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) rgba: Vec<u8>,
}

impl PreviewImage {
    pub(crate) fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

pub(crate) fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = if dynamic.width() > MAX_PREVIEW_EDGE || dynamic.height() > MAX_PREVIEW_EDGE {
        dynamic.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
    } else {
        dynamic
    };
    let rgba = resized.to_rgba8();
    Ok(PreviewImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([200u8, 30, 60, 255]));
        let mut out = Cursor::new(Vec::new());
        buffer
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn small_images_keep_their_size() {
        let preview = decode_preview_image(&png(40, 20)).expect("decode");
        assert_eq!(preview.size(), [40, 20]);
        assert_eq!(preview.rgba.len(), 40 * 20 * 4);
    }

    #[test]
    fn large_images_are_scaled_down_preserving_aspect() {
        let preview = decode_preview_image(&png(1536, 768)).expect("decode");
        assert_eq!(preview.width, MAX_PREVIEW_EDGE as usize);
        assert_eq!(preview.height, (MAX_PREVIEW_EDGE / 2) as usize);
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(decode_preview_image(b"definitely not an image").is_err());
    }
}
