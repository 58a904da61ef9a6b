//! Image descriptor passed to the encoder.

/// Borrowed view of one image produced for the current frame.
///
/// The pixel slice is borrowed for the duration of a single encode call;
/// the encoder never retains it. Pixels are opaque 32-bit elements copied
/// to the wire verbatim, and `format` is an opaque enumerant agreed between
/// the endpoints, passed through unmodified.
///
/// The caller contract is `pixels.len() == width * height`. It is checked
/// by a debug assertion during encoding, never in release builds.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Opaque pixel-format tag.
    pub format: u32,
    /// Camera field of view in degrees, transmitted as raw IEEE-754 bits.
    pub fov: f32,
    /// Pixel elements, row-major, exactly `width * height` of them.
    pub pixels: &'a [u32],
}

impl ImageView<'_> {
    /// Encoded length of the per-image header in bytes
    /// (width, height, format, fov).
    pub const HEADER_LEN: usize = 16;

    /// Returns the encoded length of this image's record in bytes:
    /// the fixed header plus `width * height` 4-byte pixel elements.
    ///
    /// Computed from the declared dimensions, not from `pixels.len()`.
    #[must_use]
    pub fn record_len(&self) -> usize {
        Self::HEADER_LEN + self.width as usize * self.height as usize * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_len() {
        let pixels = [0u32; 6];
        let image = ImageView {
            width: 3,
            height: 2,
            format: 1,
            fov: 90.0,
            pixels: &pixels,
        };
        // (4 header fields + 6 pixels) * 4 bytes.
        assert_eq!(image.record_len(), 40);
    }

    #[test]
    fn test_record_len_zero_sized() {
        let image = ImageView {
            width: 0,
            height: 0,
            format: 7,
            fov: 45.0,
            pixels: &[],
        };
        assert_eq!(image.record_len(), ImageView::HEADER_LEN);
    }

    #[test]
    fn test_record_len_uses_declared_dimensions() {
        // record_len follows width * height even when the pixel slice
        // disagrees; the mismatch is the encoder's debug assertion to catch.
        let pixels = [0u32; 2];
        let image = ImageView {
            width: 4,
            height: 4,
            format: 0,
            fov: 0.0,
            pixels: &pixels,
        };
        assert_eq!(image.record_len(), ImageView::HEADER_LEN + 64);
    }
}
