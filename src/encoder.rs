//! Per-frame image batch encoder.
//!
//! Packs an ordered sequence of [`ImageView`]s into one flat,
//! length-prefixed message.
//!
//! # Wire Format
//! ```text
//! message    := u32(body_len) record*
//! record     := u32(width) u32(height) u32(format) f32(fov) pixel_data
//! pixel_data := u32[width * height]
//! ```
//! All integers are little-endian; `fov` is a raw IEEE-754 bit pattern.
//! `body_len` is the total byte length of the concatenated records and
//! excludes the 4-byte prefix itself.

use crate::buffer::{FrameBuffer, ReadBuffer, WriteBuffer};
use crate::error::Result;
use crate::image::ImageView;

/// Byte length of the outer message length prefix.
pub const PREFIX_LEN: usize = 4;

/// Stateful encoder for per-frame image batches.
///
/// The encoder owns a single [`FrameBuffer`] that is reused across calls:
/// encoding a frame no larger than a previous one performs no allocation.
/// One instance serves one frame-production thread; there is no internal
/// synchronization.
///
/// # Example
/// ```
/// use framewire::{ImageBatchEncoder, ImageView};
///
/// let pixels = [0x11111111u32, 0x22222222];
/// let images = [ImageView {
///     width: 2,
///     height: 1,
///     format: 5,
///     fov: 90.0,
///     pixels: &pixels,
/// }];
///
/// let mut encoder = ImageBatchEncoder::new();
/// let message = encoder.encode(&images)?;
/// assert_eq!(message.len(), 28);
/// # Ok::<(), framewire::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ImageBatchEncoder {
    buffer: FrameBuffer,
}

impl ImageBatchEncoder {
    /// Creates an encoder with no allocation. The buffer is allocated on
    /// the first encode whose message does not fit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the encoded body length in bytes for a batch of images,
    /// excluding the outer length prefix.
    #[must_use]
    pub fn body_len(images: &[ImageView<'_>]) -> usize {
        images.iter().map(ImageView::record_len).sum()
    }

    /// Encodes a batch of images into one length-prefixed message and
    /// returns a view of the encoded bytes.
    ///
    /// Records are written in input order. The returned slice borrows the
    /// encoder's internal buffer and stays valid until the next call; the
    /// borrow checker enforces that a previous message is released (e.g.
    /// handed to the transport) before the next frame is encoded.
    ///
    /// An empty batch is valid and produces a 4-byte message with a zero
    /// prefix.
    ///
    /// # Arguments
    /// * `images` - Ordered batch of image descriptors for this frame
    ///
    /// # Errors
    /// Returns [`Error::Allocation`](crate::Error::Allocation) if buffer
    /// growth fails. No partial message is produced.
    pub fn encode(&mut self, images: &[ImageView<'_>]) -> Result<&[u8]> {
        let body_len = Self::body_len(images);
        self.buffer.reset(PREFIX_LEN + body_len)?;

        self.buffer.put_u32_le(0, body_len as u32);
        let mut offset = PREFIX_LEN;
        for image in images {
            debug_assert_eq!(
                image.pixels.len(),
                image.width as usize * image.height as usize,
                "pixel slice length must equal width * height"
            );
            self.buffer.put_u32_le(offset, image.width);
            self.buffer.put_u32_le(offset + 4, image.height);
            self.buffer.put_u32_le(offset + 8, image.format);
            self.buffer.put_f32_le(offset + 12, image.fov);
            offset += ImageView::HEADER_LEN;
            for &pixel in image.pixels {
                self.buffer.put_u32_le(offset, pixel);
                offset += 4;
            }
        }
        debug_assert_eq!(offset, self.buffer.len());

        Ok(self.buffer.as_slice())
    }

    /// Returns the length in bytes of the most recently encoded message.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the bytes currently allocated by the internal buffer.
    /// Never decreases across encodes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
