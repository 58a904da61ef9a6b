//! Buffer traits and the grow-only frame buffer.
//!
//! This module provides:
//! - [`ReadBuffer`] trait for read-only buffer access
//! - [`WriteBuffer`] trait for read-write buffer access
//! - [`FrameBuffer`], a reusable allocation that grows but never shrinks

use crate::error::{Error, Result};

/// Trait for read-only buffer access with fixed-width primitive reads.
///
/// All multi-byte reads use little-endian byte order.
pub trait ReadBuffer {
    /// Returns the buffer as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Returns true if the buffer is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a u32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u32_le(&self, offset: usize) -> u32 {
        let bytes = &self.as_slice()[offset..offset + 4];
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Reads an f32 at the given offset as its raw little-endian bit pattern.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_f32_le(&self, offset: usize) -> f32 {
        f32::from_bits(self.get_u32_le(offset))
    }

    /// Returns a slice of bytes at the given offset and length.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to start from
    /// * `len` - Number of bytes to read
    #[inline(always)]
    fn get_bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.as_slice()[offset..offset + len]
    }
}

/// Trait for read-write buffer access with fixed-width primitive writes.
///
/// All multi-byte writes use little-endian byte order.
pub trait WriteBuffer: ReadBuffer {
    /// Returns the buffer as a mutable byte slice.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Writes a u32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u32_le(&mut self, offset: usize, value: u32) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 4].copy_from_slice(&bytes);
    }

    /// Writes an f32 at the given offset as its raw little-endian bit pattern.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_f32_le(&mut self, offset: usize, value: f32) {
        self.put_u32_le(offset, value.to_bits());
    }

    /// Writes a byte slice at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `src` - Source bytes to copy
    #[inline(always)]
    fn put_bytes(&mut self, offset: usize, src: &[u8]) {
        self.as_mut_slice()[offset..offset + src.len()].copy_from_slice(src);
    }
}

/// Implement ReadBuffer for byte slices.
impl ReadBuffer for [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

/// Implement ReadBuffer for `Vec<u8>`.
impl ReadBuffer for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Implement WriteBuffer for `Vec<u8>`.
impl WriteBuffer for Vec<u8> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

/// Reusable message buffer that grows on demand and never shrinks.
///
/// The buffer tracks two sizes: the allocated `capacity` and the logical
/// `len` of the most recent message. [`FrameBuffer::reset`] reallocates only
/// when the requested length exceeds the current capacity; otherwise the
/// existing allocation is reused as-is, without zeroing. Bytes between `len`
/// and `capacity` are leftovers from earlier messages and must not be read.
///
/// This trades peak memory for zero reallocation on repeated same-shaped
/// messages, the steady state of a per-frame encode loop.
#[derive(Default)]
pub struct FrameBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl FrameBuffer {
    /// Creates an empty frame buffer. No allocation happens until the first
    /// call to [`FrameBuffer::reset`] with a non-zero length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the allocated size in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Prepares the buffer to hold `total_len` bytes.
    ///
    /// Grows the allocation to exactly `total_len` bytes if the current
    /// capacity is smaller, replacing the previous allocation. A capacity
    /// that already suffices is kept unchanged. In both cases the logical
    /// length becomes `total_len`.
    ///
    /// # Arguments
    /// * `total_len` - Required message length in bytes
    ///
    /// # Errors
    /// Returns [`Error::Allocation`] if the allocator cannot satisfy the
    /// growth request. The previous allocation and logical length are left
    /// untouched in that case.
    pub fn reset(&mut self, total_len: usize) -> Result<()> {
        if self.data.len() < total_len {
            tracing::debug!(bytes = total_len, "allocating frame buffer");
            let mut grown = Vec::new();
            grown
                .try_reserve_exact(total_len)
                .map_err(|_| Error::Allocation {
                    requested: total_len,
                })?;
            grown.resize(total_len, 0);
            self.data = grown.into_boxed_slice();
        }
        self.len = total_len;
        Ok(())
    }
}

impl ReadBuffer for FrameBuffer {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl WriteBuffer for FrameBuffer {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("capacity", &self.data.len())
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_primitives() {
        let mut buf = vec![0u8; 16];

        buf.put_u32_le(0, 0x12345678);
        assert_eq!(buf.get_u32_le(0), 0x12345678);

        buf.put_f32_le(4, 90.0);
        assert_eq!(buf.get_f32_le(4).to_bits(), 90.0f32.to_bits());

        buf.put_bytes(8, b"wire");
        assert_eq!(buf.get_bytes(8, 4), b"wire");
    }

    #[test]
    fn test_u32_wire_order() {
        let mut buf = vec![0u8; 4];
        buf.put_u32_le(0, 0x01020304);
        assert_eq!(&buf[..], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_f32_bit_exact() {
        let mut buf = vec![0u8; 4];
        buf.put_f32_le(0, f32::NAN);
        assert_eq!(buf.get_f32_le(0).to_bits(), f32::NAN.to_bits());
    }

    #[test]
    fn test_slice_read_buffer() {
        let data: &[u8] = &[0x78, 0x56, 0x34, 0x12];
        assert_eq!(data.get_u32_le(0), 0x12345678);
        assert_eq!(ReadBuffer::len(data), 4);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_frame_buffer_starts_empty() {
        let buf = FrameBuffer::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_frame_buffer_grows_to_exact_size() {
        let mut buf = FrameBuffer::new();
        buf.reset(64).expect("growth should succeed");
        assert_eq!(buf.capacity(), 64);
        assert_eq!(buf.len(), 64);
    }

    #[test]
    fn test_frame_buffer_never_shrinks() {
        let mut buf = FrameBuffer::new();
        buf.reset(128).expect("growth should succeed");
        let ptr = buf.as_slice().as_ptr();

        buf.reset(16).expect("reuse should succeed");
        assert_eq!(buf.capacity(), 128);
        assert_eq!(buf.len(), 16);
        assert_eq!(buf.as_slice().as_ptr(), ptr, "reuse must not reallocate");
    }

    #[test]
    fn test_frame_buffer_reuse_keeps_contents() {
        let mut buf = FrameBuffer::new();
        buf.reset(8).expect("growth should succeed");
        buf.put_u32_le(0, 0xDEADBEEF);

        buf.reset(8).expect("reuse should succeed");
        assert_eq!(buf.get_u32_le(0), 0xDEADBEEF);
    }

    #[test]
    fn test_frame_buffer_slice_covers_logical_len_only() {
        let mut buf = FrameBuffer::new();
        buf.reset(32).expect("growth should succeed");
        buf.reset(12).expect("reuse should succeed");
        assert_eq!(buf.as_slice().len(), 12);
        assert_eq!(buf.as_mut_slice().len(), 12);
    }

    #[test]
    fn test_frame_buffer_zero_len_reset() {
        let mut buf = FrameBuffer::new();
        buf.reset(0).expect("zero reset should succeed");
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_frame_buffer_debug() {
        let mut buf = FrameBuffer::new();
        buf.reset(24).expect("growth should succeed");
        let debug_str = format!("{:?}", buf);
        assert!(debug_str.contains("FrameBuffer"));
        assert!(debug_str.contains("24"));
    }
}
