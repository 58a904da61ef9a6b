//! # framewire
//!
//! Length-prefixed binary encoding of simulation frame image batches.
//!
//! This crate provides:
//! - [`ImageBatchEncoder`] for packing per-frame image batches into one
//!   flat, self-describing message, reusing its allocation across frames
//! - [`ImageView`] as the borrowed image descriptor consumed by the encoder
//! - Buffer traits for fixed-width little-endian read/write operations
//! - Error types for encoding operations
//!
//! The encoder is write-only by design; the wire format documented in
//! [`encoder`] is precise enough for a receiver to derive a decoder from it.

pub mod buffer;
pub mod encoder;
pub mod error;
pub mod image;

pub use buffer::{FrameBuffer, ReadBuffer, WriteBuffer};
pub use encoder::{ImageBatchEncoder, PREFIX_LEN};
pub use error::{Error, Result};
pub use image::ImageView;
