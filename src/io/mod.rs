//! Audio I/O: file decoding and frame iteration

pub mod decoder;
pub mod sample_buffer;

pub use decoder::{decode_file, DecodedClip};
pub use sample_buffer::{frame_count, frames, Frames};
