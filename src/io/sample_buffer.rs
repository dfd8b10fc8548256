//! Sample windowing utilities
//!
//! All framed features (RMS, spectral centroid, zero-crossing rate) walk the
//! clip with the same frame/hop geometry; this module provides the shared
//! frame iterator so each extractor sees identical windows.

/// Iterator over fixed-size, hop-spaced windows of a sample slice.
///
/// Only complete frames are yielded; a trailing partial frame is dropped.
#[derive(Debug)]
pub struct Frames<'a> {
    samples: &'a [f32],
    frame_size: usize,
    hop_size: usize,
    position: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<&'a [f32]> {
        if self.frame_size == 0 || self.position + self.frame_size > self.samples.len() {
            return None;
        }

        let frame = &self.samples[self.position..self.position + self.frame_size];
        self.position += self.hop_size;
        Some(frame)
    }
}

/// Iterate over analysis frames of `samples`.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono)
/// * `frame_size` - Frame size in samples
/// * `hop_size` - Hop size in samples between frame starts
pub fn frames(samples: &[f32], frame_size: usize, hop_size: usize) -> Frames<'_> {
    Frames {
        samples,
        frame_size,
        // Guard against hop_size = 0 looping forever; callers validate anyway.
        hop_size: hop_size.max(1),
        position: 0,
    }
}

/// Number of complete frames `frames()` will yield for a clip of `len` samples.
pub fn frame_count(len: usize, frame_size: usize, hop_size: usize) -> usize {
    if frame_size == 0 || hop_size == 0 || len < frame_size {
        return 0;
    }
    (len - frame_size) / hop_size + 1
}
