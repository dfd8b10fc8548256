//! Audio decoding using Symphonia
//!
//! Decodes a recorded clip (WAV from the recorder is the primary case, but
//! any format Symphonia probes is accepted) into mono `f32` samples in
//! [-1.0, 1.0] plus the stream's sample rate. Multi-channel audio is mixed
//! down with [`crate::preprocessing::channel_mixer`].

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;
use crate::preprocessing::channel_mixer::downmix_interleaved;

/// Decoded audio clip, mixed down to mono
#[derive(Debug, Clone)]
pub struct DecodedClip {
    /// Mono samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedClip {
    /// Clip duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Decode an audio file to mono PCM samples
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// `DecodedClip` with mono samples and the sample rate
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be opened,
/// probed, or decoded, or if it contains no audio
pub fn decode_file(path: &Path) -> Result<DecodedClip, AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("failed to open {}: {}", path.display(), e))
    })?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::DecodingError(format!("unrecognized audio format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::DecodingError("no supported audio track found".to_string())
        })?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodingError(format!("unsupported codec: {}", e)))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut channels = 0usize;
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream (or unrecoverable read error past the payload).
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    channels = spec.channels.count();
                    sample_buf = Some(SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(err)) => {
                // Corrupt packet: skip it and keep decoding the rest.
                log::warn!("skipping undecodable packet in {}: {}", path.display(), err);
            }
            Err(err) => {
                return Err(AnalysisError::DecodingError(format!(
                    "decode failed: {}",
                    err
                )));
            }
        }
    }

    if interleaved.is_empty() || channels == 0 {
        return Err(AnalysisError::DecodingError(format!(
            "{} contains no decodable audio",
            path.display()
        )));
    }

    let samples = downmix_interleaved(&interleaved, channels)?;

    log::debug!(
        "Decoded {}: {} mono samples at {} Hz ({} channels in source)",
        path.display(),
        samples.len(),
        sample_rate,
        channels
    );

    Ok(DecodedClip {
        samples,
        sample_rate,
    })
}
