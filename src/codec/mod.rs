//! Codec handling and the decode callback seam
//!
//! The decoding engine itself is external (Symphonia); this module defines
//! the data that crosses the boundary: the stream parameters discovered from
//! metadata, the per-block sample payload, and the sink interface the driver
//! invokes as decoding progresses.

pub mod flac;

pub use flac::FlacDecoder;

use crate::error::{Error, Result};

/// Audio stream parameters extracted from the stream-info metadata
///
/// Populated exactly once per conversion, before the first decoded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u32,
    /// Bits per sample
    pub bits_per_sample: u32,
    /// Total samples per channel, 0 when the stream info does not carry one
    pub total_samples: u64,
}

impl AudioFormat {
    /// Get bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> u32 {
        self.bits_per_sample / 8
    }

    /// Total PCM payload size in bytes for the whole stream
    pub fn total_data_bytes(&self) -> u64 {
        self.total_samples * self.channels as u64 * self.bytes_per_sample() as u64
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.total_samples as f64 / self.sample_rate as f64
    }
}

/// One decoded block of audio
///
/// Holds one plane of signed samples per channel. Blocks are ephemeral: the
/// driver builds one per packet and the sink only borrows it for the duration
/// of the callback.
#[derive(Debug, Clone)]
pub struct DecodedBlock {
    /// Sample offset of the first sample in this block
    pub first_sample: u64,
    /// Decoded samples, one inner vector per channel
    pub planes: Vec<Vec<i32>>,
}

impl DecodedBlock {
    /// Whether this is the opening block of the stream
    pub fn is_first(&self) -> bool {
        self.first_sample == 0
    }

    /// Number of samples per channel in this block
    pub fn sample_count(&self) -> usize {
        self.planes.first().map_or(0, Vec::len)
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.planes.len()
    }

    /// Get one channel's samples
    pub fn channel(&self, index: usize) -> Option<&[i32]> {
        self.planes.get(index).map(Vec::as_slice)
    }
}

/// Sink for decode events
///
/// The driver calls into the sink synchronously: one metadata notification
/// before the first block, one notification per decoded block in increasing
/// sample-offset order, and error notifications as the engine reports them.
/// Returning `Err` from `on_metadata` or `on_block` aborts the run;
/// `on_error` is a notification only, the driver decides whether to continue.
pub trait DecodeSink {
    /// Stream parameters became known
    fn on_metadata(&mut self, format: &AudioFormat) -> Result<()>;

    /// A block of audio was decoded
    fn on_block(&mut self, block: &DecodedBlock) -> Result<()>;

    /// The engine reported a decode problem
    fn on_error(&mut self, error: &Error);
}
