//! WAV header computation and serialization

use super::{DATA_CHUNK, FMT_CHUNK, HEADER_SIZE, RIFF_MAGIC, RIFF_OVERHEAD, WAVE_MAGIC};
use crate::codec::AudioFormat;
use crate::error::{Error, Result};

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Build the PCM format chunk for the given stream parameters
    pub fn pcm(format: &AudioFormat) -> Self {
        let channels = format.channels as u16;
        let block_align = channels * format.bytes_per_sample() as u16;
        WavFormat {
            format_tag: FormatTag::Pcm,
            channels,
            sample_rate: format.sample_rate,
            byte_rate: format.sample_rate * block_align as u32,
            block_align,
            bits_per_sample: format.bits_per_sample as u16,
        }
    }

    /// Convert to bytes for writing
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..2].copy_from_slice(&u16::from(self.format_tag).to_le_bytes());
        bytes[2..4].copy_from_slice(&self.channels.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes
    }
}

/// Complete canonical WAV file header
///
/// Derived deterministically from [`AudioFormat`]: computed once when the
/// first block arrives, written once, never patched afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// WAV format information
    pub format: WavFormat,
    /// Data chunk size in bytes
    pub data_size: u32,
    /// RIFF chunk size (data size + header overhead)
    pub riff_size: u32,
}

impl WavHeader {
    /// Build the header for an 8-bit mono PCM stream
    ///
    /// Enforces the serializer policy: mono, 8 bits per sample, a known
    /// nonzero total sample count, and a payload that fits the u32 size
    /// fields of the RIFF container. Violations are fatal format errors.
    pub fn for_stream(format: &AudioFormat) -> Result<Self> {
        if format.total_samples == 0 {
            return Err(Error::unsupported(
                "total sample count missing from stream info",
            ));
        }
        if format.channels != 1 {
            return Err(Error::unsupported(format!(
                "only mono streams are supported, got {} channels",
                format.channels
            )));
        }
        if format.bits_per_sample != 8 {
            return Err(Error::unsupported(format!(
                "only 8-bit streams are supported, got {} bits per sample",
                format.bits_per_sample
            )));
        }

        let data_bytes = format.total_data_bytes();
        if data_bytes > (u32::MAX - RIFF_OVERHEAD) as u64 {
            return Err(Error::unsupported(format!(
                "PCM payload of {} bytes exceeds the WAV size limit",
                data_bytes
            )));
        }

        let data_size = data_bytes as u32;
        Ok(WavHeader {
            format: WavFormat::pcm(format),
            data_size,
            riff_size: data_size + RIFF_OVERHEAD,
        })
    }

    /// Serialize the canonical 44-byte header
    ///
    /// All multi-byte fields are little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(RIFF_MAGIC);
        bytes[4..8].copy_from_slice(&self.riff_size.to_le_bytes());
        bytes[8..12].copy_from_slice(WAVE_MAGIC);
        bytes[12..16].copy_from_slice(FMT_CHUNK);
        bytes[16..20].copy_from_slice(&16u32.to_le_bytes());
        bytes[20..36].copy_from_slice(&self.format.to_bytes());
        bytes[36..40].copy_from_slice(DATA_CHUNK);
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }
}
