//! WAV audio format support
//!
//! This module implements canonical RIFF/WAV file writing. The header is
//! computed analytically from the stream parameters before any PCM byte is
//! emitted, so the writer never seeks back to patch size fields.

pub mod header;
pub mod writer;

pub use header::{FormatTag, WavFormat, WavHeader};
pub use writer::WavWriter;

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the canonical PCM WAVE header in bytes
pub const HEADER_SIZE: usize = 44;

/// RIFF chunk bytes preceding the PCM payload ("WAVE" + fmt chunk + data chunk header)
pub const RIFF_OVERHEAD: u32 = 36;
