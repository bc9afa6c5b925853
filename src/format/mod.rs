//! Container format handling (muxing)
//!
//! The only container this crate writes is RIFF/WAV; the decode side reads
//! FLAC through the codec module.

pub mod wav;

pub use wav::{WavHeader, WavWriter};
