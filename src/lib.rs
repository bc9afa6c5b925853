//! flac2wav - FLAC to uncompressed WAVE transcoding
//!
//! flac2wav decodes a FLAC bitstream to raw PCM samples and serializes them
//! into a canonical RIFF/WAV container in a single streaming pass.
//!
//! # Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - `codec`: the decode driver (Symphonia-backed) and the callback seam it
//!   drives as metadata and audio blocks arrive
//! - `format`: container writing, which for this crate means the WAV muxer
//! - `convert`: the conversion entry points wiring driver and writer together
//! - `error`: the crate-wide error type
//!
//! The header size fields depend on the total sample count, which is known
//! from the stream info before any audio data is available; the writer
//! exploits this to emit the header analytically ahead of the first block
//! instead of seeking back to patch it.

pub mod codec;
pub mod convert;
pub mod error;
pub mod format;

pub use codec::{AudioFormat, DecodeSink, DecodedBlock, FlacDecoder};
pub use convert::{convert, convert_status, ConversionSummary};
pub use error::{Error, Result};
pub use format::wav::{WavHeader, WavWriter};

/// flac2wav version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the flac2wav library
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize diagnostic logging with the given configuration
pub fn init(config: Config) {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }
}
