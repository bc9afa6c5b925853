//! FLAC stream decoding
//!
//! FLAC (Free Lossless Audio Codec) is an open-source lossless audio codec.
//! Decoding is handled by Symphonia; this module owns the decode lifecycle
//! and drives a [`DecodeSink`](crate::codec::DecodeSink) with the results.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flac2wav::codec::FlacDecoder;
//!
//! let mut decoder = FlacDecoder::open(Path::new("input.flac"))?;
//! decoder.run(&mut sink)?;
//! ```

pub mod decoder;

pub use decoder::FlacDecoder;
