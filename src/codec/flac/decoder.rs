//! FLAC decode driver using Symphonia

use crate::codec::{AudioFormat, DecodeSink, DecodedBlock};
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

/// FLAC decode driver
///
/// Owns the Symphonia format reader and packet decoder for one input stream
/// and runs them to completion, pushing decode events into a sink. The FLAC
/// decoding algorithm itself belongs to Symphonia; this type only sequences
/// the lifecycle: probe, track selection, packet loop.
pub struct FlacDecoder {
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    format: AudioFormat,
}

impl FlacDecoder {
    /// Open and probe a FLAC file
    ///
    /// Selects the first decodable audio track and captures its stream-info
    /// parameters. An unreadable path is an IO error; a stream Symphonia
    /// cannot probe or decode is an initialization error.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

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
            .map_err(|e| Error::init(format!("failed to probe input: {}", e)))?;

        let reader = probed.format;

        let track = reader
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| Error::init("no decodable audio track found"))?;

        let track_id = track.id;
        let params = track.codec_params.clone();

        let sample_rate = params
            .sample_rate
            .ok_or_else(|| Error::init("stream info missing sample rate"))?;
        let format = AudioFormat {
            sample_rate,
            channels: params.channels.map(|c| c.count() as u32).unwrap_or(0),
            bits_per_sample: params.bits_per_sample.unwrap_or(0),
            total_samples: params.n_frames.unwrap_or(0),
        };

        let decoder = symphonia::default::get_codecs()
            .make(&params, &DecoderOptions::default())
            .map_err(|e| Error::init(format!("unsupported codec: {}", e)))?;

        Ok(FlacDecoder {
            reader,
            decoder,
            track_id,
            format,
        })
    }

    /// Stream parameters discovered at open time
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    /// Decode to completion, driving the sink callbacks
    ///
    /// Fires `on_metadata` once, then `on_block` per decoded packet in
    /// increasing sample-offset order. Corrupt packets are reported through
    /// `on_error` and skipped; fatal engine errors are reported and abort the
    /// run. An `Err` returned by the sink aborts immediately.
    pub fn run(&mut self, sink: &mut dyn DecodeSink) -> Result<()> {
        sink.on_metadata(&self.format)?;

        loop {
            let packet = match self.reader.next_packet() {
                Ok(packet) => packet,
                Err(e) => match map_read_error(e) {
                    Error::EndOfStream => break,
                    err => {
                        sink.on_error(&err);
                        return Err(err);
                    }
                },
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let first_sample = packet.ts();
            let decoded = match self.decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(msg)) => {
                    // Recoverable: report the damaged packet and keep going
                    let err = Error::stream(format!("corrupt packet skipped: {}", msg));
                    sink.on_error(&err);
                    continue;
                }
                Err(e) => {
                    let err = Error::stream(format!("failed to decode packet: {}", e));
                    sink.on_error(&err);
                    return Err(err);
                }
            };

            let block = block_from_buffer(first_sample, self.format.bits_per_sample, &decoded)?;
            debug!(
                first_sample,
                samples = block.sample_count(),
                "decoded block"
            );
            sink.on_block(&block)?;
        }

        Ok(())
    }
}

/// Map a packet-read error to ours, folding end-of-stream conditions
fn map_read_error(err: SymphoniaError) -> Error {
    match err {
        SymphoniaError::IoError(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            Error::EndOfStream
        }
        SymphoniaError::ResetRequired => Error::EndOfStream,
        e => Error::stream(format!("failed to read packet: {}", e)),
    }
}

/// Collect a decoded sample buffer into per-channel i32 planes
///
/// Symphonia scales decoded samples up to the full range of the buffer's
/// sample type; the planes handed to the sink carry them back at the
/// stream's native bit depth, the way the bitstream stores them.
fn block_from_buffer(
    first_sample: u64,
    bits_per_sample: u32,
    buffer: &AudioBufferRef<'_>,
) -> Result<DecodedBlock> {
    let planes: Vec<Vec<i32>> = match buffer {
        AudioBufferRef::S8(buf) => {
            let shift = native_shift(8, bits_per_sample);
            (0..buf.spec().channels.count())
                .map(|ch| buf.chan(ch).iter().map(|&s| (s >> shift) as i32).collect())
                .collect()
        }
        AudioBufferRef::S16(buf) => {
            let shift = native_shift(16, bits_per_sample);
            (0..buf.spec().channels.count())
                .map(|ch| buf.chan(ch).iter().map(|&s| (s >> shift) as i32).collect())
                .collect()
        }
        AudioBufferRef::S32(buf) => {
            let shift = native_shift(32, bits_per_sample);
            (0..buf.spec().channels.count())
                .map(|ch| buf.chan(ch).iter().map(|&s| s >> shift).collect())
                .collect()
        }
        _ => {
            return Err(Error::unsupported(
                "decoded sample format is not a signed integer format",
            ))
        }
    };

    Ok(DecodedBlock {
        first_sample,
        planes,
    })
}

/// Right-shift that undoes the full-range scaling for a buffer of `width` bits
fn native_shift(width: u32, bits_per_sample: u32) -> u32 {
    if bits_per_sample == 0 || bits_per_sample > width {
        0
    } else {
        width - bits_per_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_missing_file() {
        let result = FlacDecoder::open(Path::new("/nonexistent/input.flac"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_native_shift() {
        assert_eq!(native_shift(32, 8), 24);
        assert_eq!(native_shift(32, 16), 16);
        assert_eq!(native_shift(16, 16), 0);
        // Unknown or implausible depths are passed through unshifted
        assert_eq!(native_shift(32, 0), 0);
        assert_eq!(native_shift(16, 24), 0);
    }

    #[test]
    fn test_map_read_error_end_of_stream() {
        let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(
            map_read_error(SymphoniaError::IoError(eof)),
            Error::EndOfStream
        ));
        assert!(matches!(
            map_read_error(SymphoniaError::ResetRequired),
            Error::EndOfStream
        ));
    }
}
