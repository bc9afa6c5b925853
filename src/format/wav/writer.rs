//! Streaming WAV writer
//!
//! Consumes decode callbacks and serializes a byte-exact RIFF/WAV file in a
//! single pass. The total sample count is known from the stream info before
//! any audio arrives, so the header is written ahead of the first block's
//! payload and no backpatching ever happens.

use super::header::WavHeader;
use super::HEADER_SIZE;
use crate::codec::{AudioFormat, DecodeSink, DecodedBlock};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Writer lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Output open, header not yet written
    HeaderPending,
    /// Header written, PCM payload streaming
    Streaming,
    /// Stream complete, output closed
    Done,
    /// Aborted on error, output closed
    Failed,
}

/// Streaming RIFF/WAV serializer
///
/// Implements [`DecodeSink`] over one decoder run. The stream parameters are
/// captured from the metadata callback; the first decoded block triggers
/// validation and header emission, and every block appends its channel-0
/// payload. The output handle is released on entry to either terminal state,
/// and by drop on every other exit path.
pub struct WavWriter {
    writer: Option<BufWriter<File>>,
    format: Option<AudioFormat>,
    state: WriterState,
    samples_written: u64,
}

impl WavWriter {
    /// Open `path` for writing (binary, truncate-create)
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(WavWriter {
            writer: Some(BufWriter::new(file)),
            format: None,
            state: WriterState::HeaderPending,
            samples_written: 0,
        })
    }

    /// Samples written so far
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Output bytes produced (header plus payload), 0 before the header goes out
    pub fn bytes_written(&self) -> u64 {
        match self.state {
            WriterState::Streaming | WriterState::Done => {
                HEADER_SIZE as u64 + self.samples_written
            }
            _ => 0,
        }
    }

    /// Flush and close after a completed run
    ///
    /// Fails if the stream ended before the header went out or before every
    /// sample promised by the stream info was written.
    pub fn finish(&mut self) -> Result<()> {
        match self.state {
            WriterState::Streaming => {}
            WriterState::HeaderPending => {
                // A run that never produced a block: surface the format
                // rejection if the parameters were unsupported, otherwise
                // the stream was simply empty
                let err = match self.format {
                    Some(format) => WavHeader::for_stream(&format)
                        .err()
                        .unwrap_or_else(|| Error::stream("stream ended before any audio block")),
                    None => Error::format("stream info never arrived"),
                };
                return self.fail(err);
            }
            _ => return self.fail(Error::invalid_state("writer already finalized")),
        }

        let expected = self.format.map(|f| f.total_samples).unwrap_or(0);
        if self.samples_written != expected {
            return self.fail(Error::stream(format!(
                "stream ended after {} of {} samples",
                self.samples_written, expected
            )));
        }

        if let Err(e) = self.writer()?.flush() {
            return self.fail(Error::Io(e));
        }

        self.state = WriterState::Done;
        self.writer = None;
        Ok(())
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| Error::invalid_state("output already closed"))
    }

    /// Enter the terminal failure state, closing the output
    fn fail<T>(&mut self, err: Error) -> Result<T> {
        self.state = WriterState::Failed;
        self.writer = None;
        Err(err)
    }
}

impl DecodeSink for WavWriter {
    fn on_metadata(&mut self, format: &AudioFormat) -> Result<()> {
        // First stream info wins; later metadata never reshapes the header
        if self.format.is_none() {
            info!(
                sample_rate = format.sample_rate,
                channels = format.channels,
                bits_per_sample = format.bits_per_sample,
                total_samples = format.total_samples,
                "stream info"
            );
            self.format = Some(*format);
        }
        Ok(())
    }

    fn on_block(&mut self, block: &DecodedBlock) -> Result<()> {
        match self.state {
            WriterState::HeaderPending | WriterState::Streaming => {}
            _ => return self.fail(Error::invalid_state("block after writer was finalized")),
        }

        if self.state == WriterState::HeaderPending {
            if !block.is_first() {
                return self.fail(Error::format("stream does not start at sample zero"));
            }
            let format = match self.format {
                Some(format) => format,
                None => return self.fail(Error::format("no stream info before first block")),
            };
            // Validation happens here, before a single byte goes out: a
            // rejected stream leaves an empty file
            let header = match WavHeader::for_stream(&format) {
                Ok(header) => header,
                Err(e) => return self.fail(e),
            };
            if let Err(e) = self.writer()?.write_all(&header.to_bytes()) {
                return self.fail(Error::Io(e));
            }
            self.state = WriterState::Streaming;
        }

        let samples = match block.channel(0) {
            Some(samples) => samples,
            None => return self.fail(Error::format("decoded block carries no channels")),
        };

        // 8-bit WAV payload is unsigned; flip the sign bit of each signed sample
        let payload: Vec<u8> = samples.iter().map(|&s| (s as u8) ^ 0x80).collect();
        if let Err(e) = self.writer()?.write_all(&payload) {
            return self.fail(Error::Io(e));
        }
        self.samples_written += samples.len() as u64;

        Ok(())
    }

    fn on_error(&mut self, error: &Error) {
        warn!("decoder reported: {}", error);
    }
}
