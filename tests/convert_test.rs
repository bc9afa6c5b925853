//! End-to-End Conversion Tests
//!
//! These tests encode real FLAC fixtures in memory with flacenc, run the
//! full conversion pipeline over them, and verify the WAV output byte by
//! byte against the source samples.

use flac2wav::error::Error;
use flac2wav::{convert, convert_status};
use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::error::Verify;
use flacenc::source::MemSource;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

/// Encode interleaved samples into a complete FLAC stream
fn encode_flac(
    samples: &[i32],
    channels: usize,
    bits_per_sample: usize,
    sample_rate: usize,
) -> Vec<u8> {
    let config = flacenc::config::Encoder::default()
        .into_verified()
        .expect("flacenc default config");
    let source = MemSource::from_samples(samples, channels, bits_per_sample, sample_rate);
    let stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
        .expect("flac encoding");

    let mut sink = ByteSink::new();
    stream.write(&mut sink).expect("serialize flac stream");
    sink.as_slice().to_vec()
}

fn write_fixture(dir: &TempDir, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

/// Signed 8-bit test signal with full-scale extremes and a ramp
fn mono8_samples(count: usize) -> Vec<i32> {
    (0..count)
        .map(|i| match i % 4 {
            0 => -128,
            1 => (i % 127) as i32,
            2 => 127,
            _ => -((i % 128) as i32),
        })
        .collect()
}

// ============================================================================
// Successful Conversion
// ============================================================================

#[test]
fn test_converts_8bit_mono_to_wav() {
    let dir = TempDir::new().unwrap();
    let samples = mono8_samples(6000);
    let input = write_fixture(&dir, "in.flac", &encode_flac(&samples, 1, 8, 8000));
    let output = dir.path().join("out.wav");

    let summary = convert(&input, &output).unwrap();
    assert_eq!(summary.format.sample_rate, 8000);
    assert_eq!(summary.format.channels, 1);
    assert_eq!(summary.format.bits_per_sample, 8);
    assert_eq!(summary.format.total_samples, 6000);
    assert_eq!(summary.bytes_written, 44 + 6000);

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 44 + 6000);

    // Header arithmetic
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(
        u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
        6000 + 36
    );
    assert_eq!(&bytes[8..16], b"WAVEfmt ");
    assert_eq!(u32::from_le_bytes(bytes[24..28].try_into().unwrap()), 8000);
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 6000);

    // Round-trip: every payload byte is the source sample with the sign
    // bit flipped
    for (i, &b) in bytes[44..].iter().enumerate() {
        assert_eq!(b, (samples[i] as u8) ^ 0x80, "sample {}", i);
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let samples = mono8_samples(2000);
    let input = write_fixture(&dir, "in.flac", &encode_flac(&samples, 1, 8, 44100));

    let out_a = dir.path().join("a.wav");
    let out_b = dir.path().join("b.wav");
    convert(&input, &out_a).unwrap();
    convert(&input, &out_b).unwrap();

    assert_eq!(fs::read(&out_a).unwrap(), fs::read(&out_b).unwrap());
}

// ============================================================================
// Format Policy Rejections
// ============================================================================

#[test]
fn test_rejects_stereo_input() {
    let dir = TempDir::new().unwrap();
    // Interleaved L/R frames
    let samples: Vec<i32> = (0..4000).map(|i| (i % 200) - 100).collect();
    let input = write_fixture(&dir, "stereo.flac", &encode_flac(&samples, 2, 8, 44100));
    let output = dir.path().join("out.wav");

    let result = convert(&input, &output);
    assert!(matches!(result, Err(Error::Unsupported(_))));

    // Rejected before the header: nothing on disk
    assert_eq!(fs::read(&output).unwrap().len(), 0);
}

#[test]
fn test_rejects_16_bit_input() {
    let dir = TempDir::new().unwrap();
    let samples: Vec<i32> = (0..4000).map(|i| ((i % 2000) - 1000) * 16).collect();
    let input = write_fixture(&dir, "wide.flac", &encode_flac(&samples, 1, 16, 44100));
    let output = dir.path().join("out.wav");

    let result = convert(&input, &output);
    assert!(matches!(result, Err(Error::Unsupported(_))));
    assert_eq!(fs::read(&output).unwrap().len(), 0);
}

// ============================================================================
// Initialization and IO Failures
// ============================================================================

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.wav");
    let result = convert(Path::new("/nonexistent/input.flac"), &output);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_garbage_input_fails_init() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "garbage.flac", &[0x42; 256]);
    let output = dir.path().join("out.wav");

    let result = convert(&input, &output);
    assert!(matches!(result, Err(Error::Init(_))));
}

#[test]
fn test_unwritable_output_fails_before_decoding() {
    let dir = TempDir::new().unwrap();
    let samples = mono8_samples(1000);
    let input = write_fixture(&dir, "in.flac", &encode_flac(&samples, 1, 8, 8000));
    let output = dir.path().join("missing").join("out.wav");

    let result = convert(&input, &output);
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(convert_status(&input, &output), 1);
}

#[test]
fn test_convert_status_contract() {
    let dir = TempDir::new().unwrap();
    let samples = mono8_samples(1000);
    let input = write_fixture(&dir, "in.flac", &encode_flac(&samples, 1, 8, 8000));
    let output = dir.path().join("out.wav");

    assert_eq!(convert_status(&input, &output), 0);
    assert_eq!(convert_status(Path::new("/nonexistent/input.flac"), &output), 1);
}
