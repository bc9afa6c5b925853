//! flac2wav CLI
//!
//! A command-line front end for FLAC to WAVE conversion

use clap::{Parser, Subcommand};
use flac2wav::{convert_status, init, Config, FlacDecoder};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flac2wav")]
#[command(about = "Convert FLAC audio to uncompressed WAVE", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a FLAC file to WAV
    Convert {
        /// Input FLAC path
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show stream parameters of a FLAC file
    Info {
        /// Input FLAC path
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    });

    match cli.command {
        Commands::Convert { input, output } => {
            ExitCode::from(convert_status(&input, &output) as u8)
        }
        Commands::Info { input } => match FlacDecoder::open(&input) {
            Ok(decoder) => {
                let format = decoder.format();
                println!("sample rate    : {} Hz", format.sample_rate);
                println!("channels       : {}", format.channels);
                println!("bits per sample: {}", format.bits_per_sample);
                println!("total samples  : {}", format.total_samples);
                println!("duration       : {:.3} s", format.duration_seconds());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
