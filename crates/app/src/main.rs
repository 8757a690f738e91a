//! huffpack: compress and decompress files with the huffpack-core codec.

mod config;
mod input_gen;

use std::fs;
use std::process::ExitCode;

use huffpack_core::{Codec, CodecMetrics, Verbosity};

use config::{Config, Mode};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    let input = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            println!(
                "No input file; generating {} sample bytes (seed {})",
                config.gen_bytes, config.seed
            );
            input_gen::generate_sample_data(config.seed, config.gen_bytes)
        }
    };

    let codec = Codec::with_verbosity(Verbosity::from_level(config.debug_level));
    let (output, metrics) = match config.mode {
        Mode::Compress => codec.compress_with_metrics(&input)?,
        Mode::Decompress => codec.decompress_with_metrics(&input)?,
    };

    fs::write(&config.output_file, &output)?;

    if config.print_metrics {
        print_summary(config, &metrics);
    }
    Ok(())
}

fn print_summary(config: &Config, metrics: &CodecMetrics) {
    println!("=== Summary ===");
    println!(
        "Mode:   {}",
        match config.mode {
            Mode::Compress => "compress",
            Mode::Decompress => "decompress",
        }
    );
    println!("Output: {}", config.output_file.display());
    println!("Input bytes:  {}", metrics.input_bytes);
    println!("Output bytes: {}", metrics.output_bytes);
    if config.mode == Mode::Compress {
        println!("Header bits:  {}", metrics.header_bits);
        println!("Body bits:    {}", metrics.body_bits);
        if let Some(saving) = metrics.space_saving() {
            println!("Space saving: {:.1}%", saving * 100.0);
        }
    }
}
