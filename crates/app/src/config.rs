//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults. The tool works with ZERO arguments: it generates a seeded
//! sample file, compresses it, and reports the result.

use std::path::PathBuf;

/// Which direction the tool runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path (None = generate sample data)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Compress or decompress
    pub mode: Mode,

    /// Diagnostic verbosity level (0 quiet, 1+ low, 4+ high)
    pub debug_level: u8,

    /// Seed for sample-data generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub gen_bytes: usize,

    /// Whether to print a metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Without `--seed`, sample generation uses a time-based seed; the
    /// resolved seed is printed so runs are reproducible.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut mode = Mode::Compress;
        let mut debug_level: u8 = 0;
        let mut seed: Option<u64> = None;
        let mut gen_bytes: usize = 65536;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--decompress" | "-d" => {
                    mode = Mode::Decompress;
                }
                "--debug" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--debug requires a level".to_string());
                    }
                    debug_level = args[i].parse().map_err(|_| "invalid debug level")?;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--gen-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen-bytes requires a number".to_string());
                    }
                    gen_bytes = args[i].parse().map_err(|_| "invalid gen-bytes")?;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("--decompress requires --in".to_string());
        }

        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        let output_file = output_file.unwrap_or_else(|| match mode {
            Mode::Compress => PathBuf::from("./out.huff"),
            Mode::Decompress => PathBuf::from("./out.bin"),
        });

        Ok(Config {
            input_file,
            output_file,
            mode,
            debug_level,
            seed,
            gen_bytes,
            print_metrics,
        })
    }
}

fn print_help() {
    println!("huffpack: Huffman compression with a self-describing header");
    println!();
    println!("USAGE:");
    println!("    huffpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>         Input file (default: generate sample)");
    println!("    --out <PATH>        Output file (default: ./out.huff or ./out.bin)");
    println!("    --decompress, -d    Decompress instead of compress");
    println!();
    println!("    --seed <N>          Seed for sample generation");
    println!("    --gen-bytes <N>     Generated sample size (default: 65536)");
    println!();
    println!("    --debug <N>         Diagnostic verbosity (0 quiet, 1 low, 4 high)");
    println!("    --no-metrics        Don't print the metrics summary");
    println!("    --help, -h          Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                              # Compress a generated sample");
    println!("    huffpack --in file.bin --out f.huff   # Compress a file");
    println!("    huffpack -d --in f.huff --out file    # Decompress it");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.mode, Mode::Compress);
        assert!(config.input_file.is_none());
        assert_eq!(config.output_file, PathBuf::from("./out.huff"));
        assert!(config.print_metrics);
    }

    #[test]
    fn test_decompress_requires_input() {
        assert!(Config::from_args(&args(&["-d"])).is_err());

        let config = Config::from_args(&args(&["-d", "--in", "x.huff"])).unwrap();
        assert_eq!(config.mode, Mode::Decompress);
        assert_eq!(config.output_file, PathBuf::from("./out.bin"));
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_seed_and_debug() {
        let config = Config::from_args(&args(&["--seed", "42", "--debug", "4"])).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.debug_level, 4);
    }
}
