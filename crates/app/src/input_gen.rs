//! Sample input generation for demo runs.
//!
//! When no input file is specified, the tool generates data with a
//! skewed byte distribution so the compression behavior is visible in
//! the metrics: Huffman coding wins exactly when some symbols are much
//! more common than others.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample data with mixed compressibility.
///
/// Roughly: 40% runs of a single byte, 30% text-like data over a small
/// alphabet, 20% repeating short patterns, 10% incompressible noise.
/// Deterministic for a given seed and size.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(4096);
        match rng.gen_range(0..10u8) {
            0..=3 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(section));
            }
            4..=6 => {
                let alphabet = b"etaoin shrdlu.,\n";
                for _ in 0..section {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            7..=8 => {
                let pattern: Vec<u8> = (0..rng.gen_range(4..=24)).map(|_| rng.gen()).collect();
                for i in 0..section {
                    data.push(pattern[i % pattern.len()]);
                }
            }
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}
