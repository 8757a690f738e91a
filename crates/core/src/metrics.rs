//! Byte and bit accounting for one codec operation.
//!
//! Metrics are collected by the `*_with_metrics` entry points and
//! reported to the caller; the codec never reads them back, so they can
//! never influence output bytes.
//!
//! The struct is not thread-safe; operations are single-threaded and
//! each gets its own instance.

/// Accounting for a single compress or decompress call.
#[derive(Debug, Clone, Default)]
pub struct CodecMetrics {
    /// Bytes consumed from the input
    pub input_bytes: u64,

    /// Bytes produced (compressed stream or recovered data)
    pub output_bytes: u64,

    /// Bits spent on the format marker and tree header (compress only)
    pub header_bits: u64,

    /// Bits spent on the body and terminator (compress only)
    pub body_bits: u64,
}

impl CodecMetrics {
    /// Output size as a fraction of input size (lower is better).
    ///
    /// Returns `None` for empty input.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.input_bytes == 0 {
            None
        } else {
            Some(self.output_bytes as f64 / self.input_bytes as f64)
        }
    }

    /// Fraction of input size eliminated, e.g. 0.6 = 60% smaller.
    pub fn space_saving(&self) -> Option<f64> {
        self.compression_ratio().map(|r| 1.0 - r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let metrics = CodecMetrics {
            input_bytes: 1000,
            output_bytes: 250,
            header_bits: 320,
            body_bits: 1680,
        };
        assert_eq!(metrics.compression_ratio(), Some(0.25));
        assert_eq!(metrics.space_saving(), Some(0.75));
    }

    #[test]
    fn test_empty_input_has_no_ratio() {
        let metrics = CodecMetrics {
            input_bytes: 0,
            output_bytes: 40,
            ..Default::default()
        };
        assert_eq!(metrics.compression_ratio(), None);
    }
}
