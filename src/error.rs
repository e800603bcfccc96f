use thiserror::Error;

/// Failures the core can produce. All of them are deterministic validation
/// errors; nothing in here is retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Zero width/height, or a data length that disagrees with the dimensions.
    #[error("invalid image: width={width} height={height} data_len={data_len}")]
    InvalidImage {
        width: u32,
        height: u32,
        data_len: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The mask must carry exactly one value per pixel; a mismatched mask is
    /// rejected wholesale, never applied to a prefix.
    #[error("mask has {got} values but the image has {expected} pixels")]
    MaskSizeMismatch { expected: usize, got: usize },
}
