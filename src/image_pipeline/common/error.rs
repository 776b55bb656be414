use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Truncated pixel payload: expected {expected} samples, read {read}")]
    TruncatedPayload { expected: usize, read: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to encode EXR image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse failure category, used to pick a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    UnsupportedFormat,
    InvalidArgument,
    Encode,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InputReadError(_)
            | ConversionError::TruncatedPayload { .. }
            | ConversionError::IoError(_) => ErrorKind::Io,
            ConversionError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ConversionError::InvalidArgument(_) | ConversionError::InvalidDimensions(_, _) => {
                ErrorKind::InvalidArgument
            }
            ConversionError::EncodeError(_) => ErrorKind::Encode,
        }
    }
}

impl ErrorKind {
    /// Short name of the kind for log fields.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::UnsupportedFormat => "unsupported-format",
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::Encode => "encode",
        }
    }

    /// Nonzero exit status for this kind. Usage errors (exit 2) are reported by the CLI parser.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Io => 3,
            ErrorKind::UnsupportedFormat => 4,
            ErrorKind::InvalidArgument => 5,
            ErrorKind::Encode => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_distinct_exit_codes() {
        let errors = [
            ConversionError::InputReadError("missing.tga".to_string()),
            ConversionError::UnsupportedFormat("24 bits per pixel".to_string()),
            ConversionError::InvalidArgument("empty path".to_string()),
            ConversionError::EncodeError("disk full".to_string()),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.kind().exit_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 4);
        assert!(codes.iter().all(|&c| c != 0 && c != 2));
    }

    #[test]
    fn test_truncation_is_an_io_failure() {
        let err = ConversionError::TruncatedPayload { expected: 9, read: 4 };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "Truncated pixel payload: expected 9 samples, read 4");
    }

    #[test]
    fn test_zero_dimensions_are_invalid_arguments() {
        assert_eq!(ConversionError::InvalidDimensions(0, 3).kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_writer_argument_errors_are_labelled_by_kind() {
        let empty_path = ConversionError::InvalidArgument("output path is empty".to_string());
        let zero_width = ConversionError::InvalidDimensions(0, 4);
        assert_eq!(empty_path.kind().label(), "invalid-argument");
        assert_eq!(zero_width.kind().label(), "invalid-argument");
        assert_eq!(ConversionError::EncodeError("disk full".to_string()).kind().label(), "encode");
    }
}
