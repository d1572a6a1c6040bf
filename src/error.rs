/*!
Conversion errors.
*/
use std::io;

/**
Classifies why a conversion failed.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was longer than the transcoding service can be told about.
    InputTooLong,
    /// The service rejected the input as malformed for its encoding.
    InvalidSequence,
    /// Any other failure reported by the service.
    PlatformFailure,
}

/**
A failed conversion.

Carries a human-readable message and the platform error code that caused it.  For `InputTooLong`, the code is the backend's "invalid parameter" code, since the service is never called.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message} (platform error {code})")]
pub struct ConversionError {
    kind: ErrorKind,
    message: &'static str,
    code: i32,
}

impl ConversionError {
    pub(crate) fn new(kind: ErrorKind, message: &'static str, code: i32) -> Self {
        ConversionError {
            kind,
            message,
            code,
        }
    }

    pub(crate) fn input_too_long(code: i32) -> Self {
        Self::new(ErrorKind::InputTooLong, "input too long", code)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /**
    The platform error code.

    What the number means depends on the backend: Win32 error codes for `Win32`, C `errno` values for `Portable`.
    */
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl From<ConversionError> for io::Error {
    fn from(err: ConversionError) -> Self {
        let kind = match err.kind {
            ErrorKind::InputTooLong => io::ErrorKind::InvalidInput,
            ErrorKind::InvalidSequence => io::ErrorKind::InvalidData,
            ErrorKind::PlatformFailure => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

pub type Result<T> = ::std::result::Result<T, ConversionError>;
