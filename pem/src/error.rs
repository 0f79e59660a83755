use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when parsing or decoding PEM data.
///
/// PEM parsing follows RFC 7468: boundary markers with a known label,
/// base64 body lines, and matching BEGIN/END labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No opening boundary (e.g. `-----BEGIN CERTIFICATE-----`) found.
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The opening boundary was never closed.
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// No data between the boundary markers.
    #[error("missing PEM data")]
    MissingData,

    /// The label in a boundary marker is not one of the recognized ones.
    #[error("invalid label")]
    InvalidLabel,

    /// BEGIN and END carry different labels.
    #[error("label doesn't match")]
    LabelMismatch,

    /// Malformed boundary marker.
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Failed to decode the base64 body.
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
