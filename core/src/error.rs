//! Error types for the OpenF1 API client.
//!
//! # Design
//! `NotFound` and `AmbiguousResult` get dedicated variants because callers of
//! the single-record accessors frequently distinguish "no such entity" from
//! "the search matched more than one entity." Transport and decode failures
//! carry the underlying error text for debugging; nothing is logged or
//! retried — every error propagates to the immediate caller.

use std::fmt;

/// Errors returned by `OpenF1Client` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The base resource path did not parse as a well-formed URL.
    InvalidUrl(String),

    /// The GET request failed at the network level (connect, timeout, read).
    Transport(String),

    /// The response body was not valid JSON, or its shape did not match the
    /// target record type.
    Decode(String),

    /// A required selector field was left unset, e.g. a driver lookup with
    /// no driver number and no name fields. The payload names the field.
    MissingIdentifier(&'static str),

    /// A lookup expected to resolve to exactly one record resolved to zero.
    NotFound(&'static str),

    /// A lookup expected to resolve to exactly one record resolved to many.
    AmbiguousResult {
        resource: &'static str,
        count: usize,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(url) => write!(f, "invalid url: {url}"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Decode(msg) => write!(f, "response decode failed: {msg}"),
            ApiError::MissingIdentifier(field) => {
                write!(f, "missing required identifier: {field}")
            }
            ApiError::NotFound(resource) => write!(f, "{resource}: no matching record"),
            ApiError::AmbiguousResult { resource, count } => {
                write!(f, "{resource}: expected one matching record, got {count}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
