// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::borrow::Cow;

/// Errors returned by the input validators.
///
/// The `Display` output of every variant except [`InputError::Decode`] is the
/// bare user-facing message, so callers can surface it verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input does not match the accepted grammar.
    #[error("{0}")]
    Format(String),
    /// A numeric value overflowed during parsing or conversion.
    #[error("{0}")]
    Range(String),
    /// Well-formed input that fails a domain rule.
    #[error("{0}")]
    Mismatch(String),
    /// The input value is not of the expected representation.
    #[error("{0}")]
    Type(String),
    /// The policy document is not percent-encoded JSON.
    #[error("unable to decode policy document: {0}")]
    Decode(String),
}

impl InputError {
    /// Short machine-readable code, used when reporting through `validator`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format(_) => "invalid_format",
            Self::Range(_) => "out_of_range",
            Self::Mismatch(_) => "mismatch",
            Self::Type(_) => "invalid_type",
            Self::Decode(_) => "invalid_document",
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(source: serde_json::Error) -> Self {
        tracing::debug!("{:?}", source);
        InputError::Decode(source.to_string())
    }
}

impl From<std::str::Utf8Error> for InputError {
    fn from(source: std::str::Utf8Error) -> Self {
        tracing::debug!("{:?}", source);
        InputError::Decode(source.to_string())
    }
}

impl From<InputError> for validator::ValidationError {
    fn from(source: InputError) -> Self {
        let message = source.to_string();
        validator::ValidationError::new(source.code()).with_message(Cow::Owned(message))
    }
}
