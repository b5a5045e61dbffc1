// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Disk size parsing.
//!
//! Sizes arrive as free-form strings such as `100 GiB`, `1T` or `500gb` and
//! are normalized to whole gibibytes, the unit the provider API expects.
//!
//! # Accepted units (case-insensitive)
//!
//! | Unit            | Bytes     |
//! |-----------------|-----------|
//! | `g`, `gb`       | 1000^3    |
//! | `gi`, `gib`     | 1024^3    |
//! | `t`, `tb`       | 1000^4    |
//! | `ti`, `tib`     | 1024^4    |
//!
//! Decimal units are truncated toward zero after conversion, so a request
//! never ends up larger than what the user typed.

use std::num::IntErrorKind;

use crate::constants::{GIBIBYTE, GIGABYTE, MAX_BYTES, TEBIBYTE, TERABYTE};
use crate::errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeUnit {
    Gigabyte,
    Gibibyte,
    Terabyte,
    Tebibyte,
}

impl SizeUnit {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "g" | "gb" => Some(Self::Gigabyte),
            "gi" | "gib" => Some(Self::Gibibyte),
            "t" | "tb" => Some(Self::Terabyte),
            "ti" | "tib" => Some(Self::Tebibyte),
            _ => None,
        }
    }

    fn bytes(self) -> u64 {
        match self {
            Self::Gigabyte => GIGABYTE,
            Self::Gibibyte => GIBIBYTE,
            Self::Terabyte => TERABYTE,
            Self::Tebibyte => TEBIBYTE,
        }
    }
}

/// Magnitude and optional unit of a disk size, before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SizeSpec {
    magnitude: u64,
    unit: Option<SizeUnit>,
}

impl SizeSpec {
    fn parse(input: &str) -> Result<Self, InputError> {
        if input.starts_with('-') {
            return Err(InputError::Format(format!(
                "invalid disk size '{}': size must not be negative",
                input
            )));
        }

        let split = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let (digits, rest) = input.split_at(split);
        if digits.is_empty() {
            return Err(InputError::Format(format!(
                "invalid disk size '{}': expected a number followed by a unit",
                input
            )));
        }

        let magnitude: u64 = digits.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow => InputError::Range(format!(
                    "invalid disk size '{}': value is too large",
                    input
                )),
                _ => InputError::Format(format!("invalid disk size '{}': {}", input, err)),
            }
        })?;
        if magnitude > MAX_BYTES {
            return Err(InputError::Range(format!(
                "invalid disk size '{}': value is too large",
                input
            )));
        }

        let token = rest.trim_start();
        if token.is_empty() {
            return Ok(Self {
                magnitude,
                unit: None,
            });
        }

        match SizeUnit::parse(token) {
            Some(unit) => Ok(Self {
                magnitude,
                unit: Some(unit),
            }),
            None => Err(InputError::Format(format!(
                "invalid disk size '{}': unit '{}' is not supported, use one of 'G', 'GB', 'GiB', 'T', 'TB', 'TiB'",
                input, token
            ))),
        }
    }
}

/// Parses a human-written disk size into whole gibibytes.
///
/// An empty string and a bare number without a unit both yield `0`, meaning
/// the size was left unspecified.
///
/// # Errors
///
/// - [`InputError::Format`] for a negative or non-numeric magnitude, or an
///   unsupported unit
/// - [`InputError::Range`] when the magnitude or its byte count does not fit
///   in a signed 64-bit integer
pub fn parse_disk_size_to_gibibytes(input: &str) -> Result<u64, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    let spec = SizeSpec::parse(input)?;
    let Some(unit) = spec.unit else {
        return Ok(0);
    };

    let bytes = spec
        .magnitude
        .checked_mul(unit.bytes())
        .filter(|bytes| *bytes <= MAX_BYTES)
        .ok_or_else(|| {
            InputError::Range(format!(
                "invalid disk size '{}': value exceeds the maximum supported size",
                input
            ))
        })?;

    Ok(bytes / GIBIBYTE)
}
