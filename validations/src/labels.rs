// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Label keys ignored by the autoscaler when balancing similar node groups.
//!
//! Each key follows the Kubernetes qualified name grammar: an optional DNS
//! subdomain prefix and a `/`, then a name of at most 63 characters.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{MAX_LABEL_NAME_LENGTH, MAX_LABEL_PREFIX_LENGTH};
use crate::errors::InputError;

static LABEL_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static LABEL_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn label_name_regex() -> &'static Regex {
    LABEL_NAME_REGEX
        .get_or_init(|| Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap())
}

fn label_prefix_regex() -> &'static Regex {
    LABEL_PREFIX_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap()
    })
}

/// Validates a single label key.
pub fn validate_label_key(key: &str) -> Result<(), InputError> {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            return Err(InputError::Format(format!(
                "invalid label key '{}': prefix part must be non-empty",
                key
            )));
        }
        if prefix.len() > MAX_LABEL_PREFIX_LENGTH {
            return Err(InputError::Format(format!(
                "invalid label key '{}': prefix part must be no more than {} characters",
                key, MAX_LABEL_PREFIX_LENGTH
            )));
        }
        if !label_prefix_regex().is_match(prefix) {
            return Err(InputError::Format(format!(
                "invalid label key '{}': prefix part must be a lowercase RFC 1123 subdomain",
                key
            )));
        }
    }

    if name.is_empty() {
        return Err(InputError::Format(format!(
            "invalid label key '{}': name part must be non-empty",
            key
        )));
    }
    if name.len() > MAX_LABEL_NAME_LENGTH {
        return Err(InputError::Format(format!(
            "invalid label key '{}': name part must be no more than {} characters",
            key, MAX_LABEL_NAME_LENGTH
        )));
    }
    if !label_name_regex().is_match(name) {
        return Err(InputError::Format(format!(
            "invalid label key '{}': name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character",
            key
        )));
    }

    Ok(())
}

/// Splits a comma-separated list of label keys, validating each one.
///
/// An empty input yields an empty list.
pub fn parse_balancing_ignored_labels(value: &str) -> Result<Vec<String>, InputError> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(',')
        .map(str::trim)
        .map(|key| validate_label_key(key).map(|_| key.to_string()))
        .collect()
}

pub fn validate_balancing_ignored_labels(value: &str) -> Result<(), InputError> {
    parse_balancing_ignored_labels(value).map(|_| ())
}
