// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::HTTP_TOKENS_FLAG;
use crate::errors::InputError;

/// Whether EC2 instances must use IMDSv2 session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpTokensState {
    Required,
    Optional,
}

impl HttpTokensState {
    pub const ALL: [HttpTokensState; 2] = [HttpTokensState::Required, HttpTokensState::Optional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for HttpTokensState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpTokensState {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| {
                InputError::Mismatch(format!(
                    "{} value should be one of '{}', '{}'",
                    HTTP_TOKENS_FLAG,
                    HttpTokensState::Required,
                    HttpTokensState::Optional
                ))
            })
    }
}

/// Accepts an empty value (provider default) or one of the token states.
pub fn validate_http_tokens_value(value: &str) -> Result<(), InputError> {
    if value.is_empty() {
        return Ok(());
    }
    value.parse::<HttpTokensState>().map(|_| ())
}
