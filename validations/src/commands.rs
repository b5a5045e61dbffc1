// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Command handlers behind the `cluster-validations` binary.
//!
//! A failed validation is not an error here: it is reported in the
//! [`Report`]. Errors are reserved for input that could not be read at all.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use validator::Validate;

use crate::configuration::Command;
use crate::disk::parse_disk_size_to_gibibytes;
use crate::errors::InputError;
use crate::http_tokens::validate_http_tokens_value;
use crate::issuer::validate_issuer_url_matches_assume_policy_document;
use crate::labels::parse_balancing_ignored_labels;
use crate::models::{MachinePoolInput, error_messages};
use crate::subnets::validate_subnets_count;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gibibytes: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Report {
    fn valid() -> Self {
        Self {
            valid: true,
            ..Default::default()
        }
    }

    fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
            ..Default::default()
        }
    }
}

impl From<Result<(), InputError>> for Report {
    fn from(result: Result<(), InputError>) -> Self {
        match result {
            Ok(()) => Report::valid(),
            Err(err) => Report::invalid(vec![err.to_string()]),
        }
    }
}

#[tracing::instrument(skip(command))]
pub fn execute(command: &Command) -> Result<Report> {
    let report = match command {
        Command::DiskSize { size } => match parse_disk_size_to_gibibytes(size) {
            Ok(gibibytes) => Report {
                gibibytes: Some(gibibytes),
                ..Report::valid()
            },
            Err(err) => Report::invalid(vec![err.to_string()]),
        },
        Command::HttpTokens { value } => validate_http_tokens_value(value).into(),
        Command::BalancingLabels { labels } => match parse_balancing_ignored_labels(labels) {
            Ok(labels) => Report {
                labels,
                ..Report::valid()
            },
            Err(err) => Report::invalid(vec![err.to_string()]),
        },
        Command::Subnets {
            multi_az,
            private_link,
            count,
        } => validate_subnets_count(*multi_az, *private_link, *count).into(),
        Command::Issuer {
            role_arn,
            issuer_url,
            policy_document,
        } => validate_issuer_url_matches_assume_policy_document(
            role_arn,
            issuer_url,
            policy_document,
        )
        .into(),
        Command::MachinePool { file } => {
            let input = read_machine_pool(file)?;
            match input.validate() {
                Ok(()) => Report {
                    gibibytes: Some(input.root_disk_size_gib()?),
                    ..Report::valid()
                },
                Err(errors) => Report::invalid(error_messages(&errors)),
            }
        }
    };

    if report.valid {
        tracing::debug!("[validations] input is valid");
    } else {
        tracing::warn!("[validations] {} validation error(s)", report.errors.len());
    }

    Ok(report)
}

fn read_machine_pool(path: &Path) -> Result<MachinePoolInput> {
    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("unable to read machine pool from stdin")?;
        raw
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("unable to read machine pool file {}", path.display()))?
    };

    serde_json::from_str(&raw).context("unable to parse machine pool definition")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_size_report() {
        let report = execute(&Command::DiskSize {
            size: "100g".to_string(),
        })
        .unwrap();
        assert!(report.valid);
        assert_eq!(report.gibibytes, Some(93));

        let report = execute(&Command::DiskSize {
            size: "1K".to_string(),
        })
        .unwrap();
        assert!(!report.valid);
        assert_eq!(report.gibibytes, None);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_subnets_report() {
        let report = execute(&Command::Subnets {
            multi_az: false,
            private_link: false,
            count: 3,
        })
        .unwrap();
        assert_eq!(
            report.errors,
            vec!["The number of subnets for a 'single AZ' 'cluster' should be '2', instead received: '3'"]
        );
    }

    #[test]
    fn test_issuer_report() {
        let report = execute(&Command::Issuer {
            role_arn: "arn:aws:iam::1:role/op".to_string(),
            issuer_url: "https://issuer.example.com".to_string(),
            policy_document: "%7B%22Statement%22%3A%5B%5D%7D".to_string(),
        })
        .unwrap();
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec!["Operator role 'arn:aws:iam::1:role/op' does not have trusted relationship to 'issuer.example.com' issuer URL"]
        );
    }

    #[test]
    fn test_missing_machine_pool_file() {
        let err = execute(&Command::MachinePool {
            file: "/nonexistent/machine-pool.json".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("unable to read machine pool file"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report {
            gibibytes: Some(10),
            ..Report::valid()
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"valid": true, "gibibytes": 10})
        );
    }
}
