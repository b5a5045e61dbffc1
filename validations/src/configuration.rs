// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ValidateOptions {
    /// Print the report as JSON
    #[arg(long, global = true, default_value = "false", env("CLUSTER_VALIDATIONS_JSON"), action = ArgAction::SetTrue)]
    pub json: bool,
    #[arg(long, global = true, default_value = "info", env("CLUSTER_VALIDATIONS_LOG_LEVEL"))]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Normalize a disk size such as "300 GiB" to gibibytes
    DiskSize { size: String },
    /// Check an ec2-metadata-http-tokens value
    HttpTokens { value: String },
    /// Check a comma-separated list of balancing-ignored label keys
    BalancingLabels { labels: String },
    /// Check the number of subnets for a cluster topology
    Subnets {
        #[arg(long, action = ArgAction::SetTrue)]
        multi_az: bool,
        #[arg(long, action = ArgAction::SetTrue)]
        private_link: bool,
        #[arg(long)]
        count: usize,
    },
    /// Check that an operator role trusts the cluster's OIDC issuer
    Issuer {
        #[arg(long, env("CLUSTER_VALIDATIONS_ROLE_ARN"))]
        role_arn: String,
        // kept as typed: the trust check compares the raw host
        #[arg(long, env("CLUSTER_VALIDATIONS_ISSUER_URL"), value_parser = parse_issuer_url)]
        issuer_url: String,
        /// Percent-encoded assume role policy document
        #[arg(long)]
        policy_document: String,
    },
    /// Check a JSON machine pool definition ("-" reads stdin)
    MachinePool {
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

fn parse_issuer_url(value: &str) -> Result<String, url::ParseError> {
    Url::parse(value).map(|_| value.to_string())
}
