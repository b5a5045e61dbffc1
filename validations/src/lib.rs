// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Cluster Validations
//!
//! Client-side checks for cluster provisioning inputs, run before anything is
//! sent to the provider API. Every check is a pure function returning
//! [`errors::InputError`], whose message is meant to be shown to the user as is.
//!
//! ## Modules
//!
//! - [`commands`]: handlers behind the `cluster-validations` binary
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: unit sizes, flag names, label limits and subnet counts
//! - [`disk`]: disk size strings normalized to gibibytes
//! - [`errors`]: input error taxonomy
//! - [`http_tokens`]: EC2 metadata token mode
//! - [`issuer`]: operator role trust policy vs. OIDC issuer URL
//! - [`labels`]: balancing-ignored label keys
//! - [`models`]: machine pool input with `validator` integration
//! - [`subnets`]: subnet count per cluster topology
//!
//! ## Usage
//!
//! ```bash
//! cluster-validations disk-size "300 GiB"
//! cluster-validations --json subnets --multi-az --private-link --count 3
//! ```

pub mod commands;
pub mod configuration;
pub mod constants;
pub mod disk;
pub mod errors;
pub mod http_tokens;
pub mod issuer;
pub mod labels;
pub mod models;
pub mod subnets;

pub use disk::parse_disk_size_to_gibibytes;
pub use errors::InputError;
pub use http_tokens::{HttpTokensState, validate_http_tokens_value};
pub use issuer::validate_issuer_url_matches_assume_policy_document;
pub use labels::{parse_balancing_ignored_labels, validate_balancing_ignored_labels};
pub use models::{MachinePoolInput, validate_property};
pub use subnets::{expected_subnets_count, validate_subnets_count};
