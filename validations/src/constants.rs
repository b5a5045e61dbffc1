// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

pub const GIBIBYTE: u64 = 1024 * 1024 * 1024;
pub const TEBIBYTE: u64 = 1024 * GIBIBYTE;
pub const GIGABYTE: u64 = 1000 * 1000 * 1000;
pub const TERABYTE: u64 = 1000 * GIGABYTE;
/// Byte counts are bounded by the provider API's signed 64-bit integers.
pub const MAX_BYTES: u64 = i64::MAX as u64;

pub const OIDC_PROVIDER_MARKER: &str = "oidc-provider/";

pub const HTTP_TOKENS_FLAG: &str = "ec2-metadata-http-tokens";
pub const ROOT_DISK_SIZE_FLAG: &str = "root-disk-size";
pub const BALANCING_IGNORED_LABELS_FLAG: &str = "balancing-ignored-labels";

// Kubernetes qualified name limits
pub const MAX_LABEL_NAME_LENGTH: usize = 63;
pub const MAX_LABEL_PREFIX_LENGTH: usize = 253;

// Expected subnet counts per cluster topology
pub const PRIVATE_LINK_SINGLE_AZ_SUBNETS_COUNT: usize = 1;
pub const PRIVATE_LINK_MULTI_AZ_SUBNETS_COUNT: usize = 3;
pub const BYO_VPC_SINGLE_AZ_SUBNETS_COUNT: usize = 2;
pub const BYO_VPC_MULTI_AZ_SUBNETS_COUNT: usize = 6;
