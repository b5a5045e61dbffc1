// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::constants::{
    BYO_VPC_MULTI_AZ_SUBNETS_COUNT, BYO_VPC_SINGLE_AZ_SUBNETS_COUNT,
    PRIVATE_LINK_MULTI_AZ_SUBNETS_COUNT, PRIVATE_LINK_SINGLE_AZ_SUBNETS_COUNT,
};
use crate::errors::InputError;

/// Number of subnets a cluster topology requires.
pub fn expected_subnets_count(multi_az: bool, private_link: bool) -> usize {
    match (multi_az, private_link) {
        (true, true) => PRIVATE_LINK_MULTI_AZ_SUBNETS_COUNT,
        (true, false) => BYO_VPC_MULTI_AZ_SUBNETS_COUNT,
        (false, true) => PRIVATE_LINK_SINGLE_AZ_SUBNETS_COUNT,
        (false, false) => BYO_VPC_SINGLE_AZ_SUBNETS_COUNT,
    }
}

pub fn validate_subnets_count(
    multi_az: bool,
    private_link: bool,
    subnets_input_count: usize,
) -> Result<(), InputError> {
    let expected = expected_subnets_count(multi_az, private_link);
    if subnets_input_count == expected {
        return Ok(());
    }

    let az_mode = if multi_az { "multi-AZ" } else { "single AZ" };
    let link_mode = if private_link {
        "private link cluster"
    } else {
        "cluster"
    };
    Err(InputError::Mismatch(format!(
        "The number of subnets for a '{}' '{}' should be '{}', instead received: '{}'",
        az_mode, link_mode, expected, subnets_input_count
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_counts() {
        assert_eq!(expected_subnets_count(true, true), PRIVATE_LINK_MULTI_AZ_SUBNETS_COUNT);
        assert_eq!(expected_subnets_count(true, false), BYO_VPC_MULTI_AZ_SUBNETS_COUNT);
        assert_eq!(expected_subnets_count(false, true), PRIVATE_LINK_SINGLE_AZ_SUBNETS_COUNT);
        assert_eq!(expected_subnets_count(false, false), BYO_VPC_SINGLE_AZ_SUBNETS_COUNT);
    }

    #[test]
    fn test_matching_counts_pass() {
        for (multi_az, private_link) in [(true, true), (true, false), (false, true), (false, false)] {
            validate_subnets_count(multi_az, private_link, expected_subnets_count(multi_az, private_link))
                .unwrap();
        }
    }

    #[test]
    fn test_private_link_messages() {
        let err = validate_subnets_count(true, true, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The number of subnets for a 'multi-AZ' 'private link cluster' should be '3', instead received: '4'"
        );
        let err = validate_subnets_count(false, true, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The number of subnets for a 'single AZ' 'private link cluster' should be '1', instead received: '2'"
        );
    }

    #[test]
    fn test_byo_vpc_messages() {
        let err = validate_subnets_count(true, false, 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The number of subnets for a 'multi-AZ' 'cluster' should be '6', instead received: '7'"
        );
        let err = validate_subnets_count(false, false, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The number of subnets for a 'single AZ' 'cluster' should be '2', instead received: '3'"
        );
    }
}
