// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::constants::{BALANCING_IGNORED_LABELS_FLAG, HTTP_TOKENS_FLAG, ROOT_DISK_SIZE_FLAG};
use crate::disk::parse_disk_size_to_gibibytes;
use crate::errors::InputError;
use crate::http_tokens::validate_http_tokens_value;
use crate::labels::validate_balancing_ignored_labels;
use crate::subnets::validate_subnets_count;

/// User-supplied machine pool and network settings, checked before they are
/// sent to the provider API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_subnet_topology", skip_on_field_errors = false))]
pub struct MachinePoolInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_root_disk_size"))]
    pub root_disk_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_http_tokens"))]
    pub ec2_metadata_http_tokens: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_balancing_labels"))]
    pub balancing_ignored_labels: Option<String>,

    #[serde(default)]
    pub multi_az: bool,

    #[serde(default)]
    pub private_link: bool,

    /// Only checked against the topology when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
}

impl MachinePoolInput {
    /// Root disk size normalized to gibibytes, `0` when unspecified.
    pub fn root_disk_size_gib(&self) -> Result<u64, InputError> {
        match self.root_disk_size.as_deref() {
            Some(size) => parse_disk_size_to_gibibytes(size),
            None => Ok(0),
        }
    }
}

fn validate_root_disk_size(size: &str) -> Result<(), validator::ValidationError> {
    parse_disk_size_to_gibibytes(size)
        .map(|_| ())
        .map_err(Into::into)
}

fn validate_http_tokens(value: &str) -> Result<(), validator::ValidationError> {
    validate_http_tokens_value(value).map_err(Into::into)
}

fn validate_balancing_labels(value: &str) -> Result<(), validator::ValidationError> {
    validate_balancing_ignored_labels(value).map_err(Into::into)
}

fn validate_subnet_topology(input: &MachinePoolInput) -> Result<(), validator::ValidationError> {
    match &input.subnet_ids {
        Some(subnet_ids) => {
            validate_subnets_count(input.multi_az, input.private_link, subnet_ids.len())
                .map_err(Into::into)
        }
        None => Ok(()),
    }
}

/// Flattens `validator` errors into user-facing messages, ordered by field.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}

/// Validates a single untyped property, as handed over by a generic
/// property-bag hook.
///
/// The value must be a JSON string; it is then dispatched to the typed
/// validator registered for `name`.
pub fn validate_property(name: &str, value: &Value) -> Result<(), InputError> {
    let Some(value) = value.as_str() else {
        return Err(InputError::Type(format!(
            "expected a string value for '{}'",
            name
        )));
    };

    match name {
        ROOT_DISK_SIZE_FLAG => parse_disk_size_to_gibibytes(value).map(|_| ()),
        HTTP_TOKENS_FLAG => validate_http_tokens_value(value),
        BALANCING_IGNORED_LABELS_FLAG => validate_balancing_ignored_labels(value),
        _ => Err(InputError::Format(format!("unknown property '{}'", name))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_input() {
        let input: MachinePoolInput = serde_json::from_value(json!({
            "root_disk_size": "300 GiB",
            "ec2_metadata_http_tokens": "required",
            "balancing_ignored_labels": "eks.amazonaws.com/nodegroup",
            "multi_az": true,
            "subnet_ids": ["a", "b", "c", "d", "e", "f"]
        }))
        .unwrap();
        input.validate().unwrap();
        assert_eq!(input.root_disk_size_gib().unwrap(), 300);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let input: MachinePoolInput = serde_json::from_value(json!({})).unwrap();
        input.validate().unwrap();
        assert_eq!(input.root_disk_size_gib().unwrap(), 0);
    }

    #[test]
    fn test_field_and_schema_errors() {
        let input = MachinePoolInput {
            root_disk_size: Some("1KiB".to_string()),
            ec2_metadata_http_tokens: Some("dummy".to_string()),
            private_link: true,
            subnet_ids: Some(vec!["a".to_string(), "b".to_string()]),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert!(field_errors.contains_key("root_disk_size"));
        assert!(field_errors.contains_key("ec2_metadata_http_tokens"));
        assert!(field_errors.contains_key("__all__"));

        let messages = error_messages(&errors);
        assert_eq!(messages.len(), 3);
        assert!(messages.contains(
            &"ec2-metadata-http-tokens value should be one of 'required', 'optional'".to_string()
        ));
        assert!(messages.contains(
            &"The number of subnets for a 'single AZ' 'private link cluster' should be '1', instead received: '2'"
                .to_string()
        ));
    }

    #[test]
    fn test_property_requires_string() {
        let err = validate_property(BALANCING_IGNORED_LABELS_FLAG, &json!(1)).unwrap_err();
        assert!(matches!(err, InputError::Type(_)));
        assert_eq!(
            err.to_string(),
            "expected a string value for 'balancing-ignored-labels'"
        );
    }

    #[test]
    fn test_property_dispatch() {
        validate_property(BALANCING_IGNORED_LABELS_FLAG, &json!("")).unwrap();
        validate_property(HTTP_TOKENS_FLAG, &json!("optional")).unwrap();
        validate_property(ROOT_DISK_SIZE_FLAG, &json!("1 TiB")).unwrap();

        let err = validate_property(ROOT_DISK_SIZE_FLAG, &json!("1foo")).unwrap_err();
        assert!(matches!(err, InputError::Format(_)));
        let err = validate_property("replicas", &json!("3")).unwrap_err();
        assert_eq!(err.to_string(), "unknown property 'replicas'");
    }
}
