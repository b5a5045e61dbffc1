// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Operator role trust policy checks.
//!
//! Operator roles are assumed through OIDC workload identity, so their trust
//! policy has to name the cluster's issuer exactly, including any path suffix
//! the installer generated to share one bucket between several clusters.
//!
//! The policy document is read as the IAM API returns it: percent-encoded JSON.
//!
//! ```text
//! {"Statement":[{"Principal":{"Federated":"arn:aws:iam::123:oidc-provider/<host>[/<path>]"},
//!                "Condition":{"StringEquals":{"<host>[/<path>]:sub":[...]}}}]}
//! ```

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

use crate::constants::OIDC_PROVIDER_MARKER;
use crate::errors::InputError;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}

/// An IAM trust policy, reduced to the parts the issuer check reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrustPolicyDocument {
    #[serde(rename = "Version", default)]
    pub version: Option<String>,
    #[serde(rename = "Statement", default, deserialize_with = "one_or_many")]
    pub statements: Vec<TrustStatement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrustStatement {
    #[serde(rename = "Effect", default)]
    pub effect: Option<String>,
    #[serde(rename = "Principal", default)]
    pub principal: Option<Principal>,
    #[serde(rename = "Condition", default)]
    pub condition: BTreeMap<String, BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Principal {
    /// `"Principal": "*"`
    Wildcard(String),
    Entities(PrincipalEntities),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrincipalEntities {
    #[serde(rename = "Federated", default, deserialize_with = "one_or_many")]
    pub federated: Vec<String>,
}

impl TrustPolicyDocument {
    /// Decodes a percent-encoded policy document.
    ///
    /// `+` is read as a space, the same way query strings are unescaped.
    pub fn from_encoded(encoded: &str) -> Result<Self, InputError> {
        let unplussed = encoded.replace('+', " ");
        let decoded = percent_decode_str(&unplussed).decode_utf8()?;
        Ok(serde_json::from_str(&decoded)?)
    }

    /// Federated principal ARN of the first statement.
    pub fn federated_principal(&self) -> Option<&str> {
        match self.statements.first()?.principal.as_ref()? {
            Principal::Entities(entities) => entities.federated.first().map(String::as_str),
            Principal::Wildcard(_) => None,
        }
    }

    /// Issuer identifier embedded in the first statement's federated principal:
    /// everything after `oidc-provider/`.
    pub fn federated_issuer(&self) -> Option<&str> {
        let arn = self.federated_principal()?;
        Some(match arn.find(OIDC_PROVIDER_MARKER) {
            Some(index) => &arn[index + OIDC_PROVIDER_MARKER.len()..],
            None => arn,
        })
    }

    /// Whether the first statement carries a `StringEquals` condition on
    /// `<issuer>:sub`.
    ///
    /// Diagnostic only: the issuer check itself never consults conditions.
    pub fn has_subject_condition(&self, issuer: &str) -> bool {
        let key = format!("{}:sub", issuer);
        self.statements
            .first()
            .and_then(|statement| statement.condition.get("StringEquals"))
            .is_some_and(|conditions| conditions.contains_key(&key))
    }
}

/// Returns the issuer's `host[:port]` as written, followed by its
/// percent-decoded path when that path is more than `/`.
///
/// The key is cut from the raw text rather than from [`Url`], which would
/// lowercase the host and drop a default port.
pub fn issuer_condition_key(issuer_url: &str) -> Result<String, InputError> {
    let issuer_url = issuer_url.trim();
    let parsed = Url::parse(issuer_url).map_err(|err| {
        InputError::Format(format!("invalid issuer URL '{}': {}", issuer_url, err))
    })?;
    let no_host = || InputError::Format(format!("issuer URL '{}' has no host", issuer_url));
    if parsed.host_str().is_none() {
        return Err(no_host());
    }

    let (_, rest) = issuer_url.split_once("://").ok_or_else(no_host)?;
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let (authority, path) = match rest.find('/') {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    };
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    if host.is_empty() {
        return Err(no_host());
    }

    let path = percent_decode_str(path).decode_utf8().map_err(|err| {
        InputError::Format(format!("invalid issuer URL '{}': {}", issuer_url, err))
    })?;

    let mut key = host.to_string();
    if !path.is_empty() && path != "/" {
        key.push_str(&path);
    }
    Ok(key)
}

/// Verifies that an operator role trusts the given OIDC issuer.
///
/// # Errors
///
/// - [`InputError::Decode`] if the document is not percent-encoded JSON
/// - [`InputError::Format`] if the issuer URL does not parse or has no host
/// - [`InputError::Mismatch`] if the first statement's federated principal
///   does not name exactly the issuer's host and path
pub fn validate_issuer_url_matches_assume_policy_document(
    operator_role_arn: &str,
    issuer_url: &str,
    assume_policy_document: &str,
) -> Result<(), InputError> {
    let expected = issuer_condition_key(issuer_url)?;
    let document = TrustPolicyDocument::from_encoded(assume_policy_document)?;

    if document.federated_issuer() != Some(expected.as_str()) {
        return Err(InputError::Mismatch(format!(
            "Operator role '{}' does not have trusted relationship to '{}' issuer URL",
            operator_role_arn, expected
        )));
    }

    if !document.has_subject_condition(&expected) {
        tracing::debug!(
            "trust policy of '{}' has no subject condition for '{}'",
            operator_role_arn,
            expected
        );
    }

    Ok(())
}
