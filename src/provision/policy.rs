// S3 Provisioning Toolkit for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! IAM-style bucket policy documents

use crate::s3::error::ValidationErr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy language version accepted by S3.
pub const POLICY_VERSION: &str = "2012-10-17";

/// A value that S3 accepts either as a single string or as a list of strings.
///
/// The shape is kept as given, so a single string serializes as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }

    /// All values, whatever the shape.
    pub fn values(&self) -> Vec<&str> {
        match self {
            OneOrMany::One(v) => vec![v.as_str()],
            OneOrMany::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(v: &str) -> Self {
        OneOrMany::One(v.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(v: String) -> Self {
        OneOrMany::One(v)
    }
}

/// Who a statement applies to: `"*"` or a map such as `{"AWS": ["*"]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Principal {
    Name(String),
    Map(BTreeMap<String, OneOrMany>),
}

impl Principal {
    /// Everyone, written as `"*"`.
    pub fn anyone() -> Self {
        Principal::Name("*".to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "Sid", default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Principal")]
    pub principal: Principal,
    #[serde(rename = "Action")]
    pub action: OneOrMany,
    #[serde(rename = "Resource")]
    pub resource: OneOrMany,
}

/// Bucket policy as sent with `PUT ?policy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    pub fn new(statement: Vec<Statement>) -> Self {
        PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement,
        }
    }

    pub fn to_json(&self) -> Result<String, ValidationErr> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, ValidationErr> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statement(resource: OneOrMany) -> Statement {
        Statement {
            sid: Some("AddPerm".into()),
            effect: Effect::Allow,
            principal: Principal::anyone(),
            action: OneOrMany::many(["s3:GetObject"]),
            resource,
        }
    }

    #[test]
    fn test_single_resource_stays_a_string() {
        let doc = PolicyDocument::new(vec![statement("arn:aws:s3:::b/*".into())]);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Sid": "AddPerm",
                    "Effect": "Allow",
                    "Principal": "*",
                    "Action": ["s3:GetObject"],
                    "Resource": "arn:aws:s3:::b/*"
                }]
            })
        );
    }

    #[test]
    fn test_principal_map() {
        let doc = PolicyDocument::from_json(
            r#"{"Version":"2012-10-17","Statement":[{"Effect":"Deny","Principal":{"AWS":["*"]},"Action":"s3:*","Resource":["arn:aws:s3:::b","arn:aws:s3:::b/*"]}]}"#,
        )
        .unwrap();
        let st = &doc.statement[0];
        assert_eq!(st.sid, None);
        assert_eq!(st.effect, Effect::Deny);
        assert_eq!(
            st.principal,
            Principal::Map(BTreeMap::from([(
                "AWS".to_string(),
                OneOrMany::many(["*"])
            )]))
        );
        assert_eq!(st.action.values(), vec!["s3:*"]);
        assert_eq!(st.resource.values().len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PolicyDocument::from_json("{\"Version\":1}"),
            Err(ValidationErr::JsonError(_))
        ));
    }
}
