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

//! Configuration documents submitted by the provisioning operations.
//!
//! All builders are pure; nothing here talks to the service.

use crate::provision::policy::{Effect, OneOrMany, PolicyDocument, Principal, Statement};
use crate::s3::lifecycle_config::{
    LifecycleConfig, LifecycleRule, NoncurrentVersionTransition, RuleStatus, Transition,
};
use crate::s3::types::SseConfig;
use crate::s3::utils::UtcTime;
use crate::s3::website_config::WebsiteConfig;
use chrono::NaiveDate;

pub const POLICY_SID: &str = "AddPerm";
pub const GLACIER: &str = "GLACIER";

fn object_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{bucket}/*")
}

/// Allows anyone every S3 action on every object of `bucket`.
///
/// This policy is deliberately insecure and only meant for throwaway buckets.
pub fn permissive_policy(bucket: &str) -> PolicyDocument {
    PolicyDocument::new(vec![Statement {
        sid: Some(POLICY_SID.to_string()),
        effect: Effect::Allow,
        principal: Principal::anyone(),
        action: OneOrMany::many(["s3:*"]),
        resource: OneOrMany::many([object_arn(bucket)]),
    }])
}

/// Allows anyone to read, write and delete the objects of `target_bucket`.
///
/// The resource is written as a single string.
pub fn scoped_policy(target_bucket: &str) -> PolicyDocument {
    PolicyDocument::new(vec![Statement {
        sid: Some(POLICY_SID.to_string()),
        effect: Effect::Allow,
        principal: Principal::anyone(),
        action: OneOrMany::many(["s3:DeleteObject", "s3:GetObject", "s3:PutObject"]),
        resource: OneOrMany::One(object_arn(target_bucket)),
    }])
}

/// Default encryption with S3 managed keys.
pub fn default_encryption() -> SseConfig {
    SseConfig::s3()
}

fn glacier_date() -> Option<UtcTime> {
    NaiveDate::from_ymd_opt(2020, 11, 24)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Two rules: objects under `prefix` go to Glacier on 2020-11-24, and
/// noncurrent versions of any object go to Glacier after two days.
pub fn glacier_lifecycle(prefix: &str) -> LifecycleConfig {
    LifecycleConfig {
        rules: vec![
            LifecycleRule {
                id: "Move smallfile to Glacier".to_string(),
                prefix: prefix.to_string(),
                status: RuleStatus::Enabled,
                transitions: vec![Transition {
                    date: glacier_date(),
                    days: None,
                    storage_class: GLACIER.to_string(),
                }],
                noncurrent_version_transitions: Vec::new(),
            },
            LifecycleRule {
                id: "Move old version to Glacier".to_string(),
                prefix: String::new(),
                status: RuleStatus::Enabled,
                transitions: Vec::new(),
                noncurrent_version_transitions: vec![NoncurrentVersionTransition {
                    noncurrent_days: 2,
                    storage_class: GLACIER.to_string(),
                }],
            },
        ],
    }
}

pub fn default_website(index_suffix: &str, error_key: &str) -> WebsiteConfig {
    WebsiteConfig::new(index_suffix, error_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permissive_policy() {
        let doc = permissive_policy("my-s3-bucket");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Sid": "AddPerm",
                    "Effect": "Allow",
                    "Principal": "*",
                    "Action": ["s3:*"],
                    "Resource": ["arn:aws:s3:::my-s3-bucket/*"]
                }]
            })
        );
    }

    #[test]
    fn test_scoped_policy() {
        let value = serde_json::to_value(scoped_policy("website-host-bucket")).unwrap();
        assert_eq!(
            value["Statement"][0]["Action"],
            json!(["s3:DeleteObject", "s3:GetObject", "s3:PutObject"])
        );
        assert_eq!(
            value["Statement"][0]["Resource"],
            json!("arn:aws:s3:::website-host-bucket/*")
        );
    }

    #[test]
    fn test_glacier_lifecycle() {
        let config = glacier_lifecycle("smallfile");
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].prefix, "smallfile");
        assert_eq!(config.rules[1].noncurrent_version_transitions[0].noncurrent_days, 2);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value["Rules"][0]["Transitions"],
            json!([{"Date": "2020-11-24T00:00:00.000Z", "StorageClass": "GLACIER"}])
        );
        assert_eq!(value["Rules"][1]["Prefix"], json!(""));
    }

    #[test]
    fn test_default_encryption() {
        assert_eq!(default_encryption().sse_algorithm, "AES256");
    }

    #[test]
    fn test_default_website() {
        let value = serde_json::to_value(default_website("index.html", "error.html")).unwrap();
        assert_eq!(
            value,
            json!({
                "ErrorDocument": {"Key": "error.html"},
                "IndexDocument": {"Suffix": "index.html"}
            })
        );
    }

    quickcheck! {
        fn prop_policy_round_trip(bucket: String) -> bool {
            let doc = scoped_policy(&bucket);
            PolicyDocument::from_json(&doc.to_json().unwrap()).unwrap() == doc
        }
    }
}
