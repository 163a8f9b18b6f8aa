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

//! Bucket lifecycle configuration
//!
//! The JSON form uses the S3 member names (`Rules`, `ID`, `Prefix`, `Transitions`, ...);
//! [`LifecycleConfig::to_xml`] renders the `PutBucketLifecycleConfiguration` body.

use crate::s3::utils::{UtcTime, aws_date_format, to_iso8601utc, xml_escape};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleStatus {
    #[default]
    Enabled,
    Disabled,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleStatus::Enabled => f.write_str("Enabled"),
            RuleStatus::Disabled => f.write_str("Disabled"),
        }
    }
}

/// Moves current object versions to another storage class, on a date or after some days
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(
        rename = "Date",
        with = "aws_date_format",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<UtcTime>,
    #[serde(rename = "Days", default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(rename = "StorageClass")]
    pub storage_class: String,
}

/// Moves noncurrent object versions to another storage class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoncurrentVersionTransition {
    #[serde(rename = "NoncurrentDays")]
    pub noncurrent_days: u32,
    #[serde(rename = "StorageClass")]
    pub storage_class: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRule {
    #[serde(rename = "ID")]
    pub id: String,
    /// Key prefix the rule applies to; empty means every object
    #[serde(rename = "Prefix")]
    pub prefix: String,
    #[serde(rename = "Status")]
    pub status: RuleStatus,
    #[serde(
        rename = "Transitions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub transitions: Vec<Transition>,
    #[serde(
        rename = "NoncurrentVersionTransitions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
}

impl LifecycleRule {
    fn write_xml(&self, data: &mut String) {
        data.push_str("<Rule>");
        if !self.id.is_empty() {
            data.push_str(&format!("<ID>{}</ID>", xml_escape(&self.id)));
        }
        data.push_str(&format!("<Prefix>{}</Prefix>", xml_escape(&self.prefix)));
        data.push_str(&format!("<Status>{}</Status>", self.status));

        for t in &self.transitions {
            data.push_str("<Transition>");
            if let Some(date) = t.date {
                data.push_str(&format!("<Date>{}</Date>", to_iso8601utc(date)));
            }
            if let Some(days) = t.days {
                data.push_str(&format!("<Days>{days}</Days>"));
            }
            data.push_str(&format!(
                "<StorageClass>{}</StorageClass></Transition>",
                xml_escape(&t.storage_class)
            ));
        }

        for t in &self.noncurrent_version_transitions {
            data.push_str(&format!(
                "<NoncurrentVersionTransition><NoncurrentDays>{}</NoncurrentDays>\
                 <StorageClass>{}</StorageClass></NoncurrentVersionTransition>",
                t.noncurrent_days,
                xml_escape(&t.storage_class)
            ));
        }

        data.push_str("</Rule>");
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    #[serde(rename = "Rules")]
    pub rules: Vec<LifecycleRule>,
}

impl LifecycleConfig {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<LifecycleConfiguration>");
        for rule in &self.rules {
            rule.write_xml(&mut data);
        }
        data.push_str("</LifecycleConfiguration>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn config() -> LifecycleConfig {
        LifecycleConfig {
            rules: vec![
                LifecycleRule {
                    id: "Move smallfile to Glacier".into(),
                    prefix: "smallfile".into(),
                    status: RuleStatus::Enabled,
                    transitions: vec![Transition {
                        date: Some(Utc.with_ymd_and_hms(2020, 11, 24, 0, 0, 0).unwrap()),
                        days: None,
                        storage_class: "GLACIER".into(),
                    }],
                    ..Default::default()
                },
                LifecycleRule {
                    id: "Move old version to Glacier".into(),
                    prefix: String::new(),
                    status: RuleStatus::Enabled,
                    noncurrent_version_transitions: vec![NoncurrentVersionTransition {
                        noncurrent_days: 2,
                        storage_class: "GLACIER".into(),
                    }],
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_to_xml() {
        assert_eq!(
            config().to_xml(),
            "<LifecycleConfiguration>\
             <Rule><ID>Move smallfile to Glacier</ID><Prefix>smallfile</Prefix><Status>Enabled</Status>\
             <Transition><Date>2020-11-24T00:00:00.000Z</Date><StorageClass>GLACIER</StorageClass></Transition>\
             </Rule>\
             <Rule><ID>Move old version to Glacier</ID><Prefix></Prefix><Status>Enabled</Status>\
             <NoncurrentVersionTransition><NoncurrentDays>2</NoncurrentDays><StorageClass>GLACIER</StorageClass></NoncurrentVersionTransition>\
             </Rule>\
             </LifecycleConfiguration>"
        );
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(config()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Rules": [
                    {
                        "ID": "Move smallfile to Glacier",
                        "Prefix": "smallfile",
                        "Status": "Enabled",
                        "Transitions": [
                            {"Date": "2020-11-24T00:00:00.000Z", "StorageClass": "GLACIER"}
                        ]
                    },
                    {
                        "ID": "Move old version to Glacier",
                        "Prefix": "",
                        "Status": "Enabled",
                        "NoncurrentVersionTransitions": [
                            {"NoncurrentDays": 2, "StorageClass": "GLACIER"}
                        ]
                    }
                ]
            })
        );

        let parsed: LifecycleConfig = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, config());
    }
}
