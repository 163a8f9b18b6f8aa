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

mod common;

use common::RecordingService;
use s3_provision::provision::{GLACIER, Operation, ProvisionConfig, Provisioner};
use s3_provision::s3::lifecycle_config::RuleStatus;

#[tokio::test]
async fn lifecycle_has_two_glacier_rules() {
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());
    provisioner.put_lifecycle_policy().await.unwrap();

    let ops = provisioner.service().operations();
    assert_eq!(ops.len(), 1);
    let Operation::PutBucketLifecycle { bucket, config, .. } = &ops[0] else {
        panic!("expected PutBucketLifecycle, got {:?}", ops[0]);
    };
    assert_eq!(bucket, "my-s3-bucket");
    assert_eq!(config.rules.len(), 2);

    let first = &config.rules[0];
    assert_eq!(first.id, "Move smallfile to Glacier");
    assert_eq!(first.prefix, "smallfile");
    assert_eq!(first.status, RuleStatus::Enabled);
    assert_eq!(first.transitions.len(), 1);
    assert_eq!(first.transitions[0].storage_class, GLACIER);
    assert_eq!(
        first.transitions[0].date.map(|d| d.to_rfc3339()),
        Some("2020-11-24T00:00:00+00:00".to_string())
    );

    let second = &config.rules[1];
    assert_eq!(second.id, "Move old version to Glacier");
    assert_eq!(second.prefix, "");
    assert!(second.transitions.is_empty());
    assert_eq!(second.noncurrent_version_transitions[0].noncurrent_days, 2);
    assert_eq!(second.noncurrent_version_transitions[0].storage_class, GLACIER);
}

#[tokio::test]
async fn lifecycle_prefix_is_configurable() {
    let provisioner = Provisioner::new(
        RecordingService::new(),
        ProvisionConfig::builder().lifecycle_prefix("logs/").build(),
    );
    provisioner.put_lifecycle_policy().await.unwrap();

    let Operation::PutBucketLifecycle { config, .. } = &provisioner.service().operations()[0]
    else {
        panic!("expected PutBucketLifecycle");
    };
    assert_eq!(config.rules[0].prefix, "logs/");
    assert_eq!(config.rules.len(), 2);
}
