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
use quickcheck::quickcheck;
use s3_provision::provision::{
    OneOrMany, Operation, PolicyDocument, Principal, ProvisionConfig, Provisioner,
};

fn submitted_policy(op: &Operation) -> (String, PolicyDocument) {
    match op {
        Operation::PutBucketPolicy { bucket, policy, .. } => {
            (bucket.clone(), PolicyDocument::from_json(policy).unwrap())
        }
        other => panic!("expected PutBucketPolicy, got {other:?}"),
    }
}

#[tokio::test]
async fn permissive_policy_targets_primary_bucket() {
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());
    provisioner.put_bucket_policy().await.unwrap();

    let ops = provisioner.service().operations();
    assert_eq!(ops.len(), 1);
    let (bucket, doc) = submitted_policy(&ops[0]);
    assert_eq!(bucket, "my-s3-bucket");

    let statement = &doc.statement[0];
    assert_eq!(statement.principal, Principal::anyone());
    assert_eq!(statement.action, OneOrMany::many(["s3:*"]));
    assert_eq!(
        statement.resource,
        OneOrMany::many(["arn:aws:s3:::my-s3-bucket/*"])
    );
}

#[tokio::test]
async fn policy_is_sent_as_json() {
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());
    provisioner.put_bucket_policy().await.unwrap();

    let Operation::PutBucketPolicy { policy, .. } = &provisioner.service().operations()[0] else {
        panic!("expected PutBucketPolicy");
    };
    let value: serde_json::Value = serde_json::from_str(policy).unwrap();
    assert_eq!(value["Version"], "2012-10-17");
    assert_eq!(value["Statement"][0]["Principal"], "*");
    assert_eq!(value["Statement"][0]["Action"], serde_json::json!(["s3:*"]));
}

#[test]
fn scoped_policy_always_targets_website_bucket() {
    fn prop(requested: String) -> bool {
        let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(provisioner.update_bucket_policy(&requested))
            .unwrap();

        let ops = provisioner.service().operations();
        let (bucket, doc) = submitted_policy(&ops[0]);
        ops.len() == 1
            && bucket == "website-host-bucket"
            && doc.statement[0].resource
                == OneOrMany::One("arn:aws:s3:::website-host-bucket/*".to_string())
    }
    quickcheck(prop as fn(String) -> bool);
}

#[tokio::test]
async fn scoped_policy_follows_configured_target() {
    let provisioner = Provisioner::new(
        RecordingService::new(),
        ProvisionConfig::builder()
            .policy_target_bucket(Some("shared-bucket".to_string()))
            .build(),
    );
    provisioner.update_bucket_policy("my-s3-bucket").await.unwrap();

    let (bucket, doc) = submitted_policy(&provisioner.service().operations()[0]);
    assert_eq!(bucket, "shared-bucket");
    assert_eq!(
        doc.statement[0].action,
        OneOrMany::many(["s3:DeleteObject", "s3:GetObject", "s3:PutObject"])
    );
    assert_eq!(
        doc.statement[0].resource.values(),
        vec!["arn:aws:s3:::shared-bucket/*"]
    );
}

#[tokio::test]
async fn submitted_policy_round_trips() {
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());
    provisioner.put_bucket_policy().await.unwrap();
    provisioner.update_bucket_policy("my-s3-bucket").await.unwrap();

    for op in provisioner.service().operations() {
        let (_, doc) = submitted_policy(&op);
        let again = PolicyDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(again.statement, doc.statement);
    }
}
