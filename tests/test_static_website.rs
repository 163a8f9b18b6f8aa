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

use common::{RecordingService, missing_file, temp_file};
use s3_provision::provision::{
    Operation, PUBLIC_READ, ProvisionConfig, Provisioner, TEXT_HTML, default_website,
};
use tempfile::NamedTempFile;

struct Pages {
    index: NamedTempFile,
    error: NamedTempFile,
}

impl Pages {
    fn new() -> Self {
        Self {
            index: temp_file("<html><body>index</body></html>"),
            error: temp_file("<html><body>error</body></html>"),
        }
    }
}

#[tokio::test]
async fn website_steps_run_in_order() {
    let pages = Pages::new();
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());

    let replies = provisioner
        .host_static_website(pages.index.path(), pages.error.path())
        .await
        .unwrap();
    assert_eq!(replies.len(), 5);

    let bucket = "website-host-bucket".to_string();
    let ops = provisioner.service().operations();
    assert_eq!(
        ops.iter().map(Operation::name).collect::<Vec<_>>(),
        vec![
            "CreateBucket",
            "PutBucketPolicy",
            "PutBucketWebsite",
            "PutObject",
            "PutObject"
        ]
    );
    assert!(ops.iter().all(|op| op.bucket() == Some(bucket.as_str())));

    assert_eq!(
        ops[0],
        Operation::CreateBucket {
            bucket: bucket.clone(),
            region: "ap-south-1".into(),
        }
    );
    assert_eq!(
        ops[2],
        Operation::PutBucketWebsite {
            bucket: bucket.clone(),
            region: "ap-south-1".into(),
            config: default_website("index.html", "error.html"),
        }
    );
    assert_eq!(
        ops[3],
        Operation::PutObject {
            bucket: bucket.clone(),
            region: "ap-south-1".into(),
            key: "index.html".into(),
            data: "<html><body>index</body></html>".into(),
            content_type: Some(TEXT_HTML.into()),
            acl: Some(PUBLIC_READ.into()),
        }
    );
    assert_eq!(
        ops[4],
        Operation::PutObject {
            bucket,
            region: "ap-south-1".into(),
            key: "error.html".into(),
            data: "<html><body>error</body></html>".into(),
            content_type: Some(TEXT_HTML.into()),
            acl: Some(PUBLIC_READ.into()),
        }
    );
}

#[tokio::test]
async fn website_stops_at_failing_step() {
    let pages = Pages::new();
    for step in 1..=5 {
        let provisioner =
            Provisioner::new(RecordingService::failing_at(step), ProvisionConfig::default());

        let result = provisioner
            .host_static_website(pages.index.path(), pages.error.path())
            .await;
        assert!(result.is_err(), "step {step} should fail the sequence");
        assert_eq!(
            provisioner.service().operations().len(),
            step,
            "no call may follow failing step {step}"
        );
    }
}

#[tokio::test]
async fn missing_index_file_fails_step_four() {
    let pages = Pages::new();
    let dir = tempfile::tempdir().unwrap();
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());

    let result = provisioner
        .host_static_website(missing_file(&dir), pages.error.path())
        .await;
    assert!(result.is_err());
    assert_eq!(provisioner.service().operations().len(), 3);
}

#[tokio::test]
async fn missing_error_file_fails_step_five() {
    let pages = Pages::new();
    let dir = tempfile::tempdir().unwrap();
    let provisioner = Provisioner::new(RecordingService::new(), ProvisionConfig::default());

    let result = provisioner
        .host_static_website(pages.index.path(), missing_file(&dir))
        .await;
    assert!(result.is_err());

    let ops = provisioner.service().operations();
    assert_eq!(ops.len(), 4);
    assert!(matches!(&ops[3], Operation::PutObject { key, .. } if key == "index.html"));
}

#[tokio::test]
async fn website_steps_share_configured_region() {
    let pages = Pages::new();
    let provisioner = Provisioner::new(
        RecordingService::new(),
        ProvisionConfig::builder().region("eu-west-1").build(),
    );

    provisioner
        .host_static_website(pages.index.path(), pages.error.path())
        .await
        .unwrap();

    let ops = provisioner.service().operations();
    assert_eq!(ops.len(), 5);
    assert!(
        ops.iter().all(|op| op.region() == "eu-west-1"),
        "every step must be routed to the bucket's region: {ops:?}"
    );
}
