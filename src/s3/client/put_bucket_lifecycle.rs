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

use super::S3Client;
use crate::s3::builders::{PutBucketLifecycle, PutBucketLifecycleBldr};

impl S3Client {
    /// Creates a [`PutBucketLifecycle`] request builder.
    ///
    /// To execute the request, call [`PutBucketLifecycle::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketLifecycleResponse`](crate::s3::response::PutBucketLifecycleResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_provision::s3::S3Client;
    /// use s3_provision::s3::lifecycle_config::{LifecycleConfig, LifecycleRule, NoncurrentVersionTransition, RuleStatus};
    /// use s3_provision::s3::response::PutBucketLifecycleResponse;
    /// use s3_provision::s3::creds::StaticProvider;
    /// use s3_provision::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse().unwrap();
    ///     let client = S3Client::new(base_url, None::<StaticProvider>, None, None).unwrap();
    ///     let rules = vec![LifecycleRule {
    ///         id: "Move old version to Glacier".into(),
    ///         status: RuleStatus::Enabled,
    ///         noncurrent_version_transitions: vec![NoncurrentVersionTransition {
    ///             noncurrent_days: 2,
    ///             storage_class: "GLACIER".into(),
    ///         }],
    ///         ..Default::default()
    ///     }];
    ///
    ///     let _resp: PutBucketLifecycleResponse = client
    ///         .put_bucket_lifecycle("my-s3-bucket")
    ///         .life_cycle_config(LifecycleConfig { rules })
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_lifecycle<S: Into<String>>(&self, bucket: S) -> PutBucketLifecycleBldr {
        PutBucketLifecycle::builder().client(self.clone()).bucket(bucket)
    }
}
