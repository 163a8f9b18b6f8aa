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
use crate::s3::builders::{PutBucketEncryption, PutBucketEncryptionBldr};

impl S3Client {
    /// Creates a [`PutBucketEncryption`] request builder.
    ///
    /// To execute the request, call [`PutBucketEncryption::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketEncryptionResponse`](crate::s3::response::PutBucketEncryptionResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_provision::s3::S3Client;
    /// use s3_provision::s3::response::PutBucketEncryptionResponse;
    /// use s3_provision::s3::types::SseConfig;
    /// use s3_provision::s3::creds::StaticProvider;
    /// use s3_provision::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse().unwrap();
    ///     let client = S3Client::new(base_url, None::<StaticProvider>, None, None).unwrap();
    ///     let _resp: PutBucketEncryptionResponse = client
    ///         .put_bucket_encryption("my-s3-bucket")
    ///         .sse_config(SseConfig::s3())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_encryption<S: Into<String>>(&self, bucket: S) -> PutBucketEncryptionBldr {
        PutBucketEncryption::builder().client(self.clone()).bucket(bucket)
    }
}
