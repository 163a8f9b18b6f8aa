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
use crate::s3::builders::{CreateBucket, CreateBucketBldr};

impl S3Client {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// Outside `us-east-1` the request carries a `LocationConstraint` for the resolved region.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::s3::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_provision::s3::S3Client;
    /// use s3_provision::s3::response::CreateBucketResponse;
    /// use s3_provision::s3::response_traits::{HasBucket, HasRegion};
    /// use s3_provision::s3::creds::StaticProvider;
    /// use s3_provision::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse().unwrap();
    ///     let client = S3Client::new(base_url, None::<StaticProvider>, None, None).unwrap();
    ///     let resp: CreateBucketResponse = client
    ///         .create_bucket("my-s3-bucket")
    ///         .region(Some("ap-south-1".to_string()))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("made bucket {} in region {}", resp.bucket(), resp.region());
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone()).bucket(bucket)
    }
}
