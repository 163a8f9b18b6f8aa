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
use crate::s3::builders::{PutBucketVersioning, PutBucketVersioningBldr};

impl S3Client {
    /// Creates a [`PutBucketVersioning`] request builder.
    ///
    /// Versioning is enabled unless another status is set on the builder.
    ///
    /// To execute the request, call [`PutBucketVersioning::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketVersioningResponse`](crate::s3::response::PutBucketVersioningResponse).
    pub fn put_bucket_versioning<S: Into<String>>(&self, bucket: S) -> PutBucketVersioningBldr {
        PutBucketVersioning::builder().client(self.clone()).bucket(bucket)
    }
}
