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
use crate::s3::builders::{DeleteBucket, DeleteBucketBldr};

impl S3Client {
    /// Creates a [`DeleteBucket`] request builder.
    ///
    /// The bucket must be empty.
    ///
    /// To execute the request, call [`DeleteBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`DeleteBucketResponse`](crate::s3::response::DeleteBucketResponse).
    pub fn delete_bucket<S: Into<String>>(&self, bucket: S) -> DeleteBucketBldr {
        DeleteBucket::builder().client(self.clone()).bucket(bucket)
    }
}
