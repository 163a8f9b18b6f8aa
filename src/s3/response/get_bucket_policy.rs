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

use crate::s3::error::ValidationErr;
use crate::s3::response_traits::{HasBucket, HasRegion};
use crate::s3::types::S3Request;
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response from the [`get_bucket_policy`](crate::s3::client::S3Client::get_bucket_policy) API call,
/// providing the bucket policy associated with an S3 bucket.
///
/// The policy is returned as the server sent it. A bucket without a policy
/// is reported as an error, not as an empty document.
#[derive(Clone, Debug)]
pub struct GetBucketPolicyResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(GetBucketPolicyResponse);
impl_has_s3fields!(GetBucketPolicyResponse);

impl HasBucket for GetBucketPolicyResponse {}
impl HasRegion for GetBucketPolicyResponse {}

impl GetBucketPolicyResponse {
    /// Returns the bucket policy as a JSON-formatted string.
    pub fn config(&self) -> Result<&str, ValidationErr> {
        Ok(std::str::from_utf8(&self.body)?)
    }
}
