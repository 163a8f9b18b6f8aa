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
use crate::s3::types::{S3Request, SseConfig};
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use xmltree::Element;

/// Response of [get_bucket_encryption()](crate::s3::client::S3Client::get_bucket_encryption) API
#[derive(Clone, Debug)]
pub struct GetBucketEncryptionResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(GetBucketEncryptionResponse);
impl_has_s3fields!(GetBucketEncryptionResponse);

impl HasBucket for GetBucketEncryptionResponse {}
impl HasRegion for GetBucketEncryptionResponse {}

impl GetBucketEncryptionResponse {
    /// Returns the default server-side encryption rule of the bucket.
    pub fn config(&self) -> Result<SseConfig, ValidationErr> {
        let root = Element::parse(self.body.clone().reader())?;
        SseConfig::from_xml(&root)
    }
}
