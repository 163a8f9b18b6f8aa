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

use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{APPLICATION_XML, CONTENT_MD5, CONTENT_TYPE};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketEncryptionResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, SseConfig, ToS3Request};
use crate::s3::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketEncryption`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketEncryption.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::put_bucket_encryption`](crate::s3::client::S3Client::put_bucket_encryption) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketEncryption {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<Region>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    bucket: BucketName,
    #[builder(default)]
    sse_config: SseConfig,
}

/// Builder type alias for [`PutBucketEncryption`].
pub type PutBucketEncryptionBldr =
    PutBucketEncryptionBuilder<((S3Client,), (), (), (), (BucketName,), ())>;

impl S3Api for PutBucketEncryption {
    type S3Response = PutBucketEncryptionResponse;
}

impl ToS3Request for PutBucketEncryption {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let bytes: Bytes = self.sse_config.to_xml().into();
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, APPLICATION_XML);
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "encryption"))
            .headers(headers)
            .body(bytes)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;

    #[test]
    fn test_encryption_request() {
        let req = test_client()
            .put_bucket_encryption("my-s3-bucket")
            .build()
            .to_s3request()
            .unwrap();
        let body = req.body().unwrap().clone();

        assert_eq!(req.method(), &Method::PUT);
        assert!(req.query_params().contains_key("encryption"));
        assert_eq!(
            req.headers().get(CONTENT_MD5).map(String::as_str),
            Some(md5sum_hash(&body).as_str())
        );
        assert!(
            std::str::from_utf8(&body)
                .unwrap()
                .contains("<SSEAlgorithm>AES256</SSEAlgorithm>")
        );
    }
}
