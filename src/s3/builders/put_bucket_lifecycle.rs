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
use crate::s3::lifecycle_config::LifecycleConfig;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketLifecycleResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketLifecycleConfiguration`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketLifecycleConfiguration.html) S3 API operation.
///
/// Replaces the whole lifecycle configuration of the bucket.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketLifecycle {
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
    life_cycle_config: LifecycleConfig,
}

/// Builder type alias for [`PutBucketLifecycle`].
pub type PutBucketLifecycleBldr =
    PutBucketLifecycleBuilder<((S3Client,), (), (), (), (BucketName,), ())>;

impl S3Api for PutBucketLifecycle {
    type S3Response = PutBucketLifecycleResponse;
}

impl ToS3Request for PutBucketLifecycle {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let bytes: Bytes = self.life_cycle_config.to_xml().into();
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, APPLICATION_XML);
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "lifecycle"))
            .headers(headers)
            .body(bytes)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;
    use crate::s3::lifecycle_config::{LifecycleRule, NoncurrentVersionTransition, RuleStatus};

    #[test]
    fn test_lifecycle_request_carries_content_md5() {
        let config = LifecycleConfig {
            rules: vec![LifecycleRule {
                id: "Move old version to Glacier".into(),
                status: RuleStatus::Enabled,
                noncurrent_version_transitions: vec![NoncurrentVersionTransition {
                    noncurrent_days: 2,
                    storage_class: "GLACIER".into(),
                }],
                ..Default::default()
            }],
        };
        let expected_body = config.to_xml();

        let req = test_client()
            .put_bucket_lifecycle("my-s3-bucket")
            .life_cycle_config(config)
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method(), &Method::PUT);
        assert!(req.query_params().contains_key("lifecycle"));
        assert_eq!(
            req.body().map(|b| b.as_ref()),
            Some(expected_body.as_bytes())
        );
        assert_eq!(
            req.headers().get(CONTENT_MD5).map(String::as_str),
            Some(md5sum_hash(expected_body.as_bytes()).as_str())
        );
    }
}
