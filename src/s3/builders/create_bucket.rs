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

use crate::s3::client::{DEFAULT_REGION, S3Client};
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{APPLICATION_XML, CONTENT_TYPE};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::create_bucket`](crate::s3::client::S3Client::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Region constraint of the new bucket
    #[builder(default, setter(into))]
    region: Option<Region>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    bucket: BucketName,
}

/// Builder type alias for [`CreateBucket`].
pub type CreateBucketBldr = CreateBucketBuilder<((S3Client,), (), (), (), (BucketName,))>;

impl S3Api for CreateBucket {
    type S3Response = CreateBucketResponse;
}

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let region: Region = self
            .region
            .filter(|r| !r.is_empty())
            .or_else(|| self.client.region().map(String::from))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();

        // us-east-1 is the implicit location; S3 rejects it as an explicit constraint.
        let body: Option<Bytes> = match region.as_str() {
            DEFAULT_REGION => None,
            _ => {
                headers.add(CONTENT_TYPE, APPLICATION_XML);
                Some(Bytes::from(format!(
                    "<CreateBucketConfiguration><LocationConstraint>{region}</LocationConstraint></CreateBucketConfiguration>"
                )))
            }
        };

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(region)
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;

    #[test]
    fn test_location_constraint_in_body() {
        let req = test_client()
            .create_bucket("my-s3-bucket")
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.bucket(), Some("my-s3-bucket"));
        assert!(req.query_params().is_empty());
        assert_eq!(
            req.body().map(|b| b.as_ref()),
            Some(
                b"<CreateBucketConfiguration><LocationConstraint>ap-south-1</LocationConstraint></CreateBucketConfiguration>"
                    .as_slice()
            )
        );
    }

    #[test]
    fn test_no_body_for_us_east_1() {
        let req = test_client()
            .create_bucket("my-s3-bucket")
            .region("us-east-1".to_string())
            .build()
            .to_s3request()
            .unwrap();
        assert!(req.body().is_none());
        assert_eq!(req.resolve_region(), "us-east-1");
    }

    #[test]
    fn test_invalid_bucket_name() {
        let r = test_client().create_bucket("A").build().to_s3request();
        assert!(matches!(r, Err(ValidationErr::InvalidBucketName { .. })));
    }
}
