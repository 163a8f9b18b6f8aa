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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::GetObjectResponse;
use crate::s3::types::{BucketName, ObjectKey, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
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
    #[builder(!default, setter(into))] // force required + accept Into<String>
    object: ObjectKey,
    /// Read this version instead of the latest one
    #[builder(default, setter(into))]
    version_id: Option<String>,
}

/// Builder type alias for [`GetObject`].
pub type GetObjectBldr =
    GetObjectBuilder<((S3Client,), (), (), (), (BucketName,), (ObjectKey,), ())>;

impl S3Api for GetObject {
    type S3Response = GetObjectResponse;
}

impl ToS3Request for GetObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if let Some(v) = self.version_id {
            query_params.add("versionId", v);
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;

    #[test]
    fn test_get_object_version() {
        let req = test_client()
            .get_object("my-s3-bucket", "smallfile.txt")
            .version_id(Some("3HL4kqtJlcpXroDTDmJ".to_string()))
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.bucket(), Some("my-s3-bucket"));
        assert_eq!(
            req.query_params().get("versionId").map(String::as_str),
            Some("3HL4kqtJlcpXroDTDmJ")
        );
    }

    #[test]
    fn test_get_object_latest() {
        let req = test_client()
            .get_object("my-s3-bucket", "smallfile.txt")
            .build()
            .to_s3request()
            .unwrap();
        assert!(req.query_params().is_empty());
        assert!(req.body().is_none());
    }
}
