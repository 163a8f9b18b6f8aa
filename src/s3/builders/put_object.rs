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
use crate::s3::header_constants::{CONTENT_TYPE, X_AMZ_ACL};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutObjectResponse;
use crate::s3::types::{BucketName, ObjectKey, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation.
///
/// The whole object is sent in a single request. Uploading to an existing key
/// of a versioned bucket creates a new version.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutObject {
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

    #[builder(default, setter(into))]
    data: Bytes,
    /// Content type of the object; the client falls back to `application/octet-stream`.
    #[builder(default, setter(into))]
    content_type: Option<String>,
    /// Canned ACL, e.g. `public-read`
    #[builder(default, setter(into))]
    acl: Option<String>,
}

/// Builder type alias for [`PutObject`].
pub type PutObjectBldr =
    PutObjectBuilder<((S3Client,), (), (), (), (BucketName,), (ObjectKey,), (), (), ())>;

impl S3Api for PutObject {
    type S3Response = PutObjectResponse;
}

impl ToS3Request for PutObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if let Some(v) = self.content_type {
            headers.add(CONTENT_TYPE, v);
        }
        if let Some(v) = self.acl {
            headers.add(X_AMZ_ACL, v);
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.data)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;

    #[test]
    fn test_put_object_headers() {
        let req = test_client()
            .put_object("website-host-bucket", "index.html")
            .data(Bytes::from_static(b"<html></html>"))
            .content_type("text/html".to_string())
            .acl("public-read".to_string())
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.object(), Some("index.html"));
        assert_eq!(
            req.headers().get(CONTENT_TYPE).map(String::as_str),
            Some("text/html")
        );
        assert_eq!(
            req.headers().get(X_AMZ_ACL).map(String::as_str),
            Some("public-read")
        );
    }

    #[test]
    fn test_put_object_plain() {
        let req = test_client()
            .put_object("my-s3-bucket", "smallfile.txt")
            .data("hello")
            .build()
            .to_s3request()
            .unwrap();
        assert!(req.headers().is_empty());
        assert_eq!(req.body().map(|b| b.as_ref()), Some(&b"hello"[..]));
    }

    #[test]
    fn test_put_object_empty_key() {
        let result = test_client()
            .put_object("my-s3-bucket", "")
            .build()
            .to_s3request();
        assert!(matches!(result, Err(ValidationErr::InvalidObjectName(_))));
    }
}
