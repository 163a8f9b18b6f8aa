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

//! Accessor traits shared by the typed responses

use crate::s3::header_constants::*;
use crate::s3::types::S3Request;
use crate::s3::utils::trim_quotes;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
macro_rules! impl_from_s3response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::s3::types::FromS3Response for $ty {
                async fn from_s3response(
                    request: $crate::s3::types::S3Request,
                    response: Result<reqwest::Response, $crate::s3::error::Error>,
                ) -> Result<Self, $crate::s3::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await.map_err($crate::s3::error::ValidationErr::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::response_traits::HasS3Fields for $ty {
                #[inline]
                fn request(&self) -> &$crate::s3::types::S3Request {
                    &self.request
                }

                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasS3Fields {
    /// The request that was sent to the S3 API.
    fn request(&self) -> &S3Request;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server.
    fn body(&self) -> &Bytes;
}

pub trait HasBucket: HasS3Fields {
    /// Returns the name of the S3 bucket.
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket().unwrap_or_default()
    }
}

pub trait HasObject: HasS3Fields {
    /// Returns the object key (name) of the S3 object.
    #[inline]
    fn object(&self) -> &str {
        self.request().object().unwrap_or_default()
    }
}

pub trait HasRegion: HasS3Fields {
    /// Returns the region the request was sent to.
    #[inline]
    fn region(&self) -> &str {
        self.request().inner_region.as_str()
    }
}

pub trait HasVersion: HasS3Fields {
    /// Returns the version ID of the object (`x-amz-version-id`), if versioning is enabled for the bucket.
    #[inline]
    fn version_id(&self) -> Option<&str> {
        self.headers()
            .get(X_AMZ_VERSION_ID)
            .and_then(|v| v.to_str().ok())
    }
}

pub trait HasEtagFromHeaders: HasS3Fields {
    /// Returns the `ETag` response header without its surrounding quotes.
    #[inline]
    fn etag(&self) -> Option<String> {
        self.headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|s| trim_quotes(s.to_string()))
    }
}
