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

//! S3 APIs for uploading objects.

use super::S3Client;
use crate::s3::builders::{PutObject, PutObjectBldr};

impl S3Client {
    /// Creates a [`PutObject`] request builder.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::s3::response::PutObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_provision::s3::S3Client;
    /// use s3_provision::s3::response::PutObjectResponse;
    /// use s3_provision::s3::response_traits::HasVersion;
    /// use s3_provision::s3::creds::StaticProvider;
    /// use s3_provision::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse().unwrap();
    ///     let client = S3Client::new(base_url, None::<StaticProvider>, None, None).unwrap();
    ///     let resp: PutObjectResponse = client
    ///         .put_object("my-s3-bucket", "smallfile.txt")
    ///         .data("hello")
    ///         .content_type("text/plain".to_string())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored version {:?}", resp.version_id());
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
