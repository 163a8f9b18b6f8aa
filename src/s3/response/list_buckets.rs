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
use crate::s3::types::{Bucket, S3Request};
use crate::s3::utils::{from_iso8601utc, get_text_option, get_text_result};
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use xmltree::Element;

/// Response of [list_buckets()](crate::s3::client::S3Client::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(ListBucketsResponse);
impl_has_s3fields!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Returns the buckets owned by the caller, in the order the server listed them.
    pub fn buckets(&self) -> Result<Vec<Bucket>, ValidationErr> {
        let mut root = Element::parse(self.body.clone().reader())?;
        let buckets = root
            .get_mut_child("Buckets")
            .ok_or(ValidationErr::XmlError("<Buckets> tag not found".into()))?;

        let mut bucket_list: Vec<Bucket> = Vec::new();
        while let Some(bucket) = buckets.take_child("Bucket") {
            let creation_date = match get_text_option(&bucket, "CreationDate") {
                Some(v) => Some(from_iso8601utc(&v)?),
                None => None,
            };
            bucket_list.push(Bucket {
                name: get_text_result(&bucket, "Name")?,
                creation_date,
            });
        }
        Ok(bucket_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::builders::test_client;
    use http::Method;

    fn response(body: &'static str) -> ListBucketsResponse {
        ListBucketsResponse {
            request: S3Request::builder()
                .client(test_client())
                .method(Method::GET)
                .build(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_parse_buckets() {
        let resp = response(
            "<ListAllMyBucketsResult><Owner><ID>1</ID></Owner><Buckets>\
             <Bucket><Name>my-s3-bucket</Name><CreationDate>2020-11-24T10:00:00.000Z</CreationDate></Bucket>\
             <Bucket><Name>website-host-bucket</Name><CreationDate>2020-11-25T10:00:00.000Z</CreationDate></Bucket>\
             </Buckets></ListAllMyBucketsResult>",
        );
        let buckets = resp.buckets().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "my-s3-bucket");
        assert_eq!(buckets[1].name, "website-host-bucket");
        assert!(buckets[0].creation_date.is_some());
    }

    #[test]
    fn test_missing_buckets_tag() {
        let resp = response("<ListAllMyBucketsResult></ListAllMyBucketsResult>");
        assert!(matches!(resp.buckets(), Err(ValidationErr::XmlError(_))));
    }
}
