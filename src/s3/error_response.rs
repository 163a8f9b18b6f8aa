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
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the server in the `<Code>` element of an error document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum S3ErrorCode {
    #[default]
    NoError,
    PermanentRedirect,
    Redirect,
    BadRequest,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The bucket policy does not exist
    NoSuchBucketPolicy,
    /// The specified key does not exist
    NoSuchKey,
    ServerSideEncryptionConfigurationNotFoundError,
    NoSuchLifecycleConfiguration,
    NoSuchWebsiteConfiguration,
    /// The bucket you tried to delete is not empty
    BucketNotEmpty,
    /// The requested bucket name is not available
    BucketAlreadyExists,
    /// Your previous request to create the named bucket succeeded and you already own it
    BucketAlreadyOwnedByYou,
    InvalidBucketName,
    MalformedPolicy,
    MalformedXML,
    ResourceNotFound,
    ResourceConflict,
    AccessDenied,
    MethodNotAllowed,

    OtherError(String), // catch-all for codes not listed above
}

#[allow(dead_code)]
const ALL_S3_ERROR_CODES: &[S3ErrorCode] = &[
    S3ErrorCode::NoError,
    S3ErrorCode::PermanentRedirect,
    S3ErrorCode::Redirect,
    S3ErrorCode::BadRequest,
    S3ErrorCode::NoSuchBucket,
    S3ErrorCode::NoSuchBucketPolicy,
    S3ErrorCode::NoSuchKey,
    S3ErrorCode::ServerSideEncryptionConfigurationNotFoundError,
    S3ErrorCode::NoSuchLifecycleConfiguration,
    S3ErrorCode::NoSuchWebsiteConfiguration,
    S3ErrorCode::BucketNotEmpty,
    S3ErrorCode::BucketAlreadyExists,
    S3ErrorCode::BucketAlreadyOwnedByYou,
    S3ErrorCode::InvalidBucketName,
    S3ErrorCode::MalformedPolicy,
    S3ErrorCode::MalformedXML,
    S3ErrorCode::ResourceNotFound,
    S3ErrorCode::ResourceConflict,
    S3ErrorCode::AccessDenied,
    S3ErrorCode::MethodNotAllowed,
];

impl FromStr for S3ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.to_lowercase().as_str() {
            "noerror" => S3ErrorCode::NoError,
            "permanentredirect" => S3ErrorCode::PermanentRedirect,
            "redirect" => S3ErrorCode::Redirect,
            "badrequest" => S3ErrorCode::BadRequest,
            "nosuchbucket" => S3ErrorCode::NoSuchBucket,
            "nosuchbucketpolicy" => S3ErrorCode::NoSuchBucketPolicy,
            "nosuchkey" => S3ErrorCode::NoSuchKey,
            "serversideencryptionconfigurationnotfounderror" => {
                S3ErrorCode::ServerSideEncryptionConfigurationNotFoundError
            }
            "nosuchlifecycleconfiguration" => S3ErrorCode::NoSuchLifecycleConfiguration,
            "nosuchwebsiteconfiguration" => S3ErrorCode::NoSuchWebsiteConfiguration,
            "bucketnotempty" => S3ErrorCode::BucketNotEmpty,
            "bucketalreadyexists" => S3ErrorCode::BucketAlreadyExists,
            "bucketalreadyownedbyyou" => S3ErrorCode::BucketAlreadyOwnedByYou,
            "invalidbucketname" => S3ErrorCode::InvalidBucketName,
            "malformedpolicy" => S3ErrorCode::MalformedPolicy,
            "malformedxml" => S3ErrorCode::MalformedXML,
            "resourcenotfound" => S3ErrorCode::ResourceNotFound,
            "resourceconflict" => S3ErrorCode::ResourceConflict,
            "accessdenied" => S3ErrorCode::AccessDenied,
            "methodnotallowed" => S3ErrorCode::MethodNotAllowed,
            _ => S3ErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            S3ErrorCode::NoError => "NoError",
            S3ErrorCode::PermanentRedirect => "PermanentRedirect",
            S3ErrorCode::Redirect => "Redirect",
            S3ErrorCode::BadRequest => "BadRequest",
            S3ErrorCode::NoSuchBucket => "NoSuchBucket",
            S3ErrorCode::NoSuchBucketPolicy => "NoSuchBucketPolicy",
            S3ErrorCode::NoSuchKey => "NoSuchKey",
            S3ErrorCode::ServerSideEncryptionConfigurationNotFoundError => {
                "ServerSideEncryptionConfigurationNotFoundError"
            }
            S3ErrorCode::NoSuchLifecycleConfiguration => "NoSuchLifecycleConfiguration",
            S3ErrorCode::NoSuchWebsiteConfiguration => "NoSuchWebsiteConfiguration",
            S3ErrorCode::BucketNotEmpty => "BucketNotEmpty",
            S3ErrorCode::BucketAlreadyExists => "BucketAlreadyExists",
            S3ErrorCode::BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
            S3ErrorCode::InvalidBucketName => "InvalidBucketName",
            S3ErrorCode::MalformedPolicy => "MalformedPolicy",
            S3ErrorCode::MalformedXML => "MalformedXML",
            S3ErrorCode::ResourceNotFound => "ResourceNotFound",
            S3ErrorCode::ResourceConflict => "ResourceConflict",
            S3ErrorCode::AccessDenied => "AccessDenied",
            S3ErrorCode::MethodNotAllowed => "MethodNotAllowed",
            S3ErrorCode::OtherError(msg) => msg,
        };
        f.write_str(s)
    }
}

/// Typed error returned by the server for a failed operation.
#[derive(Clone, Debug)]
pub struct S3ErrorResponse {
    code: S3ErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn new(
        headers: HeaderMap,
        code: S3ErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
        object_name: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
            object_name,
        }
    }

    /// Parses an XML `<Error>` document as sent by S3.
    pub fn new_from_body(body: Bytes, headers: HeaderMap) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        let code = match S3ErrorCode::from_str(&get_text_default(&root, "Code")) {
            Ok(v) => v,
            Err(never) => match never {},
        };
        Ok(Self {
            code,
            message: get_text_option(&root, "Message"),
            headers,
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn code(&self) -> S3ErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
    pub fn object_name(&self) -> &Option<String> {
        &self.object_name
    }
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S3 operation failed: \n\tcode: {}\n\tmessage: {:?}\n\tresource: {}\n\trequest_id: {}\n\thost_id: {}\n\tbucket_name: {:?}\n\tobject_name: {:?}",
            self.code,
            self.message,
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name,
            self.object_name,
        )
    }
}

impl std::error::Error for S3ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in ALL_S3_ERROR_CODES {
            let s = code.to_string();
            let parsed: S3ErrorCode = s.parse().unwrap();
            assert_eq!(
                parsed, *code,
                "failed S3ErrorCode round-trip: code {code} -> str '{s}' -> code {parsed}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_kept_verbatim() {
        let code: S3ErrorCode = "SlowDown".parse().unwrap();
        assert_eq!(code, S3ErrorCode::OtherError("SlowDown".into()));
        assert_eq!(code.to_string(), "SlowDown");
    }

    #[test]
    fn test_parse_error_body() {
        let body = Bytes::from_static(
            br#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>BucketAlreadyExists</Code>
  <Message>The requested bucket name is not available.</Message>
  <BucketName>my-s3-bucket</BucketName>
  <Resource>/my-s3-bucket</Resource>
  <RequestId>4442587FB7D0A2F9</RequestId>
  <HostId>host-1</HostId>
</Error>"#,
        );
        let resp = S3ErrorResponse::new_from_body(body, HeaderMap::new()).unwrap();
        assert_eq!(resp.code(), S3ErrorCode::BucketAlreadyExists);
        assert_eq!(resp.bucket_name().as_deref(), Some("my-s3-bucket"));
        assert_eq!(resp.object_name(), &None);
        assert_eq!(resp.request_id(), "4442587FB7D0A2F9");
        assert_eq!(resp.resource(), "/my-s3-bucket");
    }
}
