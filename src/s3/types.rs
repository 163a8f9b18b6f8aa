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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::multimap_ext::Multimap;
use crate::s3::utils::{UtcTime, get_text_option, get_text_result};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use typed_builder::TypedBuilder;
use xmltree::Element;

pub type BucketName = String;
pub type ObjectKey = String;
pub type Region = String;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default, setter(into))]
    region: Option<Region>,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<BucketName>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<ObjectKey>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    /// region computed by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: Region,
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Region the request is sent to: the request's own region, else the client's,
    /// else the one found in the endpoint host, else `us-east-1`.
    pub fn resolve_region(&self) -> Region {
        self.region
            .as_deref()
            .filter(|r| !r.is_empty())
            .or_else(|| self.client.region())
            .unwrap_or(DEFAULT_REGION)
            .to_string()
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`]
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self.resolve_region();
        self.client
            .execute(
                &self.method,
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
            )
            .await
    }
}

/// Converts a request builder into a concrete S3 HTTP request.
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

/// Converts an HTTP response into a strongly typed S3 response.
#[async_trait]
pub trait FromS3Response: Sized {
    async fn from_s3response(
        s3req: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all S3 API request builders.
#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the S3 API request and returns the corresponding typed response.
    ///
    /// Requests are sent exactly once; errors are returned as received.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}

#[derive(Clone, Debug, Serialize)]
/// Contains the bucket name and creation date
pub struct Bucket {
    #[serde(rename = "Name")]
    pub name: BucketName,
    #[serde(rename = "CreationDate")]
    pub creation_date: Option<UtcTime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Server-side encryption configuration applied by default to new objects
pub struct SseConfig {
    #[serde(rename = "SSEAlgorithm")]
    pub sse_algorithm: String,
    #[serde(
        rename = "KMSMasterKeyID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kms_master_key_id: Option<String>,
}

impl Default for SseConfig {
    fn default() -> Self {
        Self::s3()
    }
}

impl SseConfig {
    /// S3 managed keys (`AES256`)
    pub fn s3() -> SseConfig {
        SseConfig {
            sse_algorithm: String::from("AES256"),
            kms_master_key_id: None,
        }
    }

    pub fn from_xml(root: &Element) -> Result<SseConfig, ValidationErr> {
        let by_default = root
            .get_child("Rule")
            .and_then(|rule| rule.get_child("ApplyServerSideEncryptionByDefault"))
            .ok_or(ValidationErr::XmlError(
                "<Rule><ApplyServerSideEncryptionByDefault> tag not found".into(),
            ))?;
        Ok(SseConfig {
            sse_algorithm: get_text_result(by_default, "SSEAlgorithm")?,
            kms_master_key_id: get_text_option(by_default, "KMSMasterKeyID"),
        })
    }

    pub fn to_xml(&self) -> String {
        let kms = self
            .kms_master_key_id
            .as_deref()
            .map(|v| format!("<KMSMasterKeyID>{v}</KMSMasterKeyID>"))
            .unwrap_or_default();
        format!(
            "<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
             <SSEAlgorithm>{}</SSEAlgorithm>{kms}\
             </ApplyServerSideEncryptionByDefault></Rule></ServerSideEncryptionConfiguration>",
            self.sse_algorithm
        )
    }

    /// JSON shape `{"Rules":[{"ApplyServerSideEncryptionByDefault":{...}}]}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "Rules": [{ "ApplyServerSideEncryptionByDefault": self }]
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Bucket versioning state
pub enum VersioningStatus {
    Enabled,
    Suspended,
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VersioningStatus::Enabled => f.write_str("Enabled"),
            VersioningStatus::Suspended => f.write_str("Suspended"),
        }
    }
}

impl FromStr for VersioningStatus {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("Enabled") {
            Ok(VersioningStatus::Enabled)
        } else if s.eq_ignore_ascii_case("Suspended") {
            Ok(VersioningStatus::Suspended)
        } else {
            Err(ValidationErr::InvalidVersioningStatus(s.to_string()))
        }
    }
}

impl VersioningStatus {
    pub fn to_xml(self) -> String {
        format!(
            "<VersioningConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             <Status>{self}</Status></VersioningConfiguration>"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_config_xml() {
        let xml = SseConfig::s3().to_xml();
        assert_eq!(
            xml,
            "<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
             <SSEAlgorithm>AES256</SSEAlgorithm>\
             </ApplyServerSideEncryptionByDefault></Rule></ServerSideEncryptionConfiguration>"
        );

        let root = Element::parse(xml.as_bytes()).unwrap();
        assert_eq!(SseConfig::from_xml(&root).unwrap(), SseConfig::s3());
    }

    #[test]
    fn test_sse_config_kms_from_xml() {
        let xml = "<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
                   <SSEAlgorithm>aws:kms</SSEAlgorithm><KMSMasterKeyID>key-1</KMSMasterKeyID>\
                   </ApplyServerSideEncryptionByDefault></Rule></ServerSideEncryptionConfiguration>";
        let root = Element::parse(xml.as_bytes()).unwrap();
        let config = SseConfig::from_xml(&root).unwrap();
        assert_eq!(config.sse_algorithm, "aws:kms");
        assert_eq!(config.kms_master_key_id.as_deref(), Some("key-1"));
        assert_eq!(config.to_xml(), xml);
    }

    #[test]
    fn test_sse_config_json_shape() {
        assert_eq!(
            SseConfig::s3().to_json(),
            serde_json::json!({
                "Rules": [{"ApplyServerSideEncryptionByDefault": {"SSEAlgorithm": "AES256"}}]
            })
        );
    }

    #[test]
    fn test_versioning_status() {
        assert_eq!(
            "enabled".parse::<VersioningStatus>().unwrap(),
            VersioningStatus::Enabled
        );
        assert!("on".parse::<VersioningStatus>().is_err());
        assert!(
            VersioningStatus::Enabled
                .to_xml()
                .contains("<Status>Enabled</Status>")
        );
    }
}
