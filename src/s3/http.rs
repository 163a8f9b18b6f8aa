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

//! Endpoint and request URL handling

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::urlencode_object_key;
use http::{Method, Uri};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // s3.amazonaws.com, s3.<region>.amazonaws.com, s3-<region>.amazonaws.com and the .cn variants
    static ref AWS_S3_ENDPOINT_REGEX: Regex =
        Regex::new(r"^s3(?:[.-](?P<region>[a-z\d-]{1,63}))?\.(?P<suffix>amazonaws\.com(?:\.cn)?)$")
            .unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        match self.port {
            0 => self.host.clone(),
            port => format!("{}:{port}", self.host),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        let scheme = if self.https { "https" } else { "http" };
        write!(f, "{scheme}://{}", self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Returns the region and domain suffix of an Amazon S3 endpoint, or `None` for any other host.
pub fn parse_aws_s3_endpoint(host: &str) -> Option<(String, String)> {
    let host = host.to_lowercase();
    let caps = AWS_S3_ENDPOINT_REGEX.captures(&host)?;
    let region = match caps.name("region").map(|m| m.as_str()) {
        None | Some("external-1") => String::new(),
        Some(r) => r.to_string(),
    };
    Some((region, caps["suffix"].to_string()))
}

#[derive(Clone, Debug)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Region found in the endpoint host name, empty if none
    pub region: String,
    aws_domain_suffix: String,
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "s3.amazonaws.com".to_string(),
            port: 0,
            region: String::new(),
            aws_domain_suffix: "amazonaws.com".to_string(),
            virtual_style: true,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Parses an endpoint such as `https://s3.ap-south-1.amazonaws.com` or `http://localhost:9000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_provision::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.ap-south-1.amazonaws.com".parse().unwrap();
    /// assert!(base_url.is_aws_host());
    /// assert_eq!(base_url.region, "ap-south-1");
    ///
    /// let local: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// assert!(!local.is_aws_host());
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };
        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_string()
        };

        let port = match url.port_u16() {
            Some(443) if https => 0,
            Some(80) if !https => 0,
            Some(p) => p,
            None => 0,
        };

        if !url.path().is_empty() && url.path() != "/" {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }
        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let (region, aws_domain_suffix) = parse_aws_s3_endpoint(&host).unwrap_or_default();
        let virtual_style = !aws_domain_suffix.is_empty();

        Ok(BaseUrl {
            https,
            host,
            port,
            region,
            aws_domain_suffix,
            virtual_style,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is AWS host
    pub fn is_aws_host(&self) -> bool {
        !self.aws_domain_suffix.is_empty()
    }

    /// Builds URL from base URL for given parameters for S3 operation
    pub fn build_url(
        &self,
        method: &Method,
        region: &str,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let host = if self.is_aws_host() {
            if region.is_empty() {
                return Err(ValidationErr::UrlBuildError(
                    "region is required for Amazon S3 endpoints".into(),
                ));
            }
            format!("s3.{region}.{}", self.aws_domain_suffix)
        } else {
            self.host.clone()
        };

        let mut url = Url {
            https: self.https,
            host,
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        let Some(bucket) = bucket_name else {
            return Ok(url);
        };

        // CreateBucket must be path style; dotted names break the wildcard TLS certificate.
        let create_bucket = method == Method::PUT && object_name.is_none() && query.is_empty();
        let path_style =
            !self.virtual_style || create_bucket || (bucket.contains('.') && self.https);

        let mut path = String::new();
        if path_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            url.host = format!("{bucket}.{}", url.host);
        }

        if let Some(object) = object_name {
            if !object.starts_with('/') {
                path.push('/');
            }
            path.push_str(&urlencode_object_key(object));
        }
        if path.is_empty() {
            path.push('/');
        }
        url.path = path;

        Ok(url)
    }
}
