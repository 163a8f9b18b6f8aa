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

//! Error definitions for S3 operations

use crate::s3::error_response::S3ErrorResponse;
use thiserror::Error;

/// Errors detected locally while building a request or decoding a response.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{bucket_name}': {reason}")]
    InvalidBucketName { bucket_name: String, reason: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("cannot build URL: {0}")]
    UrlBuildError(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("header value is not visible ASCII: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("time parse error: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("invalid versioning status: {0}")]
    InvalidVersioningStatus(String),
}

/// Errors reported by the server.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error(
        "invalid server response: {message}; status code: {http_status_code}; content-type: {content_type}"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

/// Transport level failures that carry no S3 error document.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}

/// Local I/O failures (upload inputs, CA certificate files).
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Top level error returned by every S3 operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("S3 server error: {0}")]
    S3Server(#[from] S3ServerError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

impl Error {
    /// Returns the parsed server error document, if this error came from the server.
    pub fn s3_error_response(&self) -> Option<&S3ErrorResponse> {
        match self {
            Error::S3Server(S3ServerError::S3Error(e)) => Some(e),
            _ => None,
        }
    }
}
