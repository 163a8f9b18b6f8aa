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

//! # s3-provision
//!
//! Bucket provisioning for Amazon S3 and S3-compatible object storage.
//!
//! The crate has two layers:
//!
//! - [`s3`]: a small, strongly-typed S3 client. Each supported S3 operation has a
//!   request builder (e.g. [`s3::builders::CreateBucket`], [`s3::builders::PutBucketWebsite`])
//!   implementing [`s3::types::S3Api`], whose async [`send`](crate::s3::types::S3Api::send)
//!   executes the request and returns a typed response.
//! - [`provision`]: the provisioning operations themselves. Configuration documents
//!   (bucket policies, encryption rules, lifecycle rules, website configuration) are
//!   built as data and submitted, one call at a time, through the
//!   [`provision::StorageService`] seam.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3_provision::provision::{ProvisionConfig, Provisioner};
//! use s3_provision::s3::S3ClientBuilder;
//! use s3_provision::s3::creds::StaticProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = S3ClientBuilder::new("https://s3.amazonaws.com".parse()?)
//!         .provider(Some(StaticProvider::new("ACCESS", "SECRET", None)))
//!         .region(Some("ap-south-1".into()))
//!         .build()?;
//!
//!     let provisioner = Provisioner::new(client, ProvisionConfig::default());
//!     provisioner.create_bucket("my-s3-bucket").await?;
//!     provisioner.enable_versioning().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - Every call is a single request; nothing is retried and nothing is rolled back.
//! - Service errors are propagated unchanged as [`s3::error::Error`].

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod provision;
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
