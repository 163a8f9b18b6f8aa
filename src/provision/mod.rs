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

//! Bucket provisioning operations
//!
//! [`Provisioner`] turns each operation into one or more [`Operation`]s and
//! hands them to a [`StorageService`], normally an [`S3Client`](crate::s3::S3Client).

mod config;
mod documents;
mod policy;
mod provisioner;
mod service;

pub use config::*;
pub use documents::*;
pub use policy::*;
pub use provisioner::*;
pub use service::*;
