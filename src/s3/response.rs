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

//! Responses for [S3Client](crate::s3::client::S3Client) APIs

mod create_bucket;
mod delete_bucket;
mod get_bucket_encryption;
mod get_bucket_policy;
mod get_object;
mod list_buckets;
mod put_bucket_encryption;
mod put_bucket_lifecycle;
mod put_bucket_policy;
mod put_bucket_versioning;
mod put_bucket_website;
mod put_object;

pub use create_bucket::CreateBucketResponse;
pub use delete_bucket::DeleteBucketResponse;
pub use get_bucket_encryption::GetBucketEncryptionResponse;
pub use get_bucket_policy::GetBucketPolicyResponse;
pub use get_object::GetObjectResponse;
pub use list_buckets::ListBucketsResponse;
pub use put_bucket_encryption::PutBucketEncryptionResponse;
pub use put_bucket_lifecycle::PutBucketLifecycleResponse;
pub use put_bucket_policy::PutBucketPolicyResponse;
pub use put_bucket_versioning::PutBucketVersioningResponse;
pub use put_bucket_website::PutBucketWebsiteResponse;
pub use put_object::PutObjectResponse;
