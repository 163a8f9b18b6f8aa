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

//! The seam between the provisioning operations and the storage service

use crate::s3::client::S3Client;
use crate::s3::error::Error;
use crate::s3::lifecycle_config::LifecycleConfig;
use crate::s3::response_traits::HasS3Fields;
use crate::s3::types::{S3Api, SseConfig, VersioningStatus};
use crate::s3::website_config::WebsiteConfig;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Exactly one call to the storage service, with every parameter spelled out.
///
/// `region` is the region the call is signed for and routed to. For
/// [`Operation::CreateBucket`] it is also the location constraint.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    CreateBucket {
        bucket: String,
        region: String,
    },
    DeleteBucket {
        bucket: String,
        region: String,
    },
    ListBuckets {
        region: String,
    },
    PutBucketPolicy {
        bucket: String,
        region: String,
        /// Policy document as JSON text
        policy: String,
    },
    GetBucketPolicy {
        bucket: String,
        region: String,
    },
    PutBucketEncryption {
        bucket: String,
        region: String,
        config: SseConfig,
    },
    GetBucketEncryption {
        bucket: String,
        region: String,
    },
    PutBucketVersioning {
        bucket: String,
        region: String,
        status: VersioningStatus,
    },
    PutBucketLifecycle {
        bucket: String,
        region: String,
        config: LifecycleConfig,
    },
    PutBucketWebsite {
        bucket: String,
        region: String,
        config: WebsiteConfig,
    },
    PutObject {
        bucket: String,
        region: String,
        key: String,
        data: Bytes,
        content_type: Option<String>,
        acl: Option<String>,
    },
    GetObject {
        bucket: String,
        region: String,
        key: String,
    },
}

impl Operation {
    /// S3 API name of the call.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateBucket { .. } => "CreateBucket",
            Operation::DeleteBucket { .. } => "DeleteBucket",
            Operation::ListBuckets { .. } => "ListBuckets",
            Operation::PutBucketPolicy { .. } => "PutBucketPolicy",
            Operation::GetBucketPolicy { .. } => "GetBucketPolicy",
            Operation::PutBucketEncryption { .. } => "PutBucketEncryption",
            Operation::GetBucketEncryption { .. } => "GetBucketEncryption",
            Operation::PutBucketVersioning { .. } => "PutBucketVersioning",
            Operation::PutBucketLifecycle { .. } => "PutBucketLifecycleConfiguration",
            Operation::PutBucketWebsite { .. } => "PutBucketWebsite",
            Operation::PutObject { .. } => "PutObject",
            Operation::GetObject { .. } => "GetObject",
        }
    }

    /// Bucket the call is addressed to; `None` for [`Operation::ListBuckets`].
    pub fn bucket(&self) -> Option<&str> {
        match self {
            Operation::ListBuckets { .. } => None,
            Operation::CreateBucket { bucket, .. }
            | Operation::DeleteBucket { bucket, .. }
            | Operation::PutBucketPolicy { bucket, .. }
            | Operation::GetBucketPolicy { bucket, .. }
            | Operation::PutBucketEncryption { bucket, .. }
            | Operation::GetBucketEncryption { bucket, .. }
            | Operation::PutBucketVersioning { bucket, .. }
            | Operation::PutBucketLifecycle { bucket, .. }
            | Operation::PutBucketWebsite { bucket, .. }
            | Operation::PutObject { bucket, .. }
            | Operation::GetObject { bucket, .. } => Some(bucket),
        }
    }

    pub fn region(&self) -> &str {
        match self {
            Operation::ListBuckets { region }
            | Operation::CreateBucket { region, .. }
            | Operation::DeleteBucket { region, .. }
            | Operation::PutBucketPolicy { region, .. }
            | Operation::GetBucketPolicy { region, .. }
            | Operation::PutBucketEncryption { region, .. }
            | Operation::GetBucketEncryption { region, .. }
            | Operation::PutBucketVersioning { region, .. }
            | Operation::PutBucketLifecycle { region, .. }
            | Operation::PutBucketWebsite { region, .. }
            | Operation::PutObject { region, .. }
            | Operation::GetObject { region, .. } => region,
        }
    }
}

/// The service's answer, passed back unchanged.
#[derive(Clone, Debug, Default)]
pub struct ServiceReply {
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ServiceReply {
    fn from_response<R: HasS3Fields>(resp: R) -> Self {
        ServiceReply {
            headers: resp.headers().clone(),
            body: resp.body().clone(),
        }
    }
}

/// Executes [`Operation`]s against a storage service.
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn submit(&self, op: Operation) -> Result<ServiceReply, Error>;
}

#[async_trait]
impl StorageService for S3Client {
    async fn submit(&self, op: Operation) -> Result<ServiceReply, Error> {
        log::debug!(
            "submit {} bucket={:?} region={}",
            op.name(),
            op.bucket(),
            op.region()
        );

        Ok(match op {
            Operation::CreateBucket { bucket, region } => ServiceReply::from_response(
                self.create_bucket(bucket).region(region).build().send().await?,
            ),
            Operation::DeleteBucket { bucket, region } => ServiceReply::from_response(
                self.delete_bucket(bucket).region(region).build().send().await?,
            ),
            Operation::ListBuckets { region } => ServiceReply::from_response(
                self.list_buckets().region(region).build().send().await?,
            ),
            Operation::PutBucketPolicy {
                bucket,
                region,
                policy,
            } => ServiceReply::from_response(
                self.put_bucket_policy(bucket)
                    .region(region)
                    .config(policy)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::GetBucketPolicy { bucket, region } => ServiceReply::from_response(
                self.get_bucket_policy(bucket)
                    .region(region)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::PutBucketEncryption {
                bucket,
                region,
                config,
            } => ServiceReply::from_response(
                self.put_bucket_encryption(bucket)
                    .region(region)
                    .sse_config(config)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::GetBucketEncryption { bucket, region } => ServiceReply::from_response(
                self.get_bucket_encryption(bucket)
                    .region(region)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::PutBucketVersioning {
                bucket,
                region,
                status,
            } => ServiceReply::from_response(
                self.put_bucket_versioning(bucket)
                    .region(region)
                    .versioning_status(status)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::PutBucketLifecycle {
                bucket,
                region,
                config,
            } => ServiceReply::from_response(
                self.put_bucket_lifecycle(bucket)
                    .region(region)
                    .life_cycle_config(config)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::PutBucketWebsite {
                bucket,
                region,
                config,
            } => ServiceReply::from_response(
                self.put_bucket_website(bucket)
                    .region(region)
                    .website_config(config)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::PutObject {
                bucket,
                region,
                key,
                data,
                content_type,
                acl,
            } => ServiceReply::from_response(
                self.put_object(bucket, key)
                    .region(region)
                    .data(data)
                    .content_type(content_type)
                    .acl(acl)
                    .build()
                    .send()
                    .await?,
            ),
            Operation::GetObject {
                bucket,
                region,
                key,
            } => ServiceReply::from_response(
                self.get_object(bucket, key)
                    .region(region)
                    .build()
                    .send()
                    .await?,
            ),
        })
    }
}
