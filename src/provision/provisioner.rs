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

use crate::provision::config::ProvisionConfig;
use crate::provision::documents::{
    default_encryption, default_website, glacier_lifecycle, permissive_policy, scoped_policy,
};
use crate::provision::policy::PolicyDocument;
use crate::provision::service::{Operation, ServiceReply, StorageService};
use crate::s3::error::{Error, ValidationErr};
use crate::s3::types::VersioningStatus;
use bytes::Bytes;
use std::path::Path;

/// Content type of the website documents
pub const TEXT_HTML: &str = "text/html";
/// Canned ACL making the website documents readable by anyone
pub const PUBLIC_READ: &str = "public-read";

/// Runs the provisioning operations against a [`StorageService`].
///
/// Every operation issues its calls in order and stops at the first error.
/// Replies and errors are returned as the service produced them.
#[derive(Clone, Debug)]
pub struct Provisioner<S> {
    service: S,
    config: ProvisionConfig,
}

impl<S: StorageService> Provisioner<S> {
    pub fn new(service: S, config: ProvisionConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Every call is signed for and routed to the configured region.
    fn region(&self) -> String {
        self.config.region.clone()
    }

    /// Creates `bucket` in the configured region.
    pub async fn create_bucket(&self, bucket: &str) -> Result<ServiceReply, Error> {
        log::info!("creating bucket {bucket} in region {}", self.config.region);
        self.service
            .submit(Operation::CreateBucket {
                bucket: bucket.to_string(),
                region: self.region(),
            })
            .await
    }

    /// Grants everyone every action on the primary bucket's objects.
    pub async fn put_bucket_policy(&self) -> Result<ServiceReply, Error> {
        let bucket = &self.config.bucket;
        self.submit_policy(bucket, &permissive_policy(bucket)).await
    }

    /// Submits the scoped read/write/delete policy.
    ///
    /// The policy always targets [`ProvisionConfig::policy_target`], whatever
    /// `bucket` is given.
    pub async fn update_bucket_policy(&self, bucket: &str) -> Result<ServiceReply, Error> {
        let target = self.config.policy_target();
        if bucket != target {
            log::warn!("scoped policy requested for {bucket} is applied to {target}");
        }
        self.submit_policy(target, &scoped_policy(target)).await
    }

    async fn submit_policy(
        &self,
        bucket: &str,
        policy: &PolicyDocument,
    ) -> Result<ServiceReply, Error> {
        let policy = policy.to_json()?;
        log::info!("putting policy on bucket {bucket}: {policy}");
        self.service
            .submit(Operation::PutBucketPolicy {
                bucket: bucket.to_string(),
                region: self.region(),
                policy,
            })
            .await
    }

    pub async fn list_buckets(&self) -> Result<ServiceReply, Error> {
        log::info!("listing buckets");
        self.service
            .submit(Operation::ListBuckets {
                region: self.region(),
            })
            .await
    }

    pub async fn get_bucket_policy(&self) -> Result<ServiceReply, Error> {
        log::info!("reading policy of bucket {}", self.config.bucket);
        self.service
            .submit(Operation::GetBucketPolicy {
                bucket: self.config.bucket.clone(),
                region: self.region(),
            })
            .await
    }

    pub async fn get_bucket_encryption(&self) -> Result<ServiceReply, Error> {
        log::info!("reading encryption of bucket {}", self.config.bucket);
        self.service
            .submit(Operation::GetBucketEncryption {
                bucket: self.config.bucket.clone(),
                region: self.region(),
            })
            .await
    }

    /// Turns on `AES256` default encryption for the primary bucket.
    pub async fn enable_encryption(&self) -> Result<ServiceReply, Error> {
        let config = default_encryption();
        log::info!(
            "enabling encryption on bucket {}: {}",
            self.config.bucket,
            config.to_json()
        );
        self.service
            .submit(Operation::PutBucketEncryption {
                bucket: self.config.bucket.clone(),
                region: self.region(),
                config,
            })
            .await
    }

    /// Deletes the primary bucket, which must be empty.
    pub async fn delete_bucket(&self) -> Result<ServiceReply, Error> {
        log::info!("deleting bucket {}", self.config.bucket);
        self.service
            .submit(Operation::DeleteBucket {
                bucket: self.config.bucket.clone(),
                region: self.region(),
            })
            .await
    }

    /// Uploads the file at `path` to the configured object key, replacing
    /// whatever is stored there.
    pub async fn upload_small_file(&self, path: impl AsRef<Path>) -> Result<ServiceReply, Error> {
        let data = read_file(path.as_ref()).await?;
        log::info!(
            "uploading {} ({} bytes) to {}/{}",
            path.as_ref().display(),
            data.len(),
            self.config.bucket,
            self.config.object_key
        );
        self.put_object(&self.config.bucket, &self.config.object_key, data, None, None)
            .await
    }

    /// Same call as [`Self::upload_small_file`]; on a versioned bucket it adds a version.
    pub async fn upload_new_version(&self, path: impl AsRef<Path>) -> Result<ServiceReply, Error> {
        self.upload_small_file(path).await
    }

    pub async fn read_object(&self) -> Result<ServiceReply, Error> {
        log::info!(
            "reading object {}/{}",
            self.config.bucket,
            self.config.object_key
        );
        self.service
            .submit(Operation::GetObject {
                bucket: self.config.bucket.clone(),
                region: self.region(),
                key: self.config.object_key.clone(),
            })
            .await
    }

    pub async fn enable_versioning(&self) -> Result<ServiceReply, Error> {
        log::info!("enabling versioning on bucket {}", self.config.bucket);
        self.service
            .submit(Operation::PutBucketVersioning {
                bucket: self.config.bucket.clone(),
                region: self.region(),
                status: VersioningStatus::Enabled,
            })
            .await
    }

    /// Replaces the primary bucket's lifecycle with the two Glacier rules.
    pub async fn put_lifecycle_policy(&self) -> Result<ServiceReply, Error> {
        let config = glacier_lifecycle(&self.config.lifecycle_prefix);
        let json = serde_json::to_string(&config).map_err(ValidationErr::from)?;
        log::info!("putting lifecycle on bucket {}: {json}", self.config.bucket);
        self.service
            .submit(Operation::PutBucketLifecycle {
                bucket: self.config.bucket.clone(),
                region: self.region(),
                config,
            })
            .await
    }

    /// Hosts a static website in the website bucket.
    ///
    /// The five steps run in this order, and a failing step ends the sequence
    /// without undoing the steps before it:
    ///
    /// 1. create the bucket,
    /// 2. apply the scoped policy,
    /// 3. set the website configuration,
    /// 4. upload `index_path` as the public index document,
    /// 5. upload `error_path` as the public error document.
    ///
    /// Each file is read right before it is uploaded.
    pub async fn host_static_website(
        &self,
        index_path: impl AsRef<Path>,
        error_path: impl AsRef<Path>,
    ) -> Result<Vec<ServiceReply>, Error> {
        let bucket = &self.config.website_bucket;
        let mut replies = Vec::with_capacity(5);

        log::info!("[1/5] creating website bucket {bucket}");
        replies.push(self.create_bucket(bucket).await?);

        log::info!("[2/5] applying scoped policy");
        replies.push(self.update_bucket_policy(bucket).await?);

        log::info!("[3/5] configuring website on {bucket}");
        replies.push(
            self.service
                .submit(Operation::PutBucketWebsite {
                    bucket: bucket.clone(),
                    region: self.region(),
                    config: default_website(&self.config.index_key, &self.config.error_key),
                })
                .await?,
        );

        log::info!("[4/5] uploading index document");
        replies.push(
            self.upload_public_page(index_path.as_ref(), &self.config.index_key)
                .await?,
        );

        log::info!("[5/5] uploading error document");
        replies.push(
            self.upload_public_page(error_path.as_ref(), &self.config.error_key)
                .await?,
        );

        log::info!("website hosted in bucket {bucket}");
        Ok(replies)
    }

    async fn upload_public_page(&self, path: &Path, key: &str) -> Result<ServiceReply, Error> {
        let data = read_file(path).await?;
        log::info!(
            "uploading {} to {}/{key}",
            path.display(),
            self.config.website_bucket
        );
        self.put_object(
            &self.config.website_bucket,
            key,
            data,
            Some(TEXT_HTML),
            Some(PUBLIC_READ),
        )
        .await
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
        acl: Option<&str>,
    ) -> Result<ServiceReply, Error> {
        self.service
            .submit(Operation::PutObject {
                bucket: bucket.to_string(),
                region: self.region(),
                key: key.to_string(),
                data,
                content_type: content_type.map(String::from),
                acl: acl.map(String::from),
            })
            .await
    }
}

async fn read_file(path: &Path) -> Result<Bytes, Error> {
    Ok(tokio::fs::read(path).await.map(Bytes::from)?)
}
