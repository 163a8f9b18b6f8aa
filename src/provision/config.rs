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

use typed_builder::TypedBuilder;

pub const DEFAULT_BUCKET: &str = "my-s3-bucket";
pub const DEFAULT_WEBSITE_BUCKET: &str = "website-host-bucket";
pub const DEFAULT_REGION: &str = "ap-south-1";
pub const DEFAULT_OBJECT_KEY: &str = "smallfile.txt";
pub const DEFAULT_LIFECYCLE_PREFIX: &str = "smallfile";
pub const DEFAULT_INDEX_KEY: &str = "index.html";
pub const DEFAULT_ERROR_KEY: &str = "error.html";

/// Names of the resources the provisioning operations act on.
///
/// ```
/// use s3_provision::provision::ProvisionConfig;
///
/// let config = ProvisionConfig::builder()
///     .bucket("data-bucket")
///     .region("eu-west-1")
///     .build();
/// assert_eq!(config.website_bucket, "website-host-bucket");
/// assert_eq!(config.policy_target(), "website-host-bucket");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct ProvisionConfig {
    /// Primary bucket used by the single-call operations
    #[builder(default = DEFAULT_BUCKET.to_string(), setter(into))]
    pub bucket: String,
    /// Bucket the static website is hosted in
    #[builder(default = DEFAULT_WEBSITE_BUCKET.to_string(), setter(into))]
    pub website_bucket: String,
    /// Bucket that receives the scoped policy; the website bucket when unset
    #[builder(default, setter(into))]
    pub policy_target_bucket: Option<String>,
    /// Location constraint for every bucket created
    #[builder(default = DEFAULT_REGION.to_string(), setter(into))]
    pub region: String,
    #[builder(default = DEFAULT_OBJECT_KEY.to_string(), setter(into))]
    pub object_key: String,
    /// Prefix of the lifecycle rule moving the small file to Glacier
    #[builder(default = DEFAULT_LIFECYCLE_PREFIX.to_string(), setter(into))]
    pub lifecycle_prefix: String,
    #[builder(default = DEFAULT_INDEX_KEY.to_string(), setter(into))]
    pub index_key: String,
    #[builder(default = DEFAULT_ERROR_KEY.to_string(), setter(into))]
    pub error_key: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProvisionConfig {
    /// Bucket the scoped policy is submitted to.
    pub fn policy_target(&self) -> &str {
        self.policy_target_bucket
            .as_deref()
            .unwrap_or(&self.website_bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProvisionConfig::default();
        assert_eq!(config.bucket, "my-s3-bucket");
        assert_eq!(config.website_bucket, "website-host-bucket");
        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.object_key, "smallfile.txt");
        assert_eq!(config.lifecycle_prefix, "smallfile");
        assert_eq!(config.index_key, "index.html");
        assert_eq!(config.error_key, "error.html");
        assert_eq!(config.policy_target(), "website-host-bucket");
    }

    #[test]
    fn test_policy_target_override() {
        let config = ProvisionConfig::builder()
            .policy_target_bucket(Some("shared-policy-bucket".to_string()))
            .build();
        assert_eq!(config.policy_target(), "shared-policy-bucket");
    }
}
