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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use s3_provision::provision::{
    DEFAULT_BUCKET, DEFAULT_ERROR_KEY, DEFAULT_INDEX_KEY, DEFAULT_LIFECYCLE_PREFIX,
    DEFAULT_OBJECT_KEY, DEFAULT_REGION, DEFAULT_WEBSITE_BUCKET, ProvisionConfig, Provisioner,
    ServiceReply,
};
use s3_provision::s3::S3ClientBuilder;
use s3_provision::s3::client::S3Client;
use s3_provision::s3::creds::{EnvProvider, StaticProvider};
use s3_provision::s3::http::BaseUrl;

/// Provision buckets on Amazon S3 or an S3 compatible service.
#[derive(Parser)]
#[command(name = "s3-provision", version)]
struct Cli {
    /// Service endpoint
    #[arg(long, env = "S3_ENDPOINT", default_value = "https://s3.amazonaws.com")]
    endpoint: String,
    /// Region used to sign requests and as the location constraint of new buckets
    #[arg(long, env = "S3_REGION", default_value = DEFAULT_REGION)]
    region: String,
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    access_key: Option<String>,
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_key: Option<String>,
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    session_token: Option<String>,
    /// Primary bucket
    #[arg(long, env = "S3_BUCKET", default_value = DEFAULT_BUCKET)]
    bucket: String,
    /// Bucket hosting the static website
    #[arg(long, env = "S3_WEBSITE_BUCKET", default_value = DEFAULT_WEBSITE_BUCKET)]
    website_bucket: String,
    /// Bucket receiving the scoped policy (defaults to the website bucket)
    #[arg(long, env = "S3_POLICY_TARGET_BUCKET")]
    policy_target_bucket: Option<String>,
    /// Key of the small file in the primary bucket
    #[arg(long, env = "S3_OBJECT_KEY", default_value = DEFAULT_OBJECT_KEY)]
    object_key: String,
    /// Key prefix the Glacier lifecycle rules apply to
    #[arg(long, env = "S3_LIFECYCLE_PREFIX", default_value = DEFAULT_LIFECYCLE_PREFIX)]
    lifecycle_prefix: String,
    /// Key of the website index document
    #[arg(long, env = "S3_INDEX_KEY", default_value = DEFAULT_INDEX_KEY)]
    index_key: String,
    /// Key of the website error document
    #[arg(long, env = "S3_ERROR_KEY", default_value = DEFAULT_ERROR_KEY)]
    error_key: String,
    /// Application name and version appended to the user agent, as NAME/VERSION
    #[arg(long, env = "S3_APP_INFO", value_parser = parse_app_info)]
    app_info: Option<(String, String)>,
    /// Skip TLS certificate verification (testing only)
    #[arg(long, env = "S3_IGNORE_CERT_CHECK")]
    ignore_cert_check: bool,
    /// PEM file with extra CA certificates
    #[arg(long, env = "S3_SSL_CERT_FILE")]
    ssl_cert_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a bucket in the configured region
    CreateBucket {
        /// Bucket to create (defaults to the primary bucket)
        #[arg(long)]
        name: Option<String>,
    },
    /// Put a policy granting everyone every action on the primary bucket (insecure)
    PutBucketPolicy,
    /// List all buckets owned by the caller
    ListBuckets,
    /// Print the policy of the primary bucket
    GetBucketPolicy,
    /// Print the default encryption of the primary bucket
    GetBucketEncryption,
    /// Put the scoped read/write/delete policy on the policy target bucket
    UpdateBucketPolicy {
        /// Bucket the policy is requested for (defaults to the primary bucket)
        #[arg(long)]
        name: Option<String>,
    },
    /// Enable AES256 default encryption on the primary bucket
    EnableEncryption,
    /// Delete the primary bucket
    DeleteBucket,
    /// Upload a local file to the object key of the primary bucket
    UploadSmallFile {
        #[arg(long)]
        file: PathBuf,
    },
    /// Print the object stored at the object key of the primary bucket
    ReadObject,
    /// Enable versioning on the primary bucket
    EnableVersioning,
    /// Upload a local file again, creating a new object version
    UploadNewVersion {
        #[arg(long)]
        file: PathBuf,
    },
    /// Put the Glacier lifecycle rules on the primary bucket
    PutLifecyclePolicy,
    /// Create the website bucket and publish the index and error pages
    HostStaticWebsite {
        #[arg(long)]
        index_file: PathBuf,
        #[arg(long)]
        error_file: PathBuf,
    },
}

fn parse_app_info(s: &str) -> Result<(String, String), String> {
    match s.split_once('/') {
        Some((name, version)) if !name.is_empty() && !version.is_empty() => {
            Ok((name.to_string(), version.to_string()))
        }
        _ => Err(format!("expected NAME/VERSION, got '{s}'")),
    }
}

fn build_client(cli: &Cli) -> Result<S3Client, Box<dyn std::error::Error + Send + Sync>> {
    let base_url: BaseUrl = cli.endpoint.parse()?;
    let builder = S3ClientBuilder::new(base_url)
        .region(Some(cli.region.clone()))
        .ssl_cert_file(cli.ssl_cert_file.as_deref())
        .ignore_cert_check(Some(cli.ignore_cert_check))
        .app_info(cli.app_info.clone());

    let builder = match (&cli.access_key, &cli.secret_key) {
        (Some(access_key), Some(secret_key)) => builder.provider(Some(StaticProvider::new(
            access_key,
            secret_key,
            cli.session_token.as_deref(),
        ))),
        _ => builder.provider(EnvProvider::from_env()),
    };
    Ok(builder.build()?)
}

fn print_body(reply: &ServiceReply) {
    println!("{}", String::from_utf8_lossy(&reply.body));
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = build_client(&cli)?;
    let config = ProvisionConfig::builder()
        .bucket(cli.bucket.clone())
        .website_bucket(cli.website_bucket.clone())
        .policy_target_bucket(cli.policy_target_bucket.clone())
        .region(cli.region.clone())
        .object_key(cli.object_key.clone())
        .lifecycle_prefix(cli.lifecycle_prefix.clone())
        .index_key(cli.index_key.clone())
        .error_key(cli.error_key.clone())
        .build();
    let provisioner = Provisioner::new(client, config);
    let bucket = cli.bucket.as_str();

    match cli.command {
        Command::CreateBucket { name } => {
            provisioner
                .create_bucket(name.as_deref().unwrap_or(bucket))
                .await?;
        }
        Command::PutBucketPolicy => {
            provisioner.put_bucket_policy().await?;
        }
        Command::ListBuckets => print_body(&provisioner.list_buckets().await?),
        Command::GetBucketPolicy => print_body(&provisioner.get_bucket_policy().await?),
        Command::GetBucketEncryption => print_body(&provisioner.get_bucket_encryption().await?),
        Command::UpdateBucketPolicy { name } => {
            provisioner
                .update_bucket_policy(name.as_deref().unwrap_or(bucket))
                .await?;
        }
        Command::EnableEncryption => {
            provisioner.enable_encryption().await?;
        }
        Command::DeleteBucket => {
            provisioner.delete_bucket().await?;
        }
        Command::UploadSmallFile { file } => {
            provisioner.upload_small_file(file).await?;
        }
        Command::ReadObject => print_body(&provisioner.read_object().await?),
        Command::EnableVersioning => {
            provisioner.enable_versioning().await?;
        }
        Command::UploadNewVersion { file } => {
            provisioner.upload_new_version(file).await?;
        }
        Command::PutLifecyclePolicy => {
            provisioner.put_lifecycle_policy().await?;
        }
        Command::HostStaticWebsite {
            index_file,
            error_file,
        } => {
            provisioner
                .host_static_website(index_file, error_file)
                .await?;
        }
    }

    info!("done");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_info() {
        assert_eq!(
            parse_app_info("deployer/1.2.0"),
            Ok(("deployer".to_string(), "1.2.0".to_string()))
        );
        assert!(parse_app_info("deployer").is_err());
        assert!(parse_app_info("/1.2.0").is_err());
    }

    #[test]
    fn test_cli_config_flags() {
        let cli = Cli::try_parse_from([
            "s3-provision",
            "--lifecycle-prefix",
            "logs/",
            "--index-key",
            "home.html",
            "--error-key",
            "404.html",
            "--app-info",
            "deployer/1.2.0",
            "put-lifecycle-policy",
        ])
        .unwrap();
        assert_eq!(cli.lifecycle_prefix, "logs/");
        assert_eq!(cli.index_key, "home.html");
        assert_eq!(cli.error_key, "404.html");
        assert_eq!(
            cli.app_info,
            Some(("deployer".to_string(), "1.2.0".to_string()))
        );
        assert!(matches!(cli.command, Command::PutLifecyclePolicy));
    }
}
