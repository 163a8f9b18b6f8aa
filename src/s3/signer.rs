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

//! Signature V4 for S3 API

use crate::s3::header_constants::AUTHORIZATION;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{UtcTime, sha256_hash, to_amz_date, to_signer_date};
use hex::encode as hexencode;
use hmac::{Hmac, Mac};
use http::Method;
use sha2::Sha256;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns hex encoded HMAC hash for given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hexencode(hmac_hash(key, data))
}

/// Returns scope value of given date, region and service name
pub fn get_scope(date: UtcTime, region: &str, service_name: &str) -> String {
    format!("{}/{region}/{service_name}/aws4_request", to_signer_date(date))
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    let canonical_request =
        format!("{method}\n{uri}\n{query_string}\n{headers}\n\n{signed_headers}\n{content_sha256}");
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{canonical_request_hash}",
        to_amz_date(date)
    )
}

/// Returns signing key of given secret key, date, region and service name
pub fn get_signing_key(secret_key: &str, date: UtcTime, region: &str, service_name: &str) -> Vec<u8> {
    let seed = format!("AWS4{secret_key}");
    [
        to_signer_date(date).as_bytes(),
        region.as_bytes(),
        service_name.as_bytes(),
        b"aws4_request".as_slice(),
    ]
    .iter()
    .fold(seed.into_bytes(), |key, part| hmac_hash(&key, part))
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hmac_hash_hex(signing_key, string_to_sign)
}

/// Returns authorization value for given access key, scope, signed headers and signature
pub fn get_authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Everything needed to sign one S3 request except the headers being signed.
#[derive(Clone, Debug)]
pub struct SigningParams<'a> {
    pub method: &'a Method,
    pub uri: &'a str,
    pub region: &'a str,
    pub query_params: &'a Multimap,
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub content_sha256: &'a str,
    pub date: UtcTime,
}

/// Signs the request described by `params` and adds the `Authorization` header
pub fn sign_v4_s3(params: &SigningParams<'_>, headers: &mut Multimap) {
    let scope = get_scope(params.date, params.region, "s3");
    let (signed_headers, canonical_headers) = headers.get_canonical_headers();
    let canonical_query_string = params.query_params.get_canonical_query_string();
    let canonical_request_hash = get_canonical_request_hash(
        params.method,
        params.uri,
        &canonical_query_string,
        &canonical_headers,
        &signed_headers,
        params.content_sha256,
    );
    let string_to_sign = get_string_to_sign(params.date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(params.secret_key, params.date, params.region, "s3");
    let signature = get_signature(&signing_key, string_to_sign.as_bytes());

    headers.add(
        AUTHORIZATION,
        get_authorization(params.access_key, &scope, &signed_headers, &signature),
    );
}
