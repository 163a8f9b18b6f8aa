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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use lazy_static::lazy_static;
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 hash of an empty payload
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Unreserved characters per RFC 3986 stay as they are; everything else is escaped.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'/');

/// Percent-encodes a query key or value the way SigV4 expects
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).collect()
}

/// Percent-encodes an object key, keeping `/` separators intact
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    format!("{:x}", Sha256::new_with_prefix(data).finalize())
}

/// Gets bas64 encoded MD5 hash of given data, as used by the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ"))?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Serde adapter writing optional dates as `2020-11-24T00:00:00.000Z`
pub mod aws_date_format {
    use super::{UtcTime, from_iso8601utc, to_iso8601utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<UtcTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&to_iso8601utc(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<UtcTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| from_iso8601utc(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Escapes text for use as XML element content
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes surrounding double quotes, as found around ETag values
pub fn trim_quotes(mut s: String) -> String {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s.drain(0..1);
        s.pop();
    }
    s
}

fn invalid_bucket_name(bucket_name: &str, reason: &str) -> ValidationErr {
    ValidationErr::InvalidBucketName {
        bucket_name: bucket_name.to_string(),
        reason: reason.to_string(),
    }
}

/// Validates given bucket name against the S3 naming rules
pub fn check_bucket_name(bucket_name: impl AsRef<str>, strict: bool) -> Result<(), ValidationErr> {
    let bucket_name: &str = bucket_name.as_ref();
    if bucket_name.trim().is_empty() {
        return Err(invalid_bucket_name(bucket_name, "bucket name cannot be empty"));
    }
    if bucket_name.len() < 3 {
        return Err(invalid_bucket_name(
            bucket_name,
            "bucket name cannot be less than 3 characters",
        ));
    }
    if bucket_name.len() > 63 {
        return Err(invalid_bucket_name(
            bucket_name,
            "bucket name cannot be greater than 63 characters",
        ));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(invalid_bucket_name(
            bucket_name,
            "bucket name cannot be an IP address",
        ));
    }
    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(invalid_bucket_name(
            bucket_name,
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        ));
    }

    let regex: &Regex = if strict {
        &BUCKET_NAME_STRICT_REGEX
    } else {
        &BUCKET_NAME_REGEX
    };
    if !regex.is_match(bucket_name) {
        return Err(invalid_bucket_name(
            bucket_name,
            "bucket name does not follow S3 standards",
        ));
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: impl AsRef<str>) -> Result<(), ValidationErr> {
    let name = object_name.as_ref();
    if name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if name.len() > 1024 {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{name}' cannot be greater than 1024 bytes"
        )));
    }
    Ok(())
}

/// Inserts a valueless query parameter such as `?policy` into the optional extra parameters
pub fn insert(data: Option<Multimap>, key: impl Into<String>) -> Multimap {
    let mut result: Multimap = data.unwrap_or_default();
    result.add(key.into(), "");
    result
}

/// Gets text value of given XML element for given tag.
pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::XmlError(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(ValidationErr::XmlError(format!(
            "text of <{tag}> tag not found"
        )))?
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets text value of given XML element for given tag, or an empty string.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("my-s3-bucket", true).is_ok());
        assert!(check_bucket_name("website-host-bucket", true).is_ok());
        assert!(check_bucket_name("www.example.com", true).is_ok());

        assert!(check_bucket_name("", true).is_err());
        assert!(check_bucket_name("ab", true).is_err());
        assert!(check_bucket_name("a".repeat(64), true).is_err());
        assert!(check_bucket_name("192.168.1.1", true).is_err());
        assert!(check_bucket_name("my..bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", false).is_ok());
    }

    #[test]
    fn test_check_bucket_name_reports_name() {
        match check_bucket_name("ab", true) {
            Err(ValidationErr::InvalidBucketName { bucket_name, .. }) => {
                assert_eq!(bucket_name, "ab")
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("smallfile.txt").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name("k".repeat(1025)).is_err());
    }

    #[test]
    fn test_hashes() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_dates() {
        let t = Utc.with_ymd_and_hms(2020, 11, 24, 0, 0, 0).unwrap();
        assert_eq!(to_signer_date(t), "20201124");
        assert_eq!(to_amz_date(t), "20201124T000000Z");
        assert_eq!(to_iso8601utc(t), "2020-11-24T00:00:00.000Z");
        assert_eq!(from_iso8601utc("2020-11-24T00:00:00.000Z").unwrap(), t);
        assert_eq!(from_iso8601utc("2020-11-24T00:00:00Z").unwrap(), t);
    }

    #[test]
    fn test_encoding() {
        assert_eq!(url_encode("a b&c~"), "a%20b%26c~");
        assert_eq!(urlencode_object_key("dir/my file.txt"), "dir/my%20file.txt");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a<b>&'c\""), "a&lt;b&gt;&amp;&apos;c&quot;");
        assert_eq!(xml_escape("Move smallfile to Glacier"), "Move smallfile to Glacier");
    }

    #[test]
    fn test_trim_quotes() {
        assert_eq!(trim_quotes("\"abc\"".into()), "abc");
        assert_eq!(trim_quotes("abc".into()), "abc");
        assert_eq!(trim_quotes("\"".into()), "\"");
    }

    #[test]
    fn test_insert_adds_valueless_param() {
        let q = insert(None, "policy");
        assert_eq!(q.get("policy").map(String::as_str), Some(""));
    }

    #[test]
    fn test_xml_text_helpers() {
        let root = Element::parse("<A><B>x</B><C/></A>".as_bytes()).unwrap();
        assert_eq!(get_text_result(&root, "B").unwrap(), "x");
        assert!(get_text_result(&root, "D").is_err());
        assert_eq!(get_text_option(&root, "C"), Some(String::new()));
        assert_eq!(get_text_default(&root, "D"), "");
    }
}
