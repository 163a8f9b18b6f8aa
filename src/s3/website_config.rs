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

//! Static website hosting configuration of a bucket

use crate::s3::utils::xml_escape;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(rename = "Suffix")]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    #[serde(rename = "Key")]
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteConfig {
    #[serde(rename = "ErrorDocument", skip_serializing_if = "Option::is_none", default)]
    pub error_document: Option<ErrorDocument>,
    #[serde(rename = "IndexDocument")]
    pub index_document: IndexDocument,
}

impl WebsiteConfig {
    /// Website served from `index_suffix`, answering errors with the object `error_key`
    pub fn new(index_suffix: impl Into<String>, error_key: impl Into<String>) -> Self {
        Self {
            error_document: Some(ErrorDocument {
                key: error_key.into(),
            }),
            index_document: IndexDocument {
                suffix: index_suffix.into(),
            },
        }
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<WebsiteConfiguration>");
        data.push_str(&format!(
            "<IndexDocument><Suffix>{}</Suffix></IndexDocument>",
            xml_escape(&self.index_document.suffix)
        ));
        if let Some(error_document) = &self.error_document {
            data.push_str(&format!(
                "<ErrorDocument><Key>{}</Key></ErrorDocument>",
                xml_escape(&error_document.key)
            ));
        }
        data.push_str("</WebsiteConfiguration>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_xml() {
        assert_eq!(
            WebsiteConfig::new("index.html", "error.html").to_xml(),
            "<WebsiteConfiguration><IndexDocument><Suffix>index.html</Suffix></IndexDocument>\
             <ErrorDocument><Key>error.html</Key></ErrorDocument></WebsiteConfiguration>"
        );
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(
            serde_json::to_value(WebsiteConfig::new("index.html", "error.html")).unwrap(),
            serde_json::json!({
                "ErrorDocument": {"Key": "error.html"},
                "IndexDocument": {"Suffix": "index.html"}
            })
        );
    }
}
