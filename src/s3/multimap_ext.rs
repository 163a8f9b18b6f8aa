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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Trims a header value and collapses runs of spaces into one, as SigV4 requires.
fn canonical_header_value(s: &str) -> String {
    s.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other {
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        self.iter_all()
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .map(move |value| format!("{}={}", url_encode(key), url_encode(value)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(String::as_str));
        }

        sorted
            .into_iter()
            .flat_map(|(key, mut values)| {
                values.sort_unstable();
                values
                    .into_iter()
                    .map(move |value| format!("{}={}", url_encode(key), url_encode(value)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<String> = values.iter().map(|v| canonical_header_value(v)).collect();
            vs.sort();
            btmap.insert(key, vs.join(","));
        }

        let signed_headers = btmap.keys().cloned().collect::<Vec<_>>().join(";");
        let canonical_headers = btmap
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n");

        (signed_headers, canonical_headers)
    }
}
