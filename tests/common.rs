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

use async_trait::async_trait;
use s3_provision::provision::{Operation, ServiceReply, StorageService};
use s3_provision::s3::error::{Error, NetworkError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::{NamedTempFile, TempDir};

/// Storage service double that records every submitted operation.
///
/// When built with [`RecordingService::failing_at`], the n-th call (1-based)
/// is recorded and then answered with an error.
#[derive(Debug, Default)]
pub struct RecordingService {
    ops: Mutex<Vec<Operation>>,
    fail_at: Option<usize>,
}

impl RecordingService {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn failing_at(n: usize) -> Self {
        Self {
            ops: Mutex::new(Vec::new()),
            fail_at: Some(n),
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageService for RecordingService {
    async fn submit(&self, op: Operation) -> Result<ServiceReply, Error> {
        let mut ops = self.ops.lock().unwrap();
        ops.push(op);
        if self.fail_at == Some(ops.len()) {
            return Err(NetworkError::ServerError(500).into());
        }
        Ok(ServiceReply::default())
    }
}

/// Writes `contents` to a temp file that is removed when dropped.
#[allow(dead_code)]
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A path inside `dir` that does not exist.
#[allow(dead_code)]
pub fn missing_file(dir: &TempDir) -> PathBuf {
    dir.path().join("missing.html")
}
