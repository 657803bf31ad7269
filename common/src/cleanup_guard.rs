// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
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

use minio_rgw::s3::RgwClient;
use minio_rgw::s3::types::S3Api;

/// Removes objects created by a live test
pub struct CleanupGuard {
    client: RgwClient,
    bucket_name: String,
    object_names: Vec<String>,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: RgwClient, bucket_name: S) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
            object_names: Vec::new(),
        }
    }

    pub fn track<S: Into<String>>(&mut self, object_name: S) {
        self.object_names.push(object_name.into());
    }

    pub async fn cleanup(&self) {
        for object_name in &self.object_names {
            cleanup(self.client.clone(), &self.bucket_name, object_name).await;
        }
    }
}

pub async fn cleanup(client: RgwClient, bucket_name: &str, object_name: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing {bucket_name}/{object_name}");
        },
        outcome = client.delete_object_with_params(bucket_name, object_name).build().send() => {
            if let Err(e) = outcome {
                eprintln!("Error removing '{bucket_name}/{object_name}':\n{e}");
            }
        }
    );
}
