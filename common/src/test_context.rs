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

use crate::cleanup_guard::CleanupGuard;
use minio_rgw::s3::RgwClient;
use minio_rgw::s3::creds::StaticProvider;
use minio_rgw::s3::http::BaseUrl;
use std::path::PathBuf;

/// Connection settings of a live gateway, taken from the environment.
#[derive(Clone)]
pub struct TestContext {
    pub client: RgwClient,
    pub base_url: BaseUrl,
    pub access_key: String,
    pub secret_key: String,
    pub ignore_cert_check: Option<bool>,
    pub ssl_cert_file: Option<PathBuf>,
    /// Existing bucket the live tests may write into (`RGW_TEST_BUCKET`).
    pub bucket: String,
    /// Existing object usable as copy source (`RGW_TEST_OBJECT`).
    pub source_object: Option<String>,
}

impl TestContext {
    /// Returns `None` unless `SERVER_ENDPOINT` is set, so live tests skip by default.
    pub fn from_env() -> Option<Self> {
        const DEFAULT_ACCESS_KEY: &str = "rgwadmin";
        const DEFAULT_SECRET_KEY: &str = "rgwadmin";
        const DEFAULT_TEST_BUCKET: &str = "rgw-live-tests";

        let host: String = std::env::var("SERVER_ENDPOINT").ok()?;
        log::debug!("SERVER_ENDPOINT={host}");
        let access_key: String =
            std::env::var("ACCESS_KEY").unwrap_or(DEFAULT_ACCESS_KEY.to_string());
        log::debug!("ACCESS_KEY={access_key}");
        let secret_key: String =
            std::env::var("SECRET_KEY").unwrap_or(DEFAULT_SECRET_KEY.to_string());
        log::debug!("SECRET_KEY=*****");
        let secure: bool = std::env::var("ENABLE_HTTPS")
            .map(|v| v.parse().unwrap_or(true))
            .unwrap_or(false);
        log::debug!("ENABLE_HTTPS={secure}");
        let ssl_cert_file: Option<PathBuf> = std::env::var("RGW_SSL_CERT_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        log::debug!("RGW_SSL_CERT_FILE={ssl_cert_file:?}");
        let ignore_cert_check: bool = std::env::var("IGNORE_CERT_CHECK").is_ok();
        log::debug!("IGNORE_CERT_CHECK={ignore_cert_check}");
        let bucket: String =
            std::env::var("RGW_TEST_BUCKET").unwrap_or(DEFAULT_TEST_BUCKET.to_string());
        let source_object: Option<String> = std::env::var("RGW_TEST_OBJECT").ok();

        let mut base_url: BaseUrl = host.parse().unwrap();
        base_url.https = secure;

        let static_provider = StaticProvider::new(&access_key, &secret_key, None);
        let client = RgwClient::new(
            base_url.clone(),
            Some(static_provider),
            ssl_cert_file.as_deref(),
            Some(ignore_cert_check),
        )
        .unwrap();

        Some(Self {
            client,
            base_url,
            access_key,
            secret_key,
            ignore_cert_check: Some(ignore_cert_check),
            ssl_cert_file,
            bucket,
            source_object,
        })
    }

    /// Guard that removes the objects tracked on it from the test bucket.
    pub fn cleanup_guard(&self) -> CleanupGuard {
        CleanupGuard::new(self.client.clone(), &self.bucket)
    }
}
