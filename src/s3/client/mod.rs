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

//! RADOS Gateway client to perform admin queries and parameterized object operations

use crate::s3::creds::{Provider, StaticProvider};
use crate::s3::error::{Error, IoError, ValidationErr};
use crate::s3::http::BaseUrl;
use crate::s3::types::S3Request;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

mod admin_query;
mod copy_object_with_params;
mod delete_object_with_params;
mod executor;

pub use executor::{HttpExecutor, RequestExecutor};

/// Storage-location hint sent with every request unless overridden.
///
/// RADOS Gateway accepts `"default"` as region of the default zonegroup; it is
/// also the region used in the Signature V4 credential scope.
pub const DEFAULT_LOCATION: &str = "default";

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use minio_rgw::s3::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(64)
///     .idle_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    /// Set the maximum number of idle connections per host.
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Set how long idle connections are kept in the pool.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Set the TCP keepalive interval.
    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    /// Enable or disable TCP_NODELAY.
    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures an [`RgwClient`] backed by an [`HttpExecutor`].
#[derive(Debug)]
pub struct RgwClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not, set anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// Overall timeout of a single round trip.
    timeout: Option<Duration>,
    /// HTTP connection pool configuration.
    connection_pool_config: ConnectionPoolConfig,
    /// Custom execution pipeline; replaces the HTTP transport settings above.
    executor: Option<Arc<dyn RequestExecutor>>,
}

impl RgwClientBuilder {
    /// Creates a builder given the base URL of the gateway.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            timeout: None,
            connection_pool_config: ConnectionPoolConfig::default(),
            executor: None,
        }
    }

    /// Set the credential provider. If not, set anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the transport timeout of a single round trip. No timeout by default.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Send every request through `executor` instead of the default HTTP pipeline.
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<RgwClient, Error> {
        if let Some(executor) = self.executor {
            return Ok(RgwClient::with_executor(executor));
        }

        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("MinIO (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") minio-rgw/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let buf = std::fs::read(v).map_err(IoError::IOError)?;
            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let http_client = builder.build().map_err(ValidationErr::from)?;
        Ok(RgwClient::with_executor(Arc::new(HttpExecutor::new(
            http_client,
            self.base_url,
            self.provider,
        ))))
    }
}

/// RADOS Gateway client.
///
/// Every operation builds an [`S3Request`] and hands it to the client's
/// [`RequestExecutor`], which owns URL building, signing and transport. The
/// client is cheap to clone and can be shared across tasks.
#[derive(Clone, Debug)]
pub struct RgwClient {
    executor: Arc<dyn RequestExecutor>,
}

impl RgwClient {
    /// Returns a client for given base URL, signing with `provider` when present.
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_rgw::s3::client::RgwClient;
    /// use minio_rgw::s3::creds::StaticProvider;
    /// use minio_rgw::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://localhost:8000".parse().unwrap();
    /// let static_provider = StaticProvider::new("rgw-user", "rgw-secret", None);
    /// let client = RgwClient::new(base_url, Some(static_provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        RgwClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns a path-style client for `endpoint` (`host[:port]`) with static credentials.
    ///
    /// `secure` selects HTTPS regardless of a scheme given in `endpoint`.
    pub fn new_path_style(
        endpoint: &str,
        access_key: &str,
        secret_key: &str,
        secure: bool,
    ) -> Result<Self, Error> {
        let mut base_url: BaseUrl = endpoint.parse()?;
        base_url.https = secure;
        let provider = StaticProvider::new(access_key, secret_key, None);
        Self::new(base_url, Some(provider), None, None)
    }

    /// Returns a client that executes every request through `executor`.
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    pub(crate) async fn execute(&self, request: &S3Request) -> Result<reqwest::Response, Error> {
        self.executor.execute(request).await
    }
}
