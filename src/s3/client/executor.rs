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

//! Request execution pipeline: URL building, signing and transport.

use crate::s3::creds::Provider;
use crate::s3::error::{Error, NetworkError};
use crate::s3::header_constants::*;
use crate::s3::http::{BaseUrl, Url};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::signer::sign_v4_s3;
use crate::s3::types::S3Request;
use crate::s3::utils::{EMPTY_SHA256, to_amz_date, utc_now};
use async_trait::async_trait;
use http::Method;
use std::fmt::Debug;
use std::sync::Arc;

/// Executes a fully described request and returns the raw response.
///
/// Implementations must return responses of every status unmodified: status
/// interpretation belongs to the operation that issued the request. Only
/// failures to obtain a response at all (connection, TLS, signing) are
/// reported as errors. Exactly one round trip is made per call.
#[async_trait]
pub trait RequestExecutor: Debug + Send + Sync {
    async fn execute(&self, request: &S3Request) -> Result<reqwest::Response, Error>;
}

/// Default [`RequestExecutor`]: path-style URLs, AWS Signature V4 and `reqwest` transport.
#[derive(Debug)]
pub struct HttpExecutor {
    http_client: reqwest::Client,
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl HttpExecutor {
    pub fn new(
        http_client: reqwest::Client,
        base_url: BaseUrl,
        provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            provider,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Builds the URL and the complete, signed header set of `request`.
    pub(crate) fn prepare(&self, request: &S3Request) -> Result<(Url, Multimap), Error> {
        let method: &Method = request.method();
        let url = self
            .base_url
            .build_url(request.query_params(), request.bucket(), request.object())?;

        let mut headers: Multimap = request.headers().clone();
        headers.set(HOST, url.host_header_value());

        if matches!(*method, Method::PUT | Method::POST) {
            headers.set(CONTENT_LENGTH, "0");
        }

        let sha256: &str = request.content_sha256().unwrap_or(EMPTY_SHA256);
        headers.set(X_AMZ_CONTENT_SHA256, sha256);

        let date = utc_now();
        headers.set(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.set(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_s3(
                method,
                &url.path,
                request.region(),
                &mut headers,
                request.query_params(),
                &creds.access_key,
                &creds.secret_key,
                sha256,
                date,
            );
        }

        Ok((url, headers))
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: &S3Request) -> Result<reqwest::Response, Error> {
        let (url, headers) = self.prepare(request)?;
        let method: Method = request.method().clone();

        let mut req = self.http_client.request(method.clone(), url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if matches!(method, Method::PUT | Method::POST) {
            req = req.body(bytes::Bytes::new());
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        log::debug!("{method} {url} -> {}", resp.status());
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::client::RgwClient;
    use crate::s3::creds::StaticProvider;

    fn executor(provider: Option<StaticProvider>) -> HttpExecutor {
        HttpExecutor::new(
            reqwest::Client::new(),
            "http://localhost:8000".parse().unwrap(),
            provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>),
        )
    }

    fn request(method: Method, bucket: &str, object: &str) -> S3Request {
        let client = RgwClient::with_executor(Arc::new(executor(None)));
        let mut query_params = Multimap::new();
        query_params.add("rgwx-copy-if-newer", "true");
        S3Request::builder()
            .client(client)
            .method(method)
            .bucket(bucket.to_string())
            .object(object.to_string())
            .query_params(query_params)
            .build()
    }

    #[test]
    fn test_prepare_signed_put() {
        let exec = executor(Some(StaticProvider::new("ak", "sk", Some("session"))));
        let (url, headers) = exec.prepare(&request(Method::PUT, "b1", "o1-dest")).unwrap();

        assert_eq!(
            url.to_string(),
            "http://localhost:8000/b1/o1-dest?rgwx-copy-if-newer=true"
        );
        assert_eq!(headers.get(HOST).unwrap(), "localhost:8000");
        assert_eq!(headers.get(CONTENT_LENGTH).unwrap(), "0");
        assert_eq!(headers.get(X_AMZ_CONTENT_SHA256).unwrap(), EMPTY_SHA256);
        assert_eq!(headers.get(X_AMZ_SECURITY_TOKEN).unwrap(), "session");
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=ak/"));
        assert!(auth.contains("/default/s3/aws4_request"));
        assert!(auth.contains("x-amz-security-token"));
    }

    #[test]
    fn test_prepare_anonymous_delete() {
        let exec = executor(None);
        let (url, headers) = exec.prepare(&request(Method::DELETE, "b1", "o1")).unwrap();
        assert_eq!(url.path, "/b1/o1");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(CONTENT_LENGTH).is_none());
        assert!(headers.get(X_AMZ_DATE).is_some());
    }
}
