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

use crate::s3::error::{Error, NetworkError};
use crate::s3::response_traits::{HasRegion, HasS3Fields};
use crate::s3::types::{FromS3Response, S3Request};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [admin_query()](crate::s3::client::RgwClient::admin_query) API.
///
/// Wraps the unread gateway response of any status. The body is released when it
/// is read through [`bytes`](Self::bytes) or [`text`](Self::text), or when this value
/// is dropped.
#[derive(Debug)]
pub struct AdminQueryResponse {
    request: S3Request,
    response: reqwest::Response,
}

#[async_trait]
impl FromS3Response for AdminQueryResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        Ok(Self {
            request,
            response: response?,
        })
    }
}

impl HasS3Fields for AdminQueryResponse {
    fn request(&self) -> &S3Request {
        &self.request
    }

    fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }
}

impl HasRegion for AdminQueryResponse {}

impl AdminQueryResponse {
    /// HTTP status returned by the gateway.
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Reads the whole body.
    pub async fn bytes(self) -> Result<Bytes, Error> {
        Ok(self.response.bytes().await.map_err(NetworkError::from)?)
    }

    /// Reads the whole body as text.
    pub async fn text(self) -> Result<String, Error> {
        Ok(self.response.text().await.map_err(NetworkError::from)?)
    }

    /// Hands over the raw response; reading it is then up to the caller.
    pub fn into_response(self) -> reqwest::Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::response::test_support::{request, response};
    use http::Method;

    #[tokio::test]
    async fn test_admin_response_is_not_validated() {
        let resp = AdminQueryResponse::from_s3response(
            request(Method::GET, "admin", "log"),
            Ok(response(403, "<Error><Code>AccessDenied</Code></Error>")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            resp.headers().get("x-amz-request-id").unwrap(),
            "req-1"
        );
        assert_eq!(resp.region(), "default");
        assert_eq!(
            resp.text().await.unwrap(),
            "<Error><Code>AccessDenied</Code></Error>"
        );
    }

    #[tokio::test]
    async fn test_admin_response_propagates_transport_error() {
        let err = AdminQueryResponse::from_s3response(
            request(Method::GET, "admin", "log"),
            Err(NetworkError::from(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            ))
            .into()),
        )
        .await
        .unwrap_err();
        assert!(err.is_transport());
    }
}
