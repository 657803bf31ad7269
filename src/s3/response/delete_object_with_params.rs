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

use crate::impl_has_s3fields;
use crate::s3::error::{Error, NetworkError, S3ServerError};
use crate::s3::error_response::S3ErrorResponse;
use crate::s3::response_traits::{HasBucket, HasObject, HasRegion, HasS3Fields, HasVersion};
use crate::s3::types::{FromS3Response, S3Request};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of
/// [delete_object_with_params()](crate::s3::client::RgwClient::delete_object_with_params)
/// API
#[derive(Clone, Debug)]
pub struct DeleteObjectWithParamsResponse {
    request: S3Request,
    headers: HeaderMap,
}

impl_has_s3fields!(DeleteObjectWithParamsResponse);

impl HasBucket for DeleteObjectWithParamsResponse {}
impl HasObject for DeleteObjectWithParamsResponse {}
impl HasRegion for DeleteObjectWithParamsResponse {}
impl HasVersion for DeleteObjectWithParamsResponse {}

#[async_trait]
impl FromS3Response for DeleteObjectWithParamsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let status: StatusCode = resp.status();
        let headers: HeaderMap = mem::take(resp.headers_mut());

        if status == StatusCode::NO_CONTENT {
            return Ok(Self { request, headers });
        }

        let body = resp.bytes().await.map_err(NetworkError::from)?;
        let bucket = request.bucket().unwrap_or_default().to_string();
        let object = request.object().unwrap_or_default().to_string();
        let response = S3ErrorResponse::from_response_parts(
            status.as_u16(),
            headers,
            &body,
            &request.resource(),
            Some(&bucket),
            Some(&object),
        );
        log::debug!("delete {bucket}/{object}: HTTP {status}, {}", response.code());

        Err(S3ServerError::RemoteDelete {
            bucket,
            object,
            http_status_code: status.as_u16(),
            response: Box::new(response),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::error_response::ErrorCode;
    use crate::s3::response::test_support::{request, response};
    use http::Method;

    #[tokio::test]
    async fn test_delete_no_content_is_success() {
        let resp = DeleteObjectWithParamsResponse::from_s3response(
            request(Method::DELETE, "b1", "o1"),
            Ok(response(204, "")),
        )
        .await
        .unwrap();
        assert_eq!(resp.bucket(), "b1");
        assert_eq!(resp.object(), "o1");
        assert_eq!(resp.version_id(), None);
    }

    #[tokio::test]
    async fn test_delete_ok_status_is_failure() {
        let err = DeleteObjectWithParamsResponse::from_s3response(
            request(Method::DELETE, "b1", "o1"),
            Ok(response(200, "")),
        )
        .await
        .unwrap_err();
        match err {
            Error::S3Server(S3ServerError::RemoteDelete {
                http_status_code, ..
            }) => assert_eq!(http_status_code, 200),
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_access_denied() {
        let body = "<Error><Code>AccessDenied</Code><Message>denied</Message>\
            <RequestId>tx-9</RequestId></Error>";
        let err = DeleteObjectWithParamsResponse::from_s3response(
            request(Method::DELETE, "b1", "o1"),
            Ok(response(403, body)),
        )
        .await
        .unwrap_err();

        let server = err.server_response().unwrap();
        assert_eq!(server.code(), ErrorCode::AccessDenied);
        assert_eq!(server.message().as_deref(), Some("denied"));
        assert_eq!(server.request_id(), "tx-9");
        assert_eq!(server.bucket_name().as_deref(), Some("b1"));
        assert_eq!(server.resource(), "/b1/o1");
    }
}
