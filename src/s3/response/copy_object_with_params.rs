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
use crate::s3::error::{Error, NetworkError, S3ServerError, ValidationErr};
use crate::s3::error_response::S3ErrorResponse;
use crate::s3::response_traits::{HasBucket, HasObject, HasRegion, HasS3Fields, HasVersion};
use crate::s3::types::{FromS3Response, S3Request};
use crate::s3::utils::{UtcTime, from_iso8601utc, get_text_result, trim_quotes};
use async_trait::async_trait;
use bytes::{Buf, Bytes};
use http::{HeaderMap, StatusCode};
use std::mem;
use xmltree::Element;

/// Response of
/// [copy_object_with_params()](crate::s3::client::RgwClient::copy_object_with_params)
/// API
#[derive(Clone, Debug)]
pub struct CopyObjectWithParamsResponse {
    request: S3Request,
    headers: HeaderMap,
    etag: String,
    last_modified: UtcTime,
}

impl_has_s3fields!(CopyObjectWithParamsResponse);

impl HasBucket for CopyObjectWithParamsResponse {}
impl HasObject for CopyObjectWithParamsResponse {}
impl HasRegion for CopyObjectWithParamsResponse {}
impl HasVersion for CopyObjectWithParamsResponse {}

impl CopyObjectWithParamsResponse {
    /// ETag of the destination object, without surrounding quotes.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Modification time of the destination object as reported by the gateway.
    pub fn last_modified(&self) -> UtcTime {
        self.last_modified
    }

    /// Source bucket and object of the copy.
    pub fn source(&self) -> Option<(String, String)> {
        self.request
            .copy_source()
            .map(|(b, o)| (b.to_string(), o.to_string()))
    }
}

#[async_trait]
impl FromS3Response for CopyObjectWithParamsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let status: StatusCode = resp.status();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;

        if status != StatusCode::OK {
            let (bucket, object) = request
                .copy_source()
                .or_else(|| Some((request.bucket()?, request.object()?)))
                .map(|(b, o)| (b.to_string(), o.to_string()))
                .unwrap_or_default();
            let response = S3ErrorResponse::from_response_parts(
                status.as_u16(),
                headers,
                &body,
                &format!("/{bucket}/{object}"),
                Some(&bucket),
                Some(&object),
            );
            log::debug!(
                "copy {bucket}/{object} -> {}: HTTP {status}, {}",
                request.resource(),
                response.code()
            );
            return Err(S3ServerError::RemoteCopy {
                bucket,
                object,
                http_status_code: status.as_u16(),
                response: Box::new(response),
            }
            .into());
        }

        let root = Element::parse(body.reader()).map_err(ValidationErr::from)?;
        let etag = trim_quotes(get_text_result(&root, "ETag")?);
        let last_modified =
            from_iso8601utc(&get_text_result(&root, "LastModified")?).map_err(ValidationErr::from)?;

        Ok(Self {
            request,
            headers,
            etag,
            last_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::error_response::ErrorCode;
    use crate::s3::response::test_support::response;
    use crate::s3::types::ToS3Request;
    use crate::s3::client::RgwClient;

    fn copy_request() -> S3Request {
        copy_request_from("b1", "o1")
    }

    fn copy_request_from(src_bucket: &str, src_object: &str) -> S3Request {
        RgwClient::new_path_style("localhost:8000", "ak", "sk", false)
            .unwrap()
            .copy_object_with_params(src_bucket, src_object, "b1", "o1-dest")
            .build()
            .to_s3request()
            .unwrap()
    }

    #[tokio::test]
    async fn test_copy_success() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <CopyObjectResult><LastModified>2024-05-01T10:20:30.123Z</LastModified>\
            <ETag>\"9b2cf535f27731c974343645a3985328\"</ETag></CopyObjectResult>";
        let resp = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(200, body)))
            .await
            .unwrap();

        assert_eq!(resp.etag(), "9b2cf535f27731c974343645a3985328");
        assert_eq!(resp.bucket(), "b1");
        assert_eq!(resp.object(), "o1-dest");
        assert_eq!(
            resp.last_modified().to_rfc3339(),
            "2024-05-01T10:20:30.123+00:00"
        );
        assert_eq!(resp.source(), Some(("b1".to_string(), "o1".to_string())));
    }

    #[tokio::test]
    async fn test_copy_failure_is_keyed_by_source() {
        let body = "<Error><Code>NoSuchKey</Code><Message>missing</Message></Error>";
        let err = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(404, body)))
            .await
            .unwrap_err();

        match err {
            Error::S3Server(S3ServerError::RemoteCopy {
                bucket,
                object,
                http_status_code,
                response,
            }) => {
                assert_eq!((bucket.as_str(), object.as_str()), ("b1", "o1"));
                assert_eq!(http_status_code, 404);
                assert_eq!(response.code(), ErrorCode::NoSuchKey);
                assert_eq!(response.object_name().as_deref(), Some("o1"));
                assert_eq!(response.request_id(), "req-1");
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_copy_failure_with_empty_source_bucket() {
        let err = CopyObjectWithParamsResponse::from_s3response(
            copy_request_from("", "o1"),
            Ok(response(400, "<Error><Code>InvalidArgument</Code></Error>")),
        )
        .await
        .unwrap_err();

        match err {
            Error::S3Server(S3ServerError::RemoteCopy {
                bucket,
                object,
                response,
                ..
            }) => {
                assert_eq!((bucket.as_str(), object.as_str()), ("", "o1"));
                assert_eq!(response.resource(), "//o1");
                assert_eq!(response.object_name().as_deref(), Some("o1"));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_copy_etag_quotes_are_stripped() {
        for etag in ["\"\"abc\"\"", "\"abc", "abc\""] {
            let body = format!(
                "<CopyObjectResult><LastModified>2024-05-01T10:20:30.123Z</LastModified>\
                 <ETag>{etag}</ETag></CopyObjectResult>"
            );
            let resp = CopyObjectWithParamsResponse::from_s3response(
                copy_request(),
                Ok(response(200, body)),
            )
            .await
            .unwrap();
            assert_eq!(resp.etag(), "abc");
        }
    }

    #[tokio::test]
    async fn test_copy_precondition_failed_without_body() {
        let err = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(412, "")))
            .await
            .unwrap_err();
        let server = err.server_response().unwrap();
        assert_eq!(server.code(), ErrorCode::PreconditionFailed);
    }

    #[tokio::test]
    async fn test_copy_success_with_malformed_body() {
        let err = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(200, "<CopyObjectResult>")))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErr::XmlParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_copy_success_missing_last_modified() {
        let body = "<CopyObjectResult><ETag>\"abc\"</ETag></CopyObjectResult>";
        let err = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(200, body)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationErr::XmlError(_))));
    }

    #[tokio::test]
    async fn test_copy_success_bad_timestamp() {
        let body = "<CopyObjectResult><ETag>\"abc\"</ETag>\
            <LastModified>yesterday</LastModified></CopyObjectResult>";
        let err = CopyObjectWithParamsResponse::from_s3response(copy_request(), Ok(response(200, body)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErr::TimeParseError(_))
        ));
    }
}
