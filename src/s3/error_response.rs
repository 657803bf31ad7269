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

//! Translation of gateway failure answers into typed error documents

use crate::s3::header_constants::{X_AMZ_ID_2, X_AMZ_REQUEST_ID};
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::str::FromStr;
use typed_builder::TypedBuilder;
use xmltree::Element;

/// Error codes returned by the gateway in the `<Code>` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ErrorCode {
    #[default]
    NoError,
    PermanentRedirect,
    Redirect,
    BadRequest,
    AccessDenied,
    SignatureDoesNotMatch,
    NoSuchBucket,
    NoSuchKey,
    ResourceNotFound,
    MethodNotAllowed,
    ResourceConflict,
    PreconditionFailed,
    InvalidRequest,
    InvalidArgument,
    InternalError,

    OtherError(String), // catch-all for codes not modelled above
}

#[allow(dead_code)]
const ALL_ERROR_CODES: &[ErrorCode] = &[
    ErrorCode::NoError,
    ErrorCode::PermanentRedirect,
    ErrorCode::Redirect,
    ErrorCode::BadRequest,
    ErrorCode::AccessDenied,
    ErrorCode::SignatureDoesNotMatch,
    ErrorCode::NoSuchBucket,
    ErrorCode::NoSuchKey,
    ErrorCode::ResourceNotFound,
    ErrorCode::MethodNotAllowed,
    ErrorCode::ResourceConflict,
    ErrorCode::PreconditionFailed,
    ErrorCode::InvalidRequest,
    ErrorCode::InvalidArgument,
    ErrorCode::InternalError,
];

impl FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "noerror" => ErrorCode::NoError,
            "permanentredirect" => ErrorCode::PermanentRedirect,
            "redirect" => ErrorCode::Redirect,
            "badrequest" => ErrorCode::BadRequest,
            "accessdenied" => ErrorCode::AccessDenied,
            "signaturedoesnotmatch" => ErrorCode::SignatureDoesNotMatch,
            "nosuchbucket" => ErrorCode::NoSuchBucket,
            "nosuchkey" => ErrorCode::NoSuchKey,
            "resourcenotfound" => ErrorCode::ResourceNotFound,
            "methodnotallowed" => ErrorCode::MethodNotAllowed,
            "resourceconflict" => ErrorCode::ResourceConflict,
            "preconditionfailed" => ErrorCode::PreconditionFailed,
            "invalidrequest" => ErrorCode::InvalidRequest,
            "invalidargument" => ErrorCode::InvalidArgument,
            "internalerror" => ErrorCode::InternalError,
            _ => ErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NoError => write!(f, "NoError"),
            ErrorCode::PermanentRedirect => write!(f, "PermanentRedirect"),
            ErrorCode::Redirect => write!(f, "Redirect"),
            ErrorCode::BadRequest => write!(f, "BadRequest"),
            ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            ErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            ErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            ErrorCode::PreconditionFailed => write!(f, "PreconditionFailed"),
            ErrorCode::InvalidRequest => write!(f, "InvalidRequest"),
            ErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            ErrorCode::InternalError => write!(f, "InternalError"),
            ErrorCode::OtherError(code) => write!(f, "{code}"),
        }
    }
}

/// Typed error document returned by the gateway for a failed request.
///
/// Built by [`S3ErrorResponse::from_response_parts`] from the status, headers and body of a
/// failed answer. When the body carries no usable XML error document, the code and message are
/// derived from the HTTP status instead.
#[derive(Clone, Debug, TypedBuilder)]
pub struct S3ErrorResponse {
    code: ErrorCode,
    #[builder(default)]
    message: Option<String>,
    #[builder(default)]
    headers: HeaderMap,
    #[builder(default, setter(into))]
    resource: String,
    #[builder(default, setter(into))]
    request_id: String,
    #[builder(default, setter(into))]
    host_id: String,
    #[builder(default)]
    bucket_name: Option<String>,
    #[builder(default)]
    object_name: Option<String>,
}

impl S3ErrorResponse {
    /// Decodes the gateway answer of a failed request.
    ///
    /// `bucket` and `object` name the resource the caller acted upon; they fill in the
    /// corresponding fields when the document does not carry them.
    pub fn from_response_parts(
        http_status_code: u16,
        headers: HeaderMap,
        body: &Bytes,
        resource: &str,
        bucket: Option<&str>,
        object: Option<&str>,
    ) -> Self {
        if !body.is_empty() {
            match Element::parse(body.clone().reader()) {
                Ok(root) if !get_text_default(&root, "Code").is_empty() => {
                    return Self::from_document(&root, headers, resource, bucket, object);
                }
                Ok(root) => log::warn!(
                    "error document <{}> without <Code> for HTTP {http_status_code} on {resource}",
                    root.name
                ),
                Err(e) => log::warn!(
                    "undecodable error body for HTTP {http_status_code} on {resource}: {e}"
                ),
            }
        }

        let (code, message) = Self::code_from_status(http_status_code, bucket, object);
        let request_id = header_text(&headers, X_AMZ_REQUEST_ID);
        let host_id = header_text(&headers, X_AMZ_ID_2);

        Self {
            code,
            message: Some(message),
            headers,
            resource: resource.to_string(),
            request_id,
            host_id,
            bucket_name: bucket.map(String::from),
            object_name: object.map(String::from),
        }
    }

    fn from_document(
        root: &Element,
        headers: HeaderMap,
        resource: &str,
        bucket: Option<&str>,
        object: Option<&str>,
    ) -> Self {
        let code = match ErrorCode::from_str(&get_text_default(root, "Code")) {
            Ok(v) => v,
            Err(never) => match never {},
        };
        let resource_text = get_text_default(root, "Resource");
        Self {
            code,
            message: get_text_option(root, "Message"),
            headers,
            resource: if resource_text.is_empty() {
                resource.to_string()
            } else {
                resource_text
            },
            request_id: get_text_default(root, "RequestId"),
            host_id: get_text_default(root, "HostId"),
            bucket_name: get_text_option(root, "BucketName").or(bucket.map(String::from)),
            object_name: get_text_option(root, "Key").or(object.map(String::from)),
        }
    }

    fn code_from_status(
        http_status_code: u16,
        bucket: Option<&str>,
        object: Option<&str>,
    ) -> (ErrorCode, String) {
        match http_status_code {
            301 => (ErrorCode::PermanentRedirect, "Moved Permanently".into()),
            307 => (ErrorCode::Redirect, "Temporary redirect".into()),
            400 => (ErrorCode::BadRequest, "Bad request".into()),
            403 => (ErrorCode::AccessDenied, "Access denied".into()),
            404 => match (bucket, object) {
                (_, Some(_)) => (ErrorCode::NoSuchKey, "Object does not exist".into()),
                (Some(_), None) => (ErrorCode::NoSuchBucket, "Bucket does not exist".into()),
                (None, None) => (
                    ErrorCode::ResourceNotFound,
                    "Request resource not found".into(),
                ),
            },
            405 | 501 => (
                ErrorCode::MethodNotAllowed,
                "The specified method is not allowed against this resource".into(),
            ),
            409 => (
                ErrorCode::ResourceConflict,
                "Request resource conflicts".into(),
            ),
            412 => (
                ErrorCode::PreconditionFailed,
                "At least one of the pre-conditions you specified did not hold".into(),
            ),
            500..=599 => (
                ErrorCode::InternalError,
                format!("server failed with HTTP status code {http_status_code}"),
            ),
            v => (
                ErrorCode::OtherError(v.to_string()),
                format!("unexpected HTTP status code {v}"),
            ),
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
    pub fn code(&self) -> ErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
    pub fn object_name(&self) -> &Option<String> {
        &self.object_name
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "code: {}, message: {:?}, resource: {}, request_id: {}, host_id: {}, bucket_name: {:?}, object_name: {:?}",
            self.code,
            self.message,
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name,
            self.object_name,
        )
    }
}

impl std::error::Error for S3ErrorResponse {}
