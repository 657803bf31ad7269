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

//! Error definitions for RGW operations

use crate::s3::error_response::S3ErrorResponse;
use thiserror::Error;

/// Errors detected locally, before or after talking to the gateway.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("Invalid bucket name: '{name}' - {cause}")]
    InvalidBucketName { name: String, cause: String },

    #[error("Invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("Invalid URI: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("Time parse error: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("HTTP client configuration error: {0}")]
    HttpClientConfig(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ValidationErr {
    fn from(err: reqwest::Error) -> Self {
        ValidationErr::HttpClientConfig(err)
    }
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Failures of the transport underneath the execution pipeline.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-success answers returned by the gateway, decoded and keyed by the object involved.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("copy of '{bucket}/{object}' failed with HTTP {http_status_code}: {response}")]
    RemoteCopy {
        bucket: String,
        object: String,
        http_status_code: u16,
        response: Box<S3ErrorResponse>,
    },

    #[error("delete of '{bucket}/{object}' failed with HTTP {http_status_code}: {response}")]
    RemoteDelete {
        bucket: String,
        object: String,
        http_status_code: u16,
        response: Box<S3ErrorResponse>,
    },
}

impl S3ServerError {
    /// HTTP status code returned by the gateway.
    pub fn http_status_code(&self) -> u16 {
        match self {
            S3ServerError::RemoteCopy {
                http_status_code, ..
            }
            | S3ServerError::RemoteDelete {
                http_status_code, ..
            } => *http_status_code,
        }
    }

    /// Decoded error document returned by the gateway.
    pub fn response(&self) -> &S3ErrorResponse {
        match self {
            S3ServerError::RemoteCopy { response, .. }
            | S3ServerError::RemoteDelete { response, .. } => response,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("S3 server error: {0}")]
    S3Server(#[from] S3ServerError),
}

impl Error {
    /// Returns true when the failure happened in the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Returns the gateway error document if the gateway answered with a failure.
    pub fn server_response(&self) -> Option<&S3ErrorResponse> {
        match self {
            Error::S3Server(e) => Some(e.response()),
            _ => None,
        }
    }
}
