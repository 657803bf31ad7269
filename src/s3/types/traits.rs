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

//! Core traits for request and response handling.

use super::s3_request::S3Request;
use crate::s3::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete [`S3Request`].
///
/// All request builders implement this trait. Local validation (bucket and
/// object names) happens here, so a builder that fails validation never reaches
/// the execution pipeline.
///
/// # See Also
///
/// * [`S3Api`] - The trait that uses `ToS3Request` as part of its request execution pipeline
/// * [`FromS3Response`] - The counterpart trait for converting HTTP responses into typed responses
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    ///
    /// # Returns
    ///
    /// * `Result<S3Request, ValidationErr>` - The executable request on success,
    ///   or an error if the request cannot be built correctly.
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

/// Trait for converting HTTP responses into strongly typed response objects.
///
/// Implementations own the status interpretation of their operation: the
/// execution pipeline hands back responses of any status unmodified.
#[async_trait]
pub trait FromS3Response: Sized {
    /// Converts the result of executing `s3req` into a typed response.
    ///
    /// # Parameters
    ///
    /// * `s3req` - The request that was executed
    /// * `response` - The raw response, or the transport error that prevented one
    async fn from_s3response(
        s3req: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all request builders.
///
/// # Type Parameters
///
/// * `S3Response` - The specific response type associated with this request builder.
///   Must implement the [`FromS3Response`] trait.
#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// This method consumes the request builder, converts it with
    /// [`ToS3Request::to_s3request`], executes it exactly once, and converts the
    /// outcome with [`FromS3Response::from_s3response`].
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
