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

//! Response traits for accessing request context and gateway metadata.
//!
//! Responses keep the [`S3Request`] that produced them. These traits read bucket,
//! object and location from that request, and version information from the
//! response headers, so every response type exposes them under the same names.

use crate::s3::header_constants::*;
use crate::s3::types::S3Request;
use http::HeaderMap;

#[macro_export]
/// Implements the `HasS3Fields` trait for the specified types.
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::response_traits::HasS3Fields for $ty {
                /// The request that was sent to the gateway.
                #[inline]
                fn request(&self) -> &$crate::s3::types::S3Request {
                    &self.request
                }

                /// HTTP headers returned by the gateway.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }
            }
        )*
    };
}

pub trait HasS3Fields {
    /// The request that was sent to the gateway.
    fn request(&self) -> &S3Request;
    /// HTTP headers returned by the gateway.
    fn headers(&self) -> &HeaderMap;
}

/// Returns the name of the bucket the request targeted.
pub trait HasBucket: HasS3Fields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket().unwrap_or_default()
    }
}

/// Returns the object key the request targeted.
pub trait HasObject: HasS3Fields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object().unwrap_or_default()
    }
}

/// Returns the location hint the request was signed for.
pub trait HasRegion: HasS3Fields {
    #[inline]
    fn region(&self) -> &str {
        self.request().region()
    }
}

/// Returns the version ID of the object (`x-amz-version-id`), if versioning is enabled for the bucket.
pub trait HasVersion: HasS3Fields {
    #[inline]
    fn version_id(&self) -> Option<&str> {
        self.headers()
            .get(X_AMZ_VERSION_ID)
            .and_then(|v| v.to_str().ok())
    }
}
