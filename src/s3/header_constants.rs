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

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const HOST: &str = "Host";
pub const CONTENT_LENGTH: &str = "Content-Length";

pub const X_AMZ_VERSION_ID: &str = "x-amz-version-id";
pub const X_AMZ_ID_2: &str = "x-amz-id-2";
pub const X_AMZ_REQUEST_ID: &str = "x-amz-request-id";

pub const X_AMZ_COPY_SOURCE: &str = "x-amz-copy-source";

pub const X_AMZ_METADATA_DIRECTIVE: &str = "x-amz-metadata-directive";

pub const X_AMZ_DATE: &str = "X-Amz-Date";

pub const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";

pub const X_AMZ_CONTENT_SHA256: &str = "X-Amz-Content-SHA256";

// RGW multisite sync directives, forwarded verbatim as query parameters
pub const RGWX_SOURCE_ZONE: &str = "rgwx-source-zone";
pub const RGWX_SOURCE_ENDPOINT: &str = "rgwx-source-endpoint";
pub const RGWX_CLIENT_ID: &str = "rgwx-client-id";
pub const RGWX_OP_ID: &str = "rgwx-op-id";
pub const RGWX_COPY_IF_NEWER: &str = "rgwx-copy-if-newer";
