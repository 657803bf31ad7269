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

use crate::s3::builders::{CopyObjectWithParams, CopyObjectWithParamsBldr};
use crate::s3::client::RgwClient;

impl RgwClient {
    /// Creates a [`CopyObjectWithParams`] request builder that copies
    /// `src_bucket/src_object` to `dst_bucket/dst_object` on the server side.
    ///
    /// Metadata entries become request headers and extra query parameters are passed
    /// through untouched, which is how RGW multisite directives such as
    /// `rgwx-source-zone` or `rgwx-copy-if-newer` reach the gateway.
    ///
    /// To execute the request, call [`CopyObjectWithParams::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`CopyObjectWithParamsResponse`](crate::s3::response::CopyObjectWithParamsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_rgw::s3::RgwClient;
    /// use minio_rgw::s3::response::CopyObjectWithParamsResponse;
    /// use minio_rgw::s3::types::S3Api;
    /// use std::collections::HashMap;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RgwClient::new_path_style("localhost:8000", "access", "secret", false).unwrap();
    ///     let params = HashMap::from([("rgwx-copy-if-newer".to_string(), "true".to_string())]);
    ///     let resp: CopyObjectWithParamsResponse = client
    ///         .copy_object_with_params("b1", "o1", "b1", "o1-dest")
    ///         .extra_query_params(params)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("copied, etag {}", resp.etag());
    /// }
    /// ```
    pub fn copy_object_with_params<S1, S2, S3, S4>(
        &self,
        src_bucket: S1,
        src_object: S2,
        dst_bucket: S3,
        dst_object: S4,
    ) -> CopyObjectWithParamsBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        CopyObjectWithParams::builder()
            .client(self.clone())
            .src_bucket(src_bucket)
            .src_object(src_object)
            .bucket(dst_bucket)
            .object(dst_object)
    }
}
