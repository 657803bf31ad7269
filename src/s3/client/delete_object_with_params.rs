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

use crate::s3::builders::{DeleteObjectWithParams, DeleteObjectWithParamsBldr};
use crate::s3::client::RgwClient;

impl RgwClient {
    /// Creates a [`DeleteObjectWithParams`] request builder.
    ///
    /// Bucket and object names are validated before anything is sent. Deleting an object
    /// that does not exist succeeds like deleting one that does.
    ///
    /// To execute the request, call [`DeleteObjectWithParams::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`DeleteObjectWithParamsResponse`](crate::s3::response::DeleteObjectWithParamsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_rgw::s3::RgwClient;
    /// use minio_rgw::s3::types::S3Api;
    /// use std::collections::HashMap;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RgwClient::new_path_style("localhost:8000", "access", "secret", false).unwrap();
    ///     client
    ///         .delete_object_with_params("b1", "o1")
    ///         .extra_query_params(HashMap::from([("rgwx-source-zone".to_string(), "zone-a".to_string())]))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn delete_object_with_params<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> DeleteObjectWithParamsBldr {
        DeleteObjectWithParams::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
