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

use crate::s3::builders::{AdminQuery, AdminQueryBldr};
use crate::s3::client::RgwClient;

impl RgwClient {
    /// Creates an [`AdminQuery`] request builder for the administrative resource
    /// `/{namespace}/{resource}`, for example `("admin", "log")`.
    ///
    /// To execute the request, call [`AdminQuery::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing an [`AdminQueryResponse`](crate::s3::response::AdminQueryResponse).
    /// The response is handed back unvalidated; reading and interpreting it is up to the caller.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_rgw::s3::RgwClient;
    /// use minio_rgw::s3::multimap_ext::{Multimap, MultimapExt};
    /// use minio_rgw::s3::response::AdminQueryResponse;
    /// use minio_rgw::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RgwClient::new_path_style("localhost:8000", "access", "secret", false).unwrap();
    ///     let mut query = Multimap::new();
    ///     query.add("type", "metadata");
    ///     let resp: AdminQueryResponse = client
    ///         .admin_query("admin", "log")
    ///         .query_params(query)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{}", resp.text().await.unwrap());
    /// }
    /// ```
    pub fn admin_query<S1: Into<String>, S2: Into<String>>(
        &self,
        namespace: S1,
        resource: S2,
    ) -> AdminQueryBldr {
        AdminQuery::builder()
            .client(self.clone())
            .namespace(namespace)
            .resource(resource)
    }
}
