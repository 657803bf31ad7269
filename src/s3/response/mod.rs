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

//! Responses for [`RgwClient`](crate::s3::client::RgwClient) APIs

mod admin_query;
mod copy_object_with_params;
mod delete_object_with_params;

pub use admin_query::AdminQueryResponse;
pub use copy_object_with_params::CopyObjectWithParamsResponse;
pub use delete_object_with_params::DeleteObjectWithParamsResponse;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::s3::client::RgwClient;
    use crate::s3::types::S3Request;
    use http::{Method, StatusCode};

    pub fn request(method: Method, bucket: &str, object: &str) -> S3Request {
        let client = RgwClient::new_path_style("localhost:8000", "ak", "sk", false).unwrap();
        S3Request::builder()
            .client(client)
            .method(method)
            .bucket(bucket.to_string())
            .object(object.to_string())
            .build()
    }

    pub fn response(status: u16, body: impl Into<reqwest::Body>) -> reqwest::Response {
        let mut resp = http::Response::new(body);
        *resp.status_mut() = StatusCode::from_u16(status).unwrap();
        resp.headers_mut()
            .insert("x-amz-request-id", "req-1".parse().unwrap());
        reqwest::Response::from(resp)
    }
}
