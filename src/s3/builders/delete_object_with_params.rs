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

use crate::s3::client::RgwClient;
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::from_flat_map;
use crate::s3::response::DeleteObjectWithParamsResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{EMPTY_SHA256, check_bucket_name, check_object_name};
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the [`DeleteObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html) S3 API operation
/// with extra query parameters.
///
/// This struct constructs the parameters required for the [`RgwClient::delete_object_with_params`](crate::s3::client::RgwClient::delete_object_with_params) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObjectWithParams {
    #[builder(!default)] // force required
    client: RgwClient,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(default)]
    extra_query_params: HashMap<String, String>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
}

pub type DeleteObjectWithParamsBldr =
    DeleteObjectWithParamsBuilder<((RgwClient,), (), (), (String,), (String,))>;

impl S3Api for DeleteObjectWithParams {
    type S3Response = DeleteObjectWithParamsResponse;
}

impl ToS3Request for DeleteObjectWithParams {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, false)?;
        check_object_name(&self.object)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::DELETE)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(from_flat_map(self.extra_query_params))
            .content_sha256(EMPTY_SHA256.to_string())
            .build())
    }
}
