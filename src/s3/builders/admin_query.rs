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
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::AdminQueryResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for a GET on a RADOS Gateway administrative resource, such as
/// `/admin/log` or `/admin/config`.
///
/// This struct constructs the parameters required for the [`RgwClient::admin_query`](crate::s3::client::RgwClient::admin_query) method.
/// Namespace and resource are used verbatim as the first two path segments.
#[derive(Clone, Debug, TypedBuilder)]
pub struct AdminQuery {
    #[builder(!default)] // force required
    client: RgwClient,
    #[builder(default)]
    headers: Multimap,
    #[builder(default)]
    query_params: Multimap,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    namespace: String,
    #[builder(setter(into))] // force required + accept Into<String>
    resource: String,
}

pub type AdminQueryBldr = AdminQueryBuilder<((RgwClient,), (), (), (), (String,), (String,))>;

impl S3Api for AdminQuery {
    type S3Response = AdminQueryResponse;
}

impl ToS3Request for AdminQuery {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.namespace)
            .object(self.resource)
            .query_params(self.query_params)
            .headers(self.headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::multimap_ext::MultimapExt;

    fn client() -> RgwClient {
        RgwClient::new_path_style("localhost:8000", "ak", "sk", false).unwrap()
    }

    #[test]
    fn test_admin_query_passes_params_through() {
        let mut query = Multimap::new();
        query.add("type", "data");
        query.add("id", "3");
        let mut headers = Multimap::new();
        headers.add("x-rgw-trace", "1");

        let req = client()
            .admin_query("admin", "log")
            .query_params(query)
            .headers(headers)
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.resource(), "/admin/log");
        assert_eq!(req.query_params().get("type").unwrap(), "data");
        assert_eq!(req.query_params().get("id").unwrap(), "3");
        assert_eq!(req.headers().get("x-rgw-trace").unwrap(), "1");
        assert_eq!(req.region(), "default");
    }

    #[test]
    fn test_admin_query_region_override() {
        let req = client()
            .admin_query("admin", "config")
            .region(Some("zg-east".to_string()))
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.region(), "zg-east");
        assert!(req.query_params().is_empty());
    }
}
