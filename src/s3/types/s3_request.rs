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

//! S3Request struct and its execution through the client's pipeline.

use crate::s3::client::{DEFAULT_LOCATION, RgwClient};
use crate::s3::error::Error;
use crate::s3::multimap_ext::Multimap;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic request handed to a [`RequestExecutor`](crate::s3::client::RequestExecutor)
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: RgwClient,

    #[builder(!default)] // force required
    method: Method,

    /// location hint used for signing; [`DEFAULT_LOCATION`] when unset
    #[builder(default, setter(into))]
    region: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    /// source bucket and object of a server-side copy
    #[builder(default, setter(strip_option))]
    copy_source: Option<(String, String)>,

    /// hex SHA256 of the payload; the empty-payload hash when unset
    #[builder(default, setter(into))]
    content_sha256: Option<String>,

    /// location hint computed by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: String,
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Location hint the request is signed for.
    pub fn region(&self) -> &str {
        if self.inner_region.is_empty() {
            self.region.as_deref().unwrap_or(DEFAULT_LOCATION)
        } else {
            &self.inner_region
        }
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Source bucket and object, set on server-side copy requests.
    pub fn copy_source(&self) -> Option<(&str, &str)> {
        self.copy_source
            .as_ref()
            .map(|(b, o)| (b.as_str(), o.as_str()))
    }

    pub fn content_sha256(&self) -> Option<&str> {
        self.content_sha256.as_deref()
    }

    /// Path-style resource of the request, used as context in error documents
    pub fn resource(&self) -> String {
        match (self.bucket(), self.object()) {
            (Some(b), Some(o)) => format!("/{b}/{o}"),
            (Some(b), None) => format!("/{b}"),
            _ => "/".to_string(),
        }
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`](crate::s3::types::S3Api::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self
            .region
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        log::debug!(
            "{} {} (location {}, {} query params)",
            self.method,
            self.resource(),
            self.inner_region,
            self.query_params.len()
        );

        let client = self.client.clone();
        client.execute(self).await
    }
}
