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

//! # Ceph RADOS Gateway extensions (`minio-rgw`)
//!
//! This crate adds the vendor-specific operations of the Ceph RADOS Gateway (RGW) on top of
//! a path-style S3 request pipeline:
//!
//! * [`admin_query`](s3::client::RgwClient::admin_query) issues an authenticated `GET` against an
//!   administrative resource such as `/admin/log` and hands the raw response back to the caller.
//! * [`copy_object_with_params`](s3::client::RgwClient::copy_object_with_params) performs a
//!   server-side copy carrying free-form `rgwx-*` query parameters.
//! * [`delete_object_with_params`](s3::client::RgwClient::delete_object_with_params) deletes an
//!   object with free-form query parameters.
//!
//! Each operation has a request builder implementing [`s3::types::S3Api`]; calling
//! [`send`](s3::types::S3Api::send) executes the request through the client's
//! [`RequestExecutor`](s3::client::RequestExecutor) and returns a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use minio_rgw::s3::RgwClient;
//! use minio_rgw::s3::multimap_ext::{Multimap, MultimapExt};
//! use minio_rgw::s3::response::AdminQueryResponse;
//! use minio_rgw::s3::types::S3Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RgwClient::new_path_style("localhost:8000", "access", "secret", false).unwrap();
//!
//!     let mut query = Multimap::new();
//!     query.add("type", "data");
//!     let resp: AdminQueryResponse = client
//!         .admin_query("admin", "log")
//!         .query_params(query)
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("status {}: {}", resp.status(), resp.text().await.unwrap());
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`s3::client::RgwClient`] returns a builder struct
//! - Builders implement [`s3::types::ToS3Request`] for request conversion and [`s3::types::S3Api`] for execution
//! - Responses implement [`s3::types::FromS3Response`] for status checks and decoding
//! - Transport and signing are delegated to a [`RequestExecutor`](s3::client::RequestExecutor),
//!   so the operations can run against any pipeline (the default one is [`s3::client::HttpExecutor`])

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
