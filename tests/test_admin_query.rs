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

use bytes::Bytes;
use http::{Method, StatusCode};
use minio_rgw::s3::multimap_ext::{Multimap, MultimapExt};
use minio_rgw::s3::response::AdminQueryResponse;
use minio_rgw::s3::types::S3Api;
use minio_rgw_common::mock_gateway::{MockGateway, ScriptedReply};

#[tokio::test]
async fn admin_log_shard_info() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let mut query = Multimap::new();
    query.add("type", "data");
    let resp: AdminQueryResponse = client
        .admin_query("admin", "log")
        .query_params(query)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&resp.bytes().await.unwrap()).unwrap();
    assert_eq!(body["num_objects"], 128);

    let recorded = gateway.last_request().unwrap();
    assert_eq!(recorded.method, Method::GET);
    assert_eq!(recorded.resource, "/admin/log");
    assert_eq!(recorded.region, "default");
    assert_eq!(recorded.query_params.get("type").unwrap(), "data");
    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn admin_log_shard_listing_forwards_all_params() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let mut query = Multimap::new();
    query.add("type", "data");
    query.add("id", "17");
    query.add("marker", "1_1700000000.000001_42.1");
    query.add("max-entries", "100");
    query.add("extra-info", "true");
    let mut headers = Multimap::new();
    headers.add("x-rgw-trace-id", "sync-17");

    let resp = client
        .admin_query("admin", "log")
        .query_params(query)
        .headers(headers)
        .build()
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["marker"], "1_1700000000.000001_42.1");
    assert_eq!(body["truncated"], false);

    let recorded = gateway.last_request().unwrap();
    assert_eq!(recorded.query_params.len(), 5);
    assert_eq!(recorded.query_params.get("max-entries").unwrap(), "100");
    assert_eq!(recorded.headers.get("x-rgw-trace-id").unwrap(), "sync-17");
}

#[tokio::test]
async fn admin_query_returns_failures_unvalidated() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let resp = client
        .admin_query("admin", "no-such-resource")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    drop(resp);

    gateway.script(ScriptedReply::Respond {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: Bytes::from_static(b"<Error><Code>SlowDown</Code></Error>"),
    });
    let resp = client.admin_query("admin", "log").build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    drop(resp);

    assert_eq!(gateway.calls(), 2);
    assert_eq!(gateway.released_bodies(), 2);
}

#[tokio::test]
async fn admin_query_into_response_hands_over_body() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let mut query = Multimap::new();
    query.add("type", "zone");
    let resp = client
        .admin_query("admin", "config")
        .query_params(query)
        .build()
        .send()
        .await
        .unwrap();
    let raw: reqwest::Response = resp.into_response();
    assert_eq!(gateway.released_bodies(), 0);

    let body: serde_json::Value = serde_json::from_slice(&raw.bytes().await.unwrap()).unwrap();
    assert_eq!(body["name"], "default");
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn admin_query_transport_failure() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.script(ScriptedReply::TransportFailure("connection reset".into()));

    let err = client
        .admin_query("admin", "log")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn admin_query_region_override() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    client
        .admin_query("admin", "log")
        .region(Some("zg-west".to_string()))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(gateway.last_request().unwrap().region, "zg-west");
}
