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
use minio_rgw::s3::error::{Error, S3ServerError, ValidationErr};
use minio_rgw::s3::error_response::ErrorCode;
use minio_rgw::s3::header_constants::*;
use minio_rgw::s3::response::CopyObjectWithParamsResponse;
use minio_rgw::s3::response_traits::{HasBucket, HasObject, HasRegion};
use minio_rgw::s3::types::S3Api;
use minio_rgw_common::mock_gateway::{MockGateway, ScriptedReply};
use minio_rgw_common::rand_src::RandSrc;
use std::collections::HashMap;
use std::time::Duration;

#[tokio::test]
async fn copy_object_with_params_32k() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    let etag = gateway.put_object("b1", "o1", RandSrc::new(32768).into_bytes());

    let resp: CopyObjectWithParamsResponse = client
        .copy_object_with_params("b1", "o1", "b1", "o1-dest")
        .extra_query_params(HashMap::from([(
            RGWX_COPY_IF_NEWER.to_string(),
            "true".to_string(),
        )]))
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.bucket(), "b1");
    assert_eq!(resp.object(), "o1-dest");
    assert_eq!(resp.region(), "default");
    assert_eq!(resp.etag(), etag);
    assert!(!resp.etag().starts_with('"'));

    let stored = gateway.stat_object("b1", "o1-dest").unwrap();
    assert_eq!(stored.data.len(), 32768);
    assert_eq!(stored.content_type, "binary/octet-stream");
    assert_eq!(stored.last_modified, resp.last_modified());

    let recorded = gateway.last_request().unwrap();
    assert_eq!(recorded.method, Method::PUT);
    assert_eq!(recorded.resource, "/b1/o1-dest");
    assert_eq!(recorded.headers.get(X_AMZ_COPY_SOURCE).unwrap(), "b1/o1");
    assert_eq!(recorded.query_params.get(RGWX_COPY_IF_NEWER).unwrap(), "true");
    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn copy_object_with_params_metadata_and_query() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.put_object("src-bucket", "dir/a b.txt", "hello world");

    let metadata = HashMap::from([
        ("x-amz-meta-sync-origin".to_string(), "zone-a".to_string()),
        (X_AMZ_COPY_SOURCE.to_string(), "other/object".to_string()),
    ]);
    let params = HashMap::from([
        (RGWX_SOURCE_ZONE.to_string(), "8d1b4b64".to_string()),
        (RGWX_CLIENT_ID.to_string(), "sync-agent".to_string()),
    ]);

    let resp = client
        .copy_object_with_params("src-bucket", "dir/a b.txt", "dst-bucket", "copy.txt")
        .metadata(metadata)
        .extra_query_params(params)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.source(), Some(("src-bucket".to_string(), "dir/a b.txt".to_string())));

    let recorded = gateway.last_request().unwrap();
    let copy_sources: Vec<&String> = recorded
        .headers
        .iter_all()
        .filter(|(k, _)| k.eq_ignore_ascii_case(X_AMZ_COPY_SOURCE))
        .flat_map(|(_, v)| v.iter())
        .collect();
    assert_eq!(copy_sources, vec!["src-bucket/dir/a%20b.txt"]);
    assert_eq!(recorded.query_params.get(RGWX_SOURCE_ZONE).unwrap(), "8d1b4b64");
    assert_eq!(recorded.query_params.get(RGWX_CLIENT_ID).unwrap(), "sync-agent");

    let stored = gateway.stat_object("dst-bucket", "copy.txt").unwrap();
    assert_eq!(stored.metadata["x-amz-meta-sync-origin"], "zone-a");
    assert_eq!(&stored.data[..], b"hello world");
}

#[tokio::test]
async fn copy_object_with_params_missing_source() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let err = client
        .copy_object_with_params("b1", "missing", "b2", "dest")
        .build()
        .send()
        .await
        .unwrap_err();

    match err {
        Error::S3Server(S3ServerError::RemoteCopy {
            bucket,
            object,
            http_status_code,
            response,
        }) => {
            assert_eq!(bucket, "b1");
            assert_eq!(object, "missing");
            assert_eq!(http_status_code, 404);
            assert_eq!(response.code(), ErrorCode::NoSuchKey);
            assert_eq!(response.resource(), "/b1/missing");
            assert!(!response.request_id().is_empty());
        }
        e => panic!("unexpected error {e:?}"),
    }
    assert!(gateway.stat_object("b2", "dest").is_none());
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn copy_object_with_params_copy_if_newer() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.put_object("b1", "o1", "version one");
    let params = HashMap::from([(RGWX_COPY_IF_NEWER.to_string(), "true".to_string())]);

    client
        .copy_object_with_params("b1", "o1", "b2", "o1")
        .extra_query_params(params.clone())
        .build()
        .send()
        .await
        .unwrap();

    // destination is now at least as new as the source
    let err = client
        .copy_object_with_params("b1", "o1", "b2", "o1")
        .extra_query_params(params.clone())
        .build()
        .send()
        .await
        .unwrap_err();
    let server = err.server_response().unwrap();
    assert_eq!(server.code(), ErrorCode::PreconditionFailed);
    assert!(matches!(
        err,
        Error::S3Server(S3ServerError::RemoteCopy {
            http_status_code: 412,
            ..
        })
    ));

    tokio::time::sleep(Duration::from_millis(5)).await;
    let etag = gateway.put_object("b1", "o1", "version two");
    let resp = client
        .copy_object_with_params("b1", "o1", "b2", "o1")
        .extra_query_params(params)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.etag(), etag);

    assert_eq!(gateway.calls(), 3);
    assert_eq!(gateway.released_bodies(), 3);
}

#[tokio::test]
async fn copy_object_with_params_malformed_success_body() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.script(ScriptedReply::Respond {
        status: StatusCode::OK,
        body: Bytes::from_static(b"<CopyObjectResult><ETag>\"abc\"</ETag>"),
    });

    let err = client
        .copy_object_with_params("b1", "o1", "b1", "o2")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::XmlParseError(_))));
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn copy_object_with_params_server_error_without_body() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.script(ScriptedReply::Respond {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: Bytes::new(),
    });

    let err = client
        .copy_object_with_params("b1", "o1", "b1", "o2")
        .build()
        .send()
        .await
        .unwrap_err();
    match &err {
        Error::S3Server(e) => {
            assert_eq!(e.http_status_code(), 500);
            assert_eq!(e.response().code(), ErrorCode::InternalError);
            assert_eq!(e.response().object_name().as_deref(), Some("o1"));
        }
        e => panic!("unexpected error {e:?}"),
    }
    assert_eq!(gateway.released_bodies(), 1);
}

#[tokio::test]
async fn copy_object_with_params_transport_failure() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.put_object("b1", "o1", "data");
    gateway.script(ScriptedReply::TransportFailure("connection reset by peer".into()));

    let err = client
        .copy_object_with_params("b1", "o1", "b1", "o2")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.released_bodies(), 0);
    assert!(gateway.stat_object("b1", "o2").is_none());
}

#[tokio::test]
async fn copy_object_with_params_concurrent() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    gateway.put_object("b1", "src", RandSrc::seeded(4096, 1).into_bytes());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .copy_object_with_params("b1", "src", "b1", format!("dst-{i}"))
                    .build()
                    .send()
                    .await
            })
        })
        .collect();
    for resp in futures::future::join_all(tasks).await {
        resp.unwrap().unwrap();
    }

    assert_eq!(gateway.calls(), 8);
    assert_eq!(gateway.released_bodies(), 8);
    for i in 0..8 {
        assert!(gateway.stat_object("b1", &format!("dst-{i}")).is_some());
    }
}

#[tokio::test]
async fn copy_object_with_params_unbalanced_etag_quotes() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);
    for etag in ["\"\"abc\"\"", "\"abc"] {
        gateway.script(ScriptedReply::Respond {
            status: StatusCode::OK,
            body: Bytes::from(format!(
                "<CopyObjectResult><LastModified>2024-05-01T10:20:30.123Z</LastModified>\
                 <ETag>{etag}</ETag></CopyObjectResult>"
            )),
        });
        let resp = client
            .copy_object_with_params("b1", "o1", "b1", "o2")
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.etag(), "abc");
    }
}

#[tokio::test]
async fn copy_object_with_params_empty_source_bucket() {
    let gateway = MockGateway::new();
    let client = MockGateway::client(&gateway);

    let err = client
        .copy_object_with_params("", "o1", "b2", "dest")
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::S3Server(S3ServerError::RemoteCopy {
            bucket,
            object,
            http_status_code,
            ..
        }) => {
            assert_eq!(bucket, "");
            assert_eq!(object, "o1");
            assert_eq!(http_status_code, 400);
        }
        e => panic!("unexpected error {e:?}"),
    }
    assert_eq!(gateway.calls(), 1);
    assert!(gateway.stat_object("b2", "dest").is_none());
}
